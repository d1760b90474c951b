//! Panel data - one placed widget instance on the workspace canvas

use serde::{Deserialize, Serialize};

use crate::geometry::PanelGeometry;
use crate::instrument::Instrument;

/// Which widget a panel hosts
///
/// Immutable after creation except via the explicit change-content
/// operation on the workspace controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Chart,
    AdvancedChart,
    OrderBook,
    Watchlist,
    Alerts,
    Portfolio,
    MarketOverview,
    Liquidations,
    AggregatedOrderBook,
    DepthChart,
    Heatmap,
    News,
}

impl ContentKind {
    /// Stable identifier used in logs and as the widget registry key
    pub fn id(&self) -> &'static str {
        match self {
            ContentKind::Chart => "chart",
            ContentKind::AdvancedChart => "advanced_chart",
            ContentKind::OrderBook => "order_book",
            ContentKind::Watchlist => "watchlist",
            ContentKind::Alerts => "alerts",
            ContentKind::Portfolio => "portfolio",
            ContentKind::MarketOverview => "market_overview",
            ContentKind::Liquidations => "liquidations",
            ContentKind::AggregatedOrderBook => "aggregated_order_book",
            ContentKind::DepthChart => "depth_chart",
            ContentKind::Heatmap => "heatmap",
            ContentKind::News => "news",
        }
    }

    /// All content kinds, in menu order
    pub fn all() -> &'static [ContentKind] {
        &[
            ContentKind::Chart,
            ContentKind::AdvancedChart,
            ContentKind::OrderBook,
            ContentKind::Watchlist,
            ContentKind::Alerts,
            ContentKind::Portfolio,
            ContentKind::MarketOverview,
            ContentKind::Liquidations,
            ContentKind::AggregatedOrderBook,
            ContentKind::DepthChart,
            ContentKind::Heatmap,
            ContentKind::News,
        ]
    }
}

/// Candle interval for chart-kind panels
///
/// Carried uniformly on every panel for simplicity; non-chart widgets
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "15m")]
    M15,
    #[default]
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "1d")]
    D1,
}

/// Market data source for a panel, selectable independently per panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    #[default]
    Binance,
    Coinbase,
    Kraken,
    Bybit,
    Okx,
}

/// One placed widget instance
///
/// The id is assigned at creation and stable for the panel's lifetime; it
/// is the join key for geometry, z-order, and persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelData {
    /// Unique ID for this panel instance
    pub id: String,
    /// Which widget this panel hosts
    pub content: ContentKind,
    /// The traded instrument the hosted widget displays
    pub instrument: Instrument,
    /// Candle interval, consumed by chart kinds only
    #[serde(default)]
    pub timeframe: Timeframe,
    /// Position and size in canvas coordinates
    pub geometry: PanelGeometry,
    /// Market data source
    #[serde(default)]
    pub exchange: Exchange,
    /// Synchronization group token; panels sharing the same non-null value
    /// track the same instrument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_group: Option<String>,
}

impl PanelData {
    /// Create a panel with a fresh unique id and default timeframe/exchange
    pub fn new(content: ContentKind, instrument: Instrument, geometry: PanelGeometry) -> Self {
        Self {
            id: format!("panel_{}", uuid::Uuid::new_v4()),
            content,
            instrument,
            timeframe: Timeframe::default(),
            geometry,
            exchange: Exchange::default(),
            link_group: None,
        }
    }

    /// Whether this panel belongs to any link group
    pub fn is_linked(&self) -> bool {
        self.link_group.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_instrument() -> Instrument {
        Instrument::new("BTCUSDT", "Bitcoin / Tether", "icons/btc.svg")
    }

    #[test]
    fn test_content_kind_serialization() {
        let json = serde_json::to_string(&ContentKind::AggregatedOrderBook).unwrap();
        assert_eq!(json, "\"aggregated_order_book\"");

        let deserialized: ContentKind = serde_json::from_str("\"depth_chart\"").unwrap();
        assert_eq!(deserialized, ContentKind::DepthChart);
    }

    #[test]
    fn test_timeframe_serialization() {
        let json = serde_json::to_string(&Timeframe::M15).unwrap();
        assert_eq!(json, "\"15m\"");

        let deserialized: Timeframe = serde_json::from_str("\"4h\"").unwrap();
        assert_eq!(deserialized, Timeframe::H4);
    }

    #[test]
    fn test_panel_data_serialization() {
        let data = PanelData::new(
            ContentKind::Chart,
            test_instrument(),
            PanelGeometry::new(40.0, 40.0, 420.0, 320.0),
        );

        let json = serde_json::to_string_pretty(&data).unwrap();
        let deserialized: PanelData = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, data.id);
        assert_eq!(deserialized.content, ContentKind::Chart);
        assert_eq!(deserialized.instrument.symbol, "BTCUSDT");
        assert_eq!(deserialized.timeframe, Timeframe::H1);
        assert_eq!(deserialized.exchange, Exchange::Binance);
        assert!(deserialized.link_group.is_none());
    }

    #[test]
    fn test_link_group_omitted_when_absent() {
        let data = PanelData::new(
            ContentKind::News,
            test_instrument(),
            PanelGeometry::default(),
        );
        let json = serde_json::to_string(&data).unwrap();
        assert!(!json.contains("link_group"));
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = PanelData::new(
            ContentKind::Chart,
            test_instrument(),
            PanelGeometry::default(),
        );
        let b = PanelData::new(
            ContentKind::Chart,
            test_instrument(),
            PanelGeometry::default(),
        );
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("panel_"));
    }
}
