//! Default starter layout
//!
//! Substituted whenever a restore yields zero valid panels so the
//! workspace never comes up empty: one chart and one order book on the
//! default instrument.

use tradedeck_core::resolve_symbol;
use tradedeck_types::{ContentKind, Instrument, PanelData, PanelGeometry};

/// Symbol used for starter panels and for panels created without a search
pub const DEFAULT_SYMBOL: &str = "BTCUSDT";

/// The default instrument, resolved against the global registry
///
/// Falls back to an inline record if the registry has somehow been
/// emptied; the workspace must always be constructible.
pub fn default_instrument() -> Instrument {
    resolve_symbol(DEFAULT_SYMBOL)
        .unwrap_or_else(|| Instrument::new(DEFAULT_SYMBOL, "Bitcoin / Tether", "icons/btc.svg"))
}

/// One chart panel and one order-book panel, side by side
pub fn default_layout() -> Vec<PanelData> {
    let instrument = default_instrument();
    vec![
        PanelData::new(
            ContentKind::Chart,
            instrument.clone(),
            PanelGeometry::new(40.0, 40.0, 760.0, 520.0),
        ),
        PanelData::new(
            ContentKind::OrderBook,
            instrument,
            PanelGeometry::new(820.0, 40.0, 360.0, 520.0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_shape() {
        let panels = default_layout();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].content, ContentKind::Chart);
        assert_eq!(panels[1].content, ContentKind::OrderBook);
        assert!(panels.iter().all(|p| p.instrument.symbol == DEFAULT_SYMBOL));
        assert!(!panels[0].geometry.intersects(&panels[1].geometry));
    }
}
