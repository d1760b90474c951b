//! Migration from pre-versioning layout records
//!
//! Early builds persisted the panel array directly, with no version
//! wrapper. Those records are wrapped into the current schema on load so
//! existing layouts keep working.

use log::info;

use tradedeck_types::PanelData;

use super::settings::{LayoutConfig, LAYOUT_VERSION};

/// Try to read `content` as a legacy bare panel array
///
/// Returns `None` when the content is not a legacy record; the caller
/// reports the original parse error in that case.
pub fn migrate_legacy_layout(content: &str) -> Option<LayoutConfig> {
    let panels: Vec<PanelData> = serde_json::from_str(content).ok()?;
    info!(
        "Migrated legacy layout ({} panels) to version {}",
        panels.len(),
        LAYOUT_VERSION
    );
    Some(LayoutConfig::new(panels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradedeck_types::{ContentKind, Instrument, PanelGeometry};

    #[test]
    fn test_legacy_array_is_wrapped() {
        let panels = vec![PanelData::new(
            ContentKind::Watchlist,
            Instrument::new("BTCUSDT", "Bitcoin / Tether", "icons/btc.svg"),
            PanelGeometry::new(0.0, 0.0, 300.0, 200.0),
        )];
        let legacy = serde_json::to_string(&panels).unwrap();

        let config = migrate_legacy_layout(&legacy).unwrap();
        assert_eq!(config.version, LAYOUT_VERSION);
        assert_eq!(config.panels.len(), 1);
        assert_eq!(config.panels[0].content, ContentKind::Watchlist);
    }

    #[test]
    fn test_non_legacy_content_is_rejected() {
        assert!(migrate_legacy_layout("{\"version\": 1}").is_none());
        assert!(migrate_legacy_layout("garbage").is_none());
    }

    #[test]
    fn test_versioned_documents_load_through_from_json() {
        let legacy = "[]";
        let config = LayoutConfig::from_json(legacy).unwrap();
        assert_eq!(config.version, LAYOUT_VERSION);
        assert!(config.panels.is_empty());
    }
}
