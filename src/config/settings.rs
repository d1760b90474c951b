//! Layout persistence - versioned JSON on disk
//!
//! The persisted record is the panel list plus a schema version; z-order
//! and the snap-to-grid toggle are session state and deliberately absent.
//! Persistence is write-through and best-effort: failures are logged by
//! the caller and never block further interaction.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use tradedeck_core::InstrumentResolver;
use tradedeck_types::PanelData;

use super::migration::migrate_legacy_layout;

/// Current layout format version
pub const LAYOUT_VERSION: u32 = 1;

/// Errors raised by the layout store
///
/// All of these are recoverable: the in-memory workspace stays
/// authoritative, and the next mutation will simply attempt to persist
/// again.
#[derive(Debug, Error)]
pub enum LayoutStoreError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("layout I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("layout encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("unsupported layout version {0} (current is {LAYOUT_VERSION})")]
    UnsupportedVersion(u32),
}

/// Persisted workspace layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Version of the layout format
    #[serde(default = "default_version")]
    pub version: u32,
    /// When this layout was last written (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    /// The panel list
    pub panels: Vec<PanelData>,
}

fn default_version() -> u32 {
    LAYOUT_VERSION
}

impl LayoutConfig {
    pub fn new(panels: Vec<PanelData>) -> Self {
        Self {
            version: LAYOUT_VERSION,
            saved_at: None,
            panels,
        }
    }

    /// Load from the default config location
    ///
    /// A missing file yields an empty layout, not an error.
    pub fn load() -> Result<Self, LayoutStoreError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Save to the default config location
    pub fn save(&mut self) -> Result<(), LayoutStoreError> {
        let path = Self::config_path()?;
        self.save_to_path(&path)
    }

    /// Get the layout file path
    fn config_path() -> Result<PathBuf, LayoutStoreError> {
        let dirs = directories::ProjectDirs::from("io", "tradedeck", "tradedeck")
            .ok_or(LayoutStoreError::NoConfigDir)?;
        Ok(dirs.config_dir().join("layout.json"))
    }

    /// Load a layout from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self, LayoutStoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a layout document, accepting the legacy un-versioned format
    pub fn from_json(content: &str) -> Result<Self, LayoutStoreError> {
        match serde_json::from_str::<Self>(content) {
            Ok(config) if config.version > LAYOUT_VERSION => {
                Err(LayoutStoreError::UnsupportedVersion(config.version))
            }
            Ok(config) => Ok(config),
            Err(parse_err) => match migrate_legacy_layout(content) {
                Some(config) => Ok(config),
                None => Err(LayoutStoreError::Encoding(parse_err)),
            },
        }
    }

    /// Save the layout to a specific file path, stamping `saved_at`
    pub fn save_to_path(&mut self, path: &Path) -> Result<(), LayoutStoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.saved_at = Some(Utc::now());
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Drop panels whose instrument does not resolve
    ///
    /// Partial recovery is preferred over total failure: offending panels
    /// are discarded with a warning and the rest of the layout loads.
    /// Returns how many panels were dropped. Callers substitute the
    /// default starter layout when nothing survives.
    pub fn validate_panels(&mut self, resolver: &dyn InstrumentResolver) -> usize {
        let before = self.panels.len();
        self.panels.retain(|panel| {
            let known = resolver.resolve(&panel.instrument.symbol).is_some();
            if !known {
                warn!(
                    "Dropping panel {} with unresolvable instrument {}",
                    panel.id, panel.instrument.symbol
                );
            }
            known
        });
        before - self.panels.len()
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradedeck_core::InstrumentRegistry;
    use tradedeck_types::{ContentKind, Instrument, PanelGeometry};

    fn panel(symbol: &str) -> PanelData {
        PanelData::new(
            ContentKind::Chart,
            Instrument::new(symbol, symbol, "icons/generic.svg"),
            PanelGeometry::new(40.0, 40.0, 420.0, 320.0),
        )
    }

    #[test]
    fn test_round_trip_preserves_valid_panels() {
        let mut config = LayoutConfig::new(vec![panel("BTCUSDT"), panel("ETHUSDT")]);
        config.panels[1].link_group = Some("main".to_string());

        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored = LayoutConfig::from_json(&json).unwrap();

        assert_eq!(restored.version, LAYOUT_VERSION);
        assert_eq!(restored.panels.len(), 2);
        assert_eq!(restored.panels[0].id, config.panels[0].id);
        assert_eq!(restored.panels[0].geometry, config.panels[0].geometry);
        assert_eq!(restored.panels[1].link_group.as_deref(), Some("main"));
    }

    #[test]
    fn test_validation_drops_unresolvable_panels() {
        let registry = InstrumentRegistry::with_builtins();
        let mut config =
            LayoutConfig::new(vec![panel("BTCUSDT"), panel("ZZZINVALID"), panel("ETHUSDT")]);

        let dropped = config.validate_panels(&registry);

        assert_eq!(dropped, 1);
        assert_eq!(config.panels.len(), 2);
        // Survivors are untouched, not mutated
        assert_eq!(config.panels[0].instrument.symbol, "BTCUSDT");
        assert_eq!(config.panels[1].instrument.symbol, "ETHUSDT");
    }

    #[test]
    fn test_future_version_is_rejected() {
        let json = r#"{"version": 99, "panels": []}"#;
        match LayoutConfig::from_json(json) {
            Err(LayoutStoreError::UnsupportedVersion(99)) => {}
            other => panic!("expected UnsupportedVersion, got {:?}", other.map(|c| c.version)),
        }
    }

    #[test]
    fn test_garbage_is_an_encoding_error() {
        assert!(matches!(
            LayoutConfig::from_json("not json at all"),
            Err(LayoutStoreError::Encoding(_))
        ));
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = std::env::temp_dir().join(format!("tradedeck-test-{}", std::process::id()));
        let path = dir.join("layout.json");

        let mut config = LayoutConfig::new(vec![panel("BTCUSDT")]);
        config.save_to_path(&path).unwrap();
        assert!(config.saved_at.is_some());

        let restored = LayoutConfig::load_from_path(&path).unwrap();
        assert_eq!(restored.panels.len(), 1);
        assert_eq!(restored.panels[0].instrument.symbol, "BTCUSDT");

        std::fs::remove_dir_all(&dir).ok();
    }
}
