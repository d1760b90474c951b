//! Traded instrument references

use serde::{Deserialize, Serialize};

/// A displayable traded instrument
///
/// Closed record with required fields; resolution and equality are by
/// `symbol`. Every panel carries one of these, and a panel whose symbol no
/// longer resolves against the known-instrument set is dropped on load
/// rather than rendered with a dangling reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Uppercase exchange symbol, e.g. "BTCUSDT"
    pub symbol: String,
    /// Human-readable name, e.g. "Bitcoin / Tether"
    pub display_name: String,
    /// Icon asset reference shown in symbol lists and panel headers
    pub icon_ref: String,
}

impl Instrument {
    pub fn new(symbol: &str, display_name: &str, icon_ref: &str) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            display_name: display_name.to_string(),
            icon_ref: icon_ref.to_string(),
        }
    }
}

impl PartialEq for Instrument {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Instrument {}
