//! Instrument resolution and the built-in symbol registry

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

use tradedeck_types::Instrument;

/// Resolves a symbol string to a displayable instrument record
///
/// Used both to validate persisted panels on load and to populate newly
/// created panels. `None` means the symbol is unknown.
pub trait InstrumentResolver {
    fn resolve(&self, symbol: &str) -> Option<Instrument>;
}

/// Registry of known instruments
///
/// Ships with a seed set of major pairs; exchange integrations register
/// further symbols at runtime as their listings load.
pub struct InstrumentRegistry {
    instruments: HashMap<String, Instrument>,
}

impl InstrumentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            instruments: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in major pairs
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (symbol, name, icon) in BUILTIN_INSTRUMENTS {
            registry.register(Instrument::new(symbol, name, icon));
        }
        registry
    }

    /// Register an instrument, replacing any existing entry for its symbol
    pub fn register(&mut self, instrument: Instrument) {
        log::debug!("Registering instrument {}", instrument.symbol);
        self.instruments
            .insert(instrument.symbol.clone(), instrument);
    }

    /// Whether a symbol is known
    pub fn contains(&self, symbol: &str) -> bool {
        self.instruments.contains_key(&symbol.to_uppercase())
    }

    /// All known symbols, sorted
    pub fn list_symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.instruments.keys().cloned().collect();
        symbols.sort();
        symbols
    }
}

impl InstrumentResolver for InstrumentRegistry {
    fn resolve(&self, symbol: &str) -> Option<Instrument> {
        self.instruments.get(&symbol.to_uppercase()).cloned()
    }
}

impl Default for InstrumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed set of major pairs known without any exchange round-trip
const BUILTIN_INSTRUMENTS: &[(&str, &str, &str)] = &[
    ("BTCUSDT", "Bitcoin / Tether", "icons/btc.svg"),
    ("ETHUSDT", "Ethereum / Tether", "icons/eth.svg"),
    ("SOLUSDT", "Solana / Tether", "icons/sol.svg"),
    ("BNBUSDT", "BNB / Tether", "icons/bnb.svg"),
    ("XRPUSDT", "XRP / Tether", "icons/xrp.svg"),
    ("ADAUSDT", "Cardano / Tether", "icons/ada.svg"),
    ("DOGEUSDT", "Dogecoin / Tether", "icons/doge.svg"),
    ("DOTUSDT", "Polkadot / Tether", "icons/dot.svg"),
    ("AVAXUSDT", "Avalanche / Tether", "icons/avax.svg"),
    ("LINKUSDT", "Chainlink / Tether", "icons/link.svg"),
];

/// Global instrument registry
static GLOBAL_INSTRUMENTS: Lazy<RwLock<InstrumentRegistry>> =
    Lazy::new(|| RwLock::new(InstrumentRegistry::with_builtins()));

/// Get the global instrument registry
pub fn global_instruments() -> &'static RwLock<InstrumentRegistry> {
    &GLOBAL_INSTRUMENTS
}

/// Resolve a symbol against the global registry
pub fn resolve_symbol(symbol: &str) -> Option<Instrument> {
    global_instruments().read().ok()?.resolve(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_resolve() {
        let registry = InstrumentRegistry::with_builtins();
        let btc = registry.resolve("BTCUSDT").unwrap();
        assert_eq!(btc.display_name, "Bitcoin / Tether");
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let registry = InstrumentRegistry::with_builtins();
        assert!(registry.resolve("ethusdt").is_some());
        assert!(registry.contains("solUsdt"));
    }

    #[test]
    fn test_unknown_symbol_is_none() {
        let registry = InstrumentRegistry::with_builtins();
        assert!(registry.resolve("ZZZINVALID").is_none());
    }

    #[test]
    fn test_runtime_registration() {
        let mut registry = InstrumentRegistry::new();
        assert!(registry.resolve("PEPEUSDT").is_none());

        registry.register(Instrument::new("PEPEUSDT", "Pepe / Tether", "icons/pepe.svg"));
        assert!(registry.resolve("PEPEUSDT").is_some());
        assert_eq!(registry.list_symbols(), vec!["PEPEUSDT"]);
    }
}
