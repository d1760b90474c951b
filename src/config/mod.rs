//! Configuration management

mod defaults;
mod migration;
mod settings;

pub use defaults::{default_instrument, default_layout, DEFAULT_SYMBOL};
pub use migration::migrate_legacy_layout;
pub use settings::{LayoutConfig, LayoutStoreError, LAYOUT_VERSION};
