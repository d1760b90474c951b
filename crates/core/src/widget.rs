//! Widget host contract
//!
//! Each `ContentKind` maps to exactly one widget implementation. A widget
//! receives `{instrument, timeframe, exchange}` from its panel and is
//! responsible for its own data fetching and rendering; the panel manager
//! never inspects widget internals.

use anyhow::{anyhow, Result};
use std::collections::HashMap;

use tradedeck_types::{ContentKind, Exchange, Instrument, Timeframe};

/// Inputs a hosted widget receives from its panel
#[derive(Debug, Clone)]
pub struct WidgetProps {
    pub instrument: Instrument,
    pub timeframe: Timeframe,
    pub exchange: Exchange,
}

/// A widget hosted inside a panel
pub trait WidgetHost {
    /// The content kind this widget implements
    fn content_kind(&self) -> ContentKind;

    /// Push updated props into the widget
    ///
    /// Called on creation and whenever the panel's instrument, timeframe,
    /// or exchange changes (including link-group fan-out).
    fn set_props(&mut self, props: &WidgetProps);
}

pub type BoxedWidget = Box<dyn WidgetHost>;

/// Function that creates a widget
pub type WidgetFactory = fn() -> BoxedWidget;

/// Registry mapping content kinds to widget factories
///
/// Built-in widgets register at startup; plugin-provided ones at load time.
pub struct WidgetRegistry {
    widgets: HashMap<ContentKind, WidgetFactory>,
}

impl WidgetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }

    /// Register a widget factory for a content kind
    pub fn register(&mut self, kind: ContentKind, factory: WidgetFactory) {
        log::debug!("Registering widget for content kind {}", kind.id());
        self.widgets.insert(kind, factory);
    }

    /// Create a widget for a content kind
    pub fn create(&self, kind: ContentKind) -> Result<BoxedWidget> {
        let factory = self
            .widgets
            .get(&kind)
            .ok_or_else(|| anyhow!("No widget registered for content kind: {}", kind.id()))?;
        Ok(factory())
    }

    /// List all registered content kinds
    pub fn list_kinds(&self) -> Vec<ContentKind> {
        self.widgets.keys().copied().collect()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
