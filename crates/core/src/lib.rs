//! Boundary contracts for the tradedeck workspace panel manager
//!
//! The layout engine treats widgets and market metadata as external
//! collaborators; this crate holds the seams it talks to them through:
//! instrument resolution (used to validate persisted layouts and populate
//! new panels) and the widget host contract (what each panel's content
//! kind receives as inputs).

mod resolver;
mod widget;

pub use resolver::{
    global_instruments, resolve_symbol, InstrumentRegistry, InstrumentResolver,
};
pub use widget::{BoxedWidget, WidgetFactory, WidgetHost, WidgetProps, WidgetRegistry};
