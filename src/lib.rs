//! tradedeck: a free-form, multi-panel workspace manager for
//! cryptocurrency trading dashboards
//!
//! This library provides the workspace panel manager, including:
//! - Drag/resize/grid-snap geometry on an unbounded virtual canvas
//! - Z-order (focus) tracking and cross-panel instrument link groups
//! - Grid auto-tiling and canvas-extent computation
//! - Versioned layout persistence with validation on restore
//!
//! Widget renderers and exchange integrations are external collaborators;
//! see `tradedeck-core` for the boundary contracts they implement.

pub mod config;
pub mod core;

// Re-export commonly used types
pub use config::LayoutConfig;
pub use core::Workspace;
