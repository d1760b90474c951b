//! Core layout engine for the tradedeck workspace

pub mod constants;
mod geometry;
mod link;
mod tiling;
mod workspace;

pub use geometry::{apply_drag_delta, clamp_size, compute_canvas_extent, snap_to_grid};
pub use link::{group_size, propagate_instrument_change, toggle_link};
pub use tiling::compute_tile_layout;
pub use workspace::{ChangeCallback, Workspace};
