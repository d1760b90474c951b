//! Shared constants for the workspace layout engine

/// Minimum panel width in canvas units
pub const MIN_PANEL_WIDTH: f64 = 150.0;

/// Minimum panel height in canvas units
pub const MIN_PANEL_HEIGHT: f64 = 150.0;

/// Grid unit for snap-to-grid drag quantization
pub const SNAP_GRID_SIZE: f64 = 20.0;

/// Gap between tiles (and to the viewport edges) in auto-tile layouts
pub const TILE_GAP: f64 = 10.0;

/// Smallest cell auto-tile will assign regardless of viewport size
pub const MIN_TILE_WIDTH: f64 = 150.0;
pub const MIN_TILE_HEIGHT: f64 = 150.0;

/// Slack kept beyond the farthest panel edge so there is always room to
/// keep dragging
pub const CANVAS_MARGIN: f64 = 200.0;

/// The canvas never reports smaller than these baselines, even when the
/// workspace is empty
pub const BASELINE_CANVAS_WIDTH: f64 = 1920.0;
pub const BASELINE_CANVAS_HEIGHT: f64 = 1080.0;

/// The single shared link-group token
pub const MAIN_LINK_GROUP: &str = "main";

/// Default geometry for panels created outside auto-tile
pub const DEFAULT_PANEL_X: f64 = 40.0;
pub const DEFAULT_PANEL_Y: f64 = 40.0;
pub const DEFAULT_PANEL_WIDTH: f64 = 420.0;
pub const DEFAULT_PANEL_HEIGHT: f64 = 320.0;

/// Offset applied per existing panel so newly created panels cascade
/// instead of stacking exactly on top of each other
pub const NEW_PANEL_CASCADE: f64 = 30.0;
