//! Geometry engine - pure drag, resize, and canvas-extent math
//!
//! Everything here is side-effect free and operates on plain geometry
//! values, keeping the interactive behavior testable without any UI
//! toolkit in the loop. None of these functions fail: out-of-range input
//! is absorbed, and negative coordinates are legal because the canvas is
//! unbounded in both directions.

use tradedeck_types::{PanelData, PanelGeometry};

use super::constants::{
    BASELINE_CANVAS_HEIGHT, BASELINE_CANVAS_WIDTH, CANVAS_MARGIN, MIN_PANEL_HEIGHT,
    MIN_PANEL_WIDTH, SNAP_GRID_SIZE,
};

/// Quantize a coordinate to the nearest grid multiple
pub fn snap_to_grid(value: f64) -> f64 {
    (value / SNAP_GRID_SIZE).round() * SNAP_GRID_SIZE
}

/// Apply a drag delta to a panel's position
///
/// The delta is applied first; when snapping is enabled the resulting
/// coordinates are then quantized to the nearest grid multiple. No
/// clamping to canvas bounds is performed - the canvas grows to fit
/// (see [`compute_canvas_extent`]).
pub fn apply_drag_delta(geometry: PanelGeometry, dx: f64, dy: f64, snap: bool) -> PanelGeometry {
    let mut x = geometry.x + dx;
    let mut y = geometry.y + dy;
    if snap {
        x = snap_to_grid(x);
        y = snap_to_grid(y);
    }
    PanelGeometry { x, y, ..geometry }
}

/// Clamp a requested size to the panel minimums
///
/// Invoked on every resize-in-progress event, not only at resize end, so
/// a panel never visibly drops below the minimum mid-drag.
pub fn clamp_size(width: f64, height: f64) -> (f64, f64) {
    (width.max(MIN_PANEL_WIDTH), height.max(MIN_PANEL_HEIGHT))
}

/// Compute the virtual canvas size needed to contain every panel
///
/// The canvas is never smaller than the baselines and always leaves
/// [`CANVAS_MARGIN`] of slack beyond the farthest panel edge. Recomputed
/// whenever any panel's geometry changes; never cached across mutations.
pub fn compute_canvas_extent(panels: &[PanelData]) -> (f64, f64) {
    let mut width = BASELINE_CANVAS_WIDTH;
    let mut height = BASELINE_CANVAS_HEIGHT;

    for panel in panels {
        width = width.max(panel.geometry.right() + CANVAS_MARGIN);
        height = height.max(panel.geometry.bottom() + CANVAS_MARGIN);
    }

    (width, height)
}
