//! Auto-tile layout - reset every panel to a non-overlapping grid

use tradedeck_types::PanelGeometry;

use super::constants::{MIN_TILE_HEIGHT, MIN_TILE_WIDTH, TILE_GAP};

/// Compute a near-square grid of cells for `count` panels
///
/// Returns one geometry per panel, assigned row-major in list order:
/// panel `i` lands in column `i % columns`, row `i / columns`, with
/// `columns = ceil(sqrt(count))` and `rows = ceil(count / columns)`.
///
/// This is a "reset to grid" operation, not a constraint solver: it does
/// not preserve aspect ratios or per-content preferred sizes beyond the
/// global tile minimums. The workspace controller applies the result
/// atomically across the whole panel list.
pub fn compute_tile_layout(
    count: usize,
    container_width: f64,
    container_height: f64,
) -> Vec<PanelGeometry> {
    if count == 0 {
        return Vec::new();
    }

    let columns = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(columns);

    let cell_width = (container_width - (columns as f64 + 1.0) * TILE_GAP) / columns as f64;
    let cell_height = (container_height - (rows as f64 + 1.0) * TILE_GAP) / rows as f64;

    (0..count)
        .map(|i| {
            let column = (i % columns) as f64;
            let row = (i / columns) as f64;
            PanelGeometry {
                x: TILE_GAP + column * (cell_width + TILE_GAP),
                y: TILE_GAP + row * (cell_height + TILE_GAP),
                width: cell_width.max(MIN_TILE_WIDTH),
                height: cell_height.max(MIN_TILE_HEIGHT),
            }
        })
        .collect()
}
