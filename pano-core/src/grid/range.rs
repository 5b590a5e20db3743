//! Cell range covering the viewport plus the buffer zone.

use std::ops::RangeInclusive;

use pano_model::{GridPosition, ItemDimensions, Vec2, Viewport};

/// Inclusive rectangle of grid cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange {
    pub rows: RangeInclusive<i64>,
    pub cols: RangeInclusive<i64>,
}

impl CellRange {
    pub fn row_count(&self) -> usize {
        span(&self.rows)
    }

    pub fn col_count(&self) -> usize {
        span(&self.cols)
    }

    pub fn len(&self) -> usize {
        self.row_count() * self.col_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, cell: GridPosition) -> bool {
        self.rows.contains(&cell.row) && self.cols.contains(&cell.col)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = GridPosition> + '_ {
        self.rows.clone().flat_map(move |row| {
            self.cols.clone().map(move |col| GridPosition::new(row, col))
        })
    }
}

fn span(range: &RangeInclusive<i64>) -> usize {
    if range.is_empty() {
        0
    } else {
        (range.end() - range.start() + 1) as usize
    }
}

/// Cells intersecting the viewport, widened by `buffer_zone` cells per side.
///
/// Columns span `floor(-x / cell_w - buffer) ..= ceil((-x + w) / cell_w + buffer)`
/// and rows likewise. Returns `None` for a zero-area viewport or a
/// non-finite camera, where the range math would produce NaN.
pub fn visible_cells(
    camera: Vec2,
    viewport: Viewport,
    dims: &ItemDimensions,
    buffer_zone: f64,
) -> Option<CellRange> {
    if viewport.is_degenerate() || !camera.is_finite() {
        return None;
    }
    if dims.cell_width <= 0.0 || dims.cell_height <= 0.0 {
        return None;
    }
    let cols = axis_range(camera.x, viewport.width, dims.cell_width, buffer_zone);
    let rows =
        axis_range(camera.y, viewport.height, dims.cell_height, buffer_zone);
    Some(CellRange { rows, cols })
}

fn axis_range(
    offset: f64,
    extent: f64,
    cell: f64,
    buffer: f64,
) -> RangeInclusive<i64> {
    let start = ((-offset) / cell - buffer).floor() as i64;
    let end = ((-offset + extent) / cell + buffer).ceil() as i64;
    start..=end
}
