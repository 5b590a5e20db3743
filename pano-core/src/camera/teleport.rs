//! Origin re-basing for unbounded panning.
//!
//! The camera may drift arbitrarily far in any direction. Whenever it leaves
//! `initial ± distance` on an axis, both `current` and `target` are shifted
//! back by a whole number of `distance` steps. `distance` is always a
//! multiple of the grid's content period, so the shift is invisible.

use pano_model::{ItemDimensions, Vec2, Viewport};

use crate::grid::content_period;

/// Camera position that centres the column block horizontally.
pub fn anchor_for(
    viewport: Viewport,
    dims: &ItemDimensions,
    columns: usize,
) -> Vec2 {
    let block = columns as f64 * dims.cell_width - dims.gap();
    Vec2::new((viewport.width - block) / 2.0, 0.0)
}

/// Teleport span in cells for one axis: the smallest multiple of `period`
/// not below `ceil(ceil(extent / cell) + 2 * buffer)`.
pub fn span_cells(extent: f64, cell: f64, buffer: f64, period: u64) -> u64 {
    if !(extent.is_finite() && cell.is_finite()) || extent <= 0.0 || cell <= 0.0
    {
        return 0;
    }
    let visible = (extent / cell).ceil();
    let wanted = (visible + 2.0 * buffer.max(0.0)).ceil().max(1.0) as u64;
    let period = period.max(1);
    wanted.div_ceil(period) * period
}

/// Anchor position and wrap distance for the current layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TeleportAnchor {
    initial: Vec2,
    distance: Vec2,
}

impl TeleportAnchor {
    pub fn initial(&self) -> Vec2 {
        self.initial
    }

    pub fn distance(&self) -> Vec2 {
        self.distance
    }

    /// Recompute anchor and distance after a resize, zoom or data change.
    /// A zero-area viewport disables correction.
    pub fn reconfigure(
        &mut self,
        viewport: Viewport,
        dims: &ItemDimensions,
        columns: usize,
        item_count: usize,
        buffer_zone: f64,
    ) {
        if viewport.is_degenerate() {
            self.distance = Vec2::ZERO;
            return;
        }
        let (period_cols, period_rows) = content_period(item_count, columns);
        let cols = span_cells(
            viewport.width,
            dims.cell_width,
            buffer_zone,
            period_cols,
        );
        let rows = span_cells(
            viewport.height,
            dims.cell_height,
            buffer_zone,
            period_rows,
        );
        self.initial = anchor_for(viewport, dims, columns);
        self.distance =
            Vec2::new(cols as f64 * dims.cell_width, rows as f64 * dims.cell_height);
        log::debug!(
            "teleport anchor at ({:.1}, {:.1}), span {}x{} cells",
            self.initial.x,
            self.initial.y,
            cols,
            rows
        );
    }

    /// Shift that brings `current` back inside `initial ± distance`, or
    /// zero when no correction is due.
    pub fn correction(&self, current: Vec2) -> Vec2 {
        Vec2::new(
            axis_correction(current.x - self.initial.x, self.distance.x),
            axis_correction(current.y - self.initial.y, self.distance.y),
        )
    }
}

fn axis_correction(offset: f64, distance: f64) -> f64 {
    if !(distance.is_finite() && offset.is_finite()) || distance <= 0.0 {
        return 0.0;
    }
    if offset > distance {
        -((offset - distance) / distance).ceil() * distance
    } else if offset < -distance {
        ((-distance - offset) / distance).ceil() * distance
    } else {
        0.0
    }
}
