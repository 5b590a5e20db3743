//! Tile sizing derived from the viewport width and column count.

use crate::geometry::Vec2;

/// Square tile size plus the cell stride (tile + gap) on each axis.
///
/// Invariants: `cell_width == width + gap`, `cell_height == height + gap`,
/// `width == height`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDimensions {
    pub width: f64,
    pub height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl ItemDimensions {
    /// Fit `columns` square tiles separated by `gap` into `viewport_width`.
    ///
    /// Returns `None` when no positive tile size fits.
    pub fn for_viewport(
        viewport_width: f64,
        columns: usize,
        gap: f64,
    ) -> Option<Self> {
        if columns == 0 || !viewport_width.is_finite() || gap < 0.0 {
            return None;
        }
        let gaps = gap * columns.saturating_sub(1) as f64;
        let width = (viewport_width - gaps) / columns as f64;
        if width.is_nan() || width <= 0.0 {
            return None;
        }
        Some(Self {
            width,
            height: width,
            cell_width: width + gap,
            cell_height: width + gap,
        })
    }

    /// Cell stride as a vector.
    pub fn cell(&self) -> Vec2 {
        Vec2::new(self.cell_width, self.cell_height)
    }

    /// Gap between neighbouring tiles.
    pub fn gap(&self) -> f64 {
        self.cell_width - self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_columns_on_1200_wide_viewport() {
        let dims = ItemDimensions::for_viewport(1200.0, 4, 32.0)
            .expect("dimensions fit");
        assert_eq!(dims.width, 276.0);
        assert_eq!(dims.height, 276.0);
        assert_eq!(dims.cell_width, 308.0);
        assert_eq!(dims.cell_height, 308.0);
        assert_eq!(dims.gap(), 32.0);
    }

    #[test]
    fn single_column_has_no_gap_deduction() {
        let dims =
            ItemDimensions::for_viewport(500.0, 1, 32.0).expect("fits");
        assert_eq!(dims.width, 500.0);
        assert_eq!(dims.cell_width, 532.0);
    }

    #[test]
    fn rejects_degenerate_layouts() {
        assert!(ItemDimensions::for_viewport(0.0, 4, 32.0).is_none());
        assert!(ItemDimensions::for_viewport(96.0, 4, 32.0).is_none());
        assert!(ItemDimensions::for_viewport(1200.0, 0, 32.0).is_none());
        assert!(ItemDimensions::for_viewport(f64::NAN, 4, 32.0).is_none());
    }
}
