//! Culling and memoization of the visible item set.

use std::sync::Arc;

use pano_model::{ItemDimensions, PixelRect, Vec2, VisibleItem, Viewport};

use super::backing::BackingList;
use super::range::visible_cells;
use super::wrap::wrap_index;

/// Everything the virtualizer reads from the controller for one pass.
#[derive(Debug, Clone, Copy)]
pub struct GridInput {
    pub camera: Vec2,
    pub viewport: Viewport,
    pub dims: ItemDimensions,
    pub columns: usize,
    pub buffer_zone: f64,
}

/// Materialize every cell in the buffered viewport range.
///
/// Pure function of its inputs; an empty backing list or a zero-area
/// viewport produce no items.
pub fn compute_visible(
    input: &GridInput,
    list: &BackingList<'_>,
) -> Vec<VisibleItem> {
    let len = list.len();
    if len == 0 {
        return Vec::new();
    }
    let Some(range) = visible_cells(
        input.camera,
        input.viewport,
        &input.dims,
        input.buffer_zone,
    ) else {
        return Vec::new();
    };

    let dims = input.dims;
    let mut items = Vec::with_capacity(range.len());
    for cell in range.iter() {
        let Some(wrapped) = wrap_index(cell.linear_index(input.columns), len)
        else {
            continue;
        };
        let Some(content) = list.content(wrapped) else {
            continue;
        };
        items.push(VisibleItem {
            grid: cell,
            rect: PixelRect::new(
                cell.col as f64 * dims.cell_width,
                cell.row as f64 * dims.cell_height,
                dims.width,
                dims.height,
            ),
            wrapped_index: wrapped,
            creation_order: len - wrapped,
            content,
        });
    }
    items
}

/// Memoizing wrapper around [`compute_visible`].
///
/// Recomputation happens only when the camera crosses into a new
/// `quantum`-sized bucket (`round(camera / quantum)`) or when forced, so the
/// emitted `Arc` keeps its identity while the camera drifts inside a bucket.
#[derive(Debug, Clone)]
pub struct GridVirtualizer {
    quantum: f64,
    last_key: Option<(i64, i64)>,
    items: Arc<[VisibleItem]>,
    recomputes: u64,
}

#[cfg_attr(feature = "profile-with-puffin", profiling::all_functions)]
impl GridVirtualizer {
    pub fn new(quantum: f64) -> Self {
        Self {
            quantum: if quantum > 0.0 { quantum } else { 1.0 },
            last_key: None,
            items: Arc::from(Vec::new()),
            recomputes: 0,
        }
    }

    /// Current visible set.
    pub fn items(&self) -> &Arc<[VisibleItem]> {
        &self.items
    }

    /// Number of passes that actually rebuilt the item set.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Bucket key for a camera position.
    pub fn memo_key(&self, camera: Vec2) -> (i64, i64) {
        (
            (camera.x / self.quantum).round() as i64,
            (camera.y / self.quantum).round() as i64,
        )
    }

    /// Recompute if the bucket changed or `force` is set. Returns whether
    /// the item set was rebuilt. A zero-area viewport skips the pass
    /// entirely and leaves the previous set in place.
    pub fn recompute(
        &mut self,
        input: &GridInput,
        list: &BackingList<'_>,
        force: bool,
    ) -> bool {
        if input.viewport.is_degenerate() || !input.camera.is_finite() {
            return false;
        }
        let key = self.memo_key(input.camera);
        if !force && self.last_key == Some(key) {
            return false;
        }
        self.last_key = Some(key);
        self.items = compute_visible(input, list).into();
        self.recomputes += 1;
        log::trace!(
            "grid recomputed: {} items at bucket {:?}",
            self.items.len(),
            key
        );
        true
    }

    /// Drop the visible set, e.g. when switching to a view without a grid.
    /// Returns whether anything was cleared.
    pub fn clear(&mut self) -> bool {
        self.last_key = None;
        if self.items.is_empty() {
            return false;
        }
        self.items = Arc::from(Vec::new());
        true
    }

    /// Item whose tile (not the gap around it) contains a world point.
    pub fn item_at(&self, world: Vec2) -> Option<&VisibleItem> {
        self.items.iter().find(|item| item.rect.contains(world))
    }
}
