//! Renderable projections emitted by the grid virtualizer.

use url::Url;

use crate::geometry::{GridPosition, PixelRect, Vec2};
use crate::ids::GalleryId;

/// What a visible cell shows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum VisibleContent {
    /// A photo of the selected gallery.
    Photo { gallery: GalleryId, url: Url },
    /// A gallery card, with the currently rotated preview image.
    Gallery {
        id: GalleryId,
        name: String,
        image_count: usize,
        preview: Option<Url>,
    },
}

impl VisibleContent {
    pub fn is_gallery(&self) -> bool {
        matches!(self, VisibleContent::Gallery { .. })
    }

    pub fn gallery_id(&self) -> GalleryId {
        match self {
            VisibleContent::Photo { gallery, .. } => *gallery,
            VisibleContent::Gallery { id, .. } => *id,
        }
    }
}

/// A backing entity placed in one cell of the infinite grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem {
    /// Cell coordinates in the infinite grid.
    pub grid: GridPosition,
    /// Tile rectangle in world space: `(col * cell_width, row * cell_height)`.
    pub rect: PixelRect,
    /// Index into the backing list after wrapping.
    pub wrapped_index: usize,
    /// `N - wrapped_index`; stable across repetitions of the list.
    pub creation_order: usize,
    pub content: VisibleContent,
}

impl VisibleItem {
    /// Tile rectangle on screen for a given camera offset.
    pub fn screen_rect(&self, camera: Vec2) -> PixelRect {
        self.rect.translated(camera)
    }
}
