//! Gallery card preview rotation
//!
//! While the pointer rests on a gallery card, the card cycles through the
//! gallery's images. The per-gallery index survives hover changes so a card
//! keeps showing the last image it rotated to.

use std::collections::HashMap;

use pano_model::GalleryId;

/// Outcome of a hover update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    /// A new gallery is hovered; the rotation timer should (re)start.
    Started(GalleryId),
    /// Nothing is hovered any more; the rotation timer should stop.
    Stopped,
}

/// Preview image indices keyed by gallery.
#[derive(Debug, Clone, Default)]
pub struct PreviewRotation {
    indices: HashMap<GalleryId, usize>,
    hovered: Option<GalleryId>,
}

impl PreviewRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<GalleryId> {
        self.hovered
    }

    pub fn set_hovered(&mut self, gallery: Option<GalleryId>) -> HoverChange {
        if self.hovered == gallery {
            return HoverChange::Unchanged;
        }
        self.hovered = gallery;
        match gallery {
            Some(id) => HoverChange::Started(id),
            None => HoverChange::Stopped,
        }
    }

    /// Step the hovered gallery's preview. Returns whether the shown image
    /// changed; galleries with fewer than two images never rotate.
    pub fn advance(&mut self, image_count: usize) -> bool {
        let Some(id) = self.hovered else {
            return false;
        };
        if image_count < 2 {
            return false;
        }
        let index = self.indices.entry(id).or_insert(0);
        *index = (*index + 1) % image_count;
        true
    }

    /// Index of the image a gallery card should show.
    pub fn preview_index(&self, gallery: &GalleryId, image_count: usize) -> usize {
        match (self.indices.get(gallery), image_count) {
            (_, 0) | (None, _) => 0,
            (Some(index), count) => index % count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_only_the_hovered_gallery() {
        let a = GalleryId::from_u128(1);
        let b = GalleryId::from_u128(2);
        let mut previews = PreviewRotation::new();

        assert_eq!(previews.set_hovered(Some(a)), HoverChange::Started(a));
        assert!(previews.advance(3));
        assert!(previews.advance(3));
        assert_eq!(previews.preview_index(&a, 3), 2);
        assert_eq!(previews.preview_index(&b, 3), 0);

        assert!(previews.advance(3));
        assert_eq!(previews.preview_index(&a, 3), 0);
    }

    #[test]
    fn index_is_kept_after_hover_ends() {
        let a = GalleryId::from_u128(1);
        let mut previews = PreviewRotation::new();
        previews.set_hovered(Some(a));
        previews.advance(4);
        assert_eq!(previews.set_hovered(None), HoverChange::Stopped);
        assert_eq!(previews.set_hovered(None), HoverChange::Unchanged);
        assert!(!previews.advance(4));
        assert_eq!(previews.preview_index(&a, 4), 1);
    }

    #[test]
    fn single_image_galleries_do_not_rotate() {
        let a = GalleryId::from_u128(1);
        let mut previews = PreviewRotation::new();
        previews.set_hovered(Some(a));
        assert!(!previews.advance(1));
        assert!(!previews.advance(0));
        assert_eq!(previews.preview_index(&a, 0), 0);
    }
}
