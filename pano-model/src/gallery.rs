//! Gallery entities as the canvas sees them.

use url::Url;

use crate::ids::GalleryId;

/// A named, ordered collection of photos.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gallery {
    pub id: GalleryId,
    pub name: String,
    pub images: Vec<Url>,
}

impl Gallery {
    pub fn new(id: GalleryId, name: impl Into<String>, images: Vec<Url>) -> Self {
        Self {
            id,
            name: name.into(),
            images,
        }
    }

    /// Lightweight projection used when rendering a gallery card.
    pub fn summary(&self) -> GallerySummary {
        GallerySummary {
            id: self.id,
            name: self.name.clone(),
            image_count: self.images.len(),
            cover: self.images.first().cloned(),
        }
    }
}

/// The part of a gallery a card needs, without the full image list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GallerySummary {
    pub id: GalleryId,
    pub name: String,
    pub image_count: usize,
    pub cover: Option<Url>,
}
