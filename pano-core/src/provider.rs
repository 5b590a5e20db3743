//! In-memory [`GalleryProvider`] over an owned list of galleries.

use pano_model::{Gallery, GalleryId, GallerySummary};
use url::Url;

use crate::contracts::GalleryProvider;

/// Galleries held in a `Vec`, in display order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    galleries: Vec<Gallery>,
}

impl InMemoryProvider {
    pub fn new(galleries: Vec<Gallery>) -> Self {
        Self { galleries }
    }

    pub fn galleries(&self) -> &[Gallery] {
        &self.galleries
    }

    /// Mutable access; callers must send `DataChanged` afterwards.
    pub fn galleries_mut(&mut self) -> &mut Vec<Gallery> {
        &mut self.galleries
    }

    fn find(&self, id: &GalleryId) -> Option<&Gallery> {
        self.galleries.iter().find(|gallery| gallery.id == *id)
    }
}

impl GalleryProvider for InMemoryProvider {
    fn gallery_count(&self) -> usize {
        self.galleries.len()
    }

    fn gallery(&self, index: usize) -> Option<GallerySummary> {
        self.galleries.get(index).map(Gallery::summary)
    }

    fn image_count(&self, gallery: &GalleryId) -> usize {
        self.find(gallery).map_or(0, |gallery| gallery.images.len())
    }

    fn image(&self, gallery: &GalleryId, index: usize) -> Option<Url> {
        self.find(gallery)?.images.get(index).cloned()
    }
}

impl From<Vec<Gallery>> for InMemoryProvider {
    fn from(galleries: Vec<Gallery>) -> Self {
        Self::new(galleries)
    }
}
