//! The finite list a grid repeats, resolved per view.

use pano_model::{GalleryId, VisibleContent};

use crate::contracts::GalleryProvider;
use crate::preview::PreviewRotation;

/// Borrowed view of the list whose entries fill the grid cells.
#[derive(Clone, Copy)]
pub enum BackingList<'a> {
    /// Gallery cards, with rotated previews.
    Galleries {
        provider: &'a dyn GalleryProvider,
        previews: &'a PreviewRotation,
    },
    /// Photos of one gallery.
    Photos {
        provider: &'a dyn GalleryProvider,
        gallery: GalleryId,
    },
    /// Nothing to show (non-grid views).
    Empty,
}

impl std::fmt::Debug for BackingList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackingList::Galleries { provider, .. } => f
                .debug_struct("Galleries")
                .field("len", &provider.gallery_count())
                .finish(),
            BackingList::Photos { provider, gallery } => f
                .debug_struct("Photos")
                .field("gallery", gallery)
                .field("len", &provider.image_count(gallery))
                .finish(),
            BackingList::Empty => f.write_str("Empty"),
        }
    }
}

impl BackingList<'_> {
    pub fn len(&self) -> usize {
        match self {
            BackingList::Galleries { provider, .. } => provider.gallery_count(),
            BackingList::Photos { provider, gallery } => {
                provider.image_count(gallery)
            }
            BackingList::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content of the entry at an already wrapped index.
    pub fn content(&self, index: usize) -> Option<VisibleContent> {
        match self {
            BackingList::Galleries { provider, previews } => {
                let summary = provider.gallery(index)?;
                let shown =
                    previews.preview_index(&summary.id, summary.image_count);
                let preview = if shown == 0 {
                    summary.cover.clone()
                } else {
                    provider.image(&summary.id, shown).or(summary.cover.clone())
                };
                Some(VisibleContent::Gallery {
                    id: summary.id,
                    name: summary.name,
                    image_count: summary.image_count,
                    preview,
                })
            }
            BackingList::Photos { provider, gallery } => {
                let url = provider.image(gallery, index)?;
                Some(VisibleContent::Photo {
                    gallery: *gallery,
                    url,
                })
            }
            BackingList::Empty => None,
        }
    }
}
