use pano_model::GalleryId;
use serde::{Deserialize, Serialize};

use crate::scroll_manager::ScrollKey;

/// Mutually exclusive UI modes the canvas can be in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Galleries,
    Photos {
        gallery: GalleryId,
    },
    /// Single photo over the frozen photo grid.
    ExpandedPhoto {
        gallery: GalleryId,
        index: usize,
    },
    WebcamCapture,
    /// Create (`None`) or edit a gallery.
    GalleryEditor {
        gallery: Option<GalleryId>,
    },
}

/// Which list the grid repeats in a given view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSource {
    Galleries,
    Photos(GalleryId),
    None,
}

impl ViewState {
    /// Input and auto-navigation only run in the two grid-browsing views.
    pub fn is_canvas_interactive(&self) -> bool {
        matches!(self, ViewState::Galleries | ViewState::Photos { .. })
    }

    pub fn grid_source(&self) -> GridSource {
        match self {
            ViewState::Galleries => GridSource::Galleries,
            ViewState::Photos { gallery }
            | ViewState::ExpandedPhoto { gallery, .. } => {
                GridSource::Photos(*gallery)
            }
            ViewState::WebcamCapture | ViewState::GalleryEditor { .. } => {
                GridSource::None
            }
        }
    }

    /// Whether the grid is drawn at all (possibly frozen).
    pub fn renders_grid(&self) -> bool {
        self.grid_source() != GridSource::None
    }

    /// Key under which this view's camera is remembered.
    pub fn scroll_key(&self) -> Option<ScrollKey> {
        match self.grid_source() {
            GridSource::Galleries => Some(ScrollKey::Galleries),
            GridSource::Photos(gallery) => Some(ScrollKey::Photos(gallery)),
            GridSource::None => None,
        }
    }

    /// View that `Escape` returns to.
    pub fn parent(&self) -> Option<ViewState> {
        match self {
            ViewState::Galleries => None,
            ViewState::Photos { .. } => Some(ViewState::Galleries),
            ViewState::ExpandedPhoto { gallery, .. } => {
                Some(ViewState::Photos { gallery: *gallery })
            }
            ViewState::WebcamCapture | ViewState::GalleryEditor { .. } => {
                Some(ViewState::Galleries)
            }
        }
    }
}
