//! Per-view camera persistence
//!
//! Leaving a canvas view stores where the camera was relative to the anchor,
//! in grid units, so that returning to the view lands on the same cells even
//! if the column count or viewport changed meanwhile.

use std::collections::HashMap;

use pano_model::{GalleryId, Vec2};

/// Views whose camera position is remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollKey {
    Galleries,
    Photos(GalleryId),
}

/// Camera offset from the anchor, measured in cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedCamera {
    pub offset_cells: Vec2,
}

impl SavedCamera {
    /// Capture `current` relative to `anchor` for the given cell stride.
    pub fn capture(current: Vec2, anchor: Vec2, cell: Vec2) -> Option<Self> {
        if cell.x <= 0.0 || cell.y <= 0.0 {
            return None;
        }
        let delta = current - anchor;
        let offset_cells = Vec2::new(delta.x / cell.x, delta.y / cell.y);
        offset_cells.is_finite().then_some(Self { offset_cells })
    }

    /// Camera position for the current anchor and cell stride.
    pub fn position(&self, anchor: Vec2, cell: Vec2) -> Vec2 {
        anchor
            + Vec2::new(self.offset_cells.x * cell.x, self.offset_cells.y * cell.y)
    }
}

/// Saved camera positions keyed by view.
#[derive(Debug, Clone, Default)]
pub struct ScrollPositionManager {
    states: HashMap<ScrollKey, SavedCamera>,
}

impl ScrollPositionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, key: ScrollKey, state: SavedCamera) {
        log::trace!("saved camera for {key:?}: {:?}", state.offset_cells);
        self.states.insert(key, state);
    }

    pub fn restore(&self, key: &ScrollKey) -> Option<SavedCamera> {
        self.states.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
