//! Boundary contracts between the canvas engine and its collaborators
//!
//! The engine owns all motion state; everything else reaches it through
//! these narrow traits, injected at construction.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use pano_model::{GalleryId, GallerySummary, Vec2, VisibleItem};
use serde::Serialize;
use url::Url;

/// Read-only, index-addressed access to gallery data.
///
/// Lists may change length between calls; the engine is told about such
/// changes through [`crate::CanvasMessage::DataChanged`]. Only entries in the
/// visible window are ever fetched.
pub trait GalleryProvider {
    /// Number of galleries in display order.
    fn gallery_count(&self) -> usize;

    /// Gallery at `index`, if it exists.
    fn gallery(&self, index: usize) -> Option<GallerySummary>;

    /// Number of images in a gallery; zero when the gallery is unknown.
    fn image_count(&self, gallery: &GalleryId) -> usize;

    /// Image URL at `index` within a gallery.
    fn image(&self, gallery: &GalleryId, index: usize) -> Option<Url>;
}

/// Receives render data whenever it changes. Purely a push; no feedback.
pub trait RenderSink {
    /// The visible item set was recomputed.
    fn present_items(&mut self, items: &Arc<[VisibleItem]>);

    /// The camera moved; `offset` is the translation applied to world rects.
    fn present_transform(&mut self, offset: Vec2);

    /// Countdown or hint state changed.
    fn present_overlay(&mut self, _overlay: &Overlay) {}
}

/// Answers whether the canvas may react to input right now (no modal open,
/// no auth gate). Polled on every tick and input event.
pub trait InteractionGate {
    fn is_interaction_enabled(&self) -> bool;
}

impl InteractionGate for bool {
    fn is_interaction_enabled(&self) -> bool {
        *self
    }
}

impl<F> InteractionGate for F
where
    F: Fn() -> bool,
{
    fn is_interaction_enabled(&self) -> bool {
        self()
    }
}

/// Shared on/off switch an external UI can flip while the canvas holds a
/// clone of it.
#[derive(Debug, Clone)]
pub struct GateHandle(Rc<Cell<bool>>);

impl Default for GateHandle {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GateHandle {
    pub fn new(enabled: bool) -> Self {
        Self(Rc::new(Cell::new(enabled)))
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.0.set(enabled);
    }
}

impl InteractionGate for GateHandle {
    fn is_interaction_enabled(&self) -> bool {
        self.0.get()
    }
}

/// Cosmetic overlay state for the auto-navigation countdown and hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Overlay {
    /// Remaining countdown steps while counting down.
    pub countdown: Option<u32>,
    /// Whether the elliptical traversal is running.
    pub auto_navigating: bool,
    /// Whether the "move to stop" hint is showing.
    pub hint_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_handle_is_shared_between_clones() {
        let gate = GateHandle::default();
        let held_by_canvas = gate.clone();
        assert!(held_by_canvas.is_interaction_enabled());
        gate.set_enabled(false);
        assert!(!held_by_canvas.is_interaction_enabled());
    }

    #[test]
    fn closures_and_bools_act_as_gates() {
        let closed = || false;
        assert!(!closed.is_interaction_enabled());
        assert!(true.is_interaction_enabled());
    }
}
