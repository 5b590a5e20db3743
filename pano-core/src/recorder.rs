//! In-memory [`RenderSink`] that records everything pushed to it.
//!
//! Used by the headless simulator and by tests; clones share one log.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use pano_model::{Vec2, VisibleItem};

use crate::contracts::{Overlay, RenderSink};

/// Everything a [`RecordingSink`] received, in order.
#[derive(Debug, Default)]
pub struct SinkLog {
    pub item_pushes: Vec<Arc<[VisibleItem]>>,
    pub transforms: Vec<Vec2>,
    pub overlays: Vec<Overlay>,
}

impl SinkLog {
    pub fn last_items(&self) -> Option<&Arc<[VisibleItem]>> {
        self.item_pushes.last()
    }

    pub fn last_transform(&self) -> Option<Vec2> {
        self.transforms.last().copied()
    }

    pub fn last_overlay(&self) -> Option<Overlay> {
        self.overlays.last().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    log: Rc<RefCell<SinkLog>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the shared log.
    pub fn log(&self) -> Ref<'_, SinkLog> {
        self.log.borrow()
    }

    /// Drop recorded history, keeping the sink attached.
    pub fn clear(&self) {
        let mut log = self.log.borrow_mut();
        log.item_pushes.clear();
        log.transforms.clear();
        log.overlays.clear();
    }
}

impl RenderSink for RecordingSink {
    fn present_items(&mut self, items: &Arc<[VisibleItem]>) {
        self.log.borrow_mut().item_pushes.push(Arc::clone(items));
    }

    fn present_transform(&mut self, offset: Vec2) {
        self.log.borrow_mut().transforms.push(offset);
    }

    fn present_overlay(&mut self, overlay: &Overlay) {
        self.log.borrow_mut().overlays.push(*overlay);
    }
}
