//! Render sink that queues every push for the output writer.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use pano_core::model::{Vec2, VisibleItem};
use pano_core::{Overlay, RenderSink};
use serde::Serialize;

/// One push received from the canvas.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "push", rename_all = "snake_case")]
pub enum SinkRecord {
    Items { count: usize, items: Vec<VisibleItem> },
    Transform { offset: Vec2 },
    Overlay { overlay: Overlay },
}

/// Running totals per push kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PushCounts {
    pub items: u64,
    pub transforms: u64,
    pub overlays: u64,
}

#[derive(Debug, Default)]
struct Shared {
    pending: VecDeque<SinkRecord>,
    counts: PushCounts,
    queue: bool,
}

/// Cloneable handle; the canvas owns one clone, the driver drains another.
#[derive(Debug, Clone, Default)]
pub struct QueueSink {
    shared: Rc<RefCell<Shared>>,
}

impl QueueSink {
    /// With `queue` unset only the counts are kept.
    pub fn new(queue: bool) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                queue,
                ..Shared::default()
            })),
        }
    }

    pub fn drain(&self) -> Vec<SinkRecord> {
        self.shared.borrow_mut().pending.drain(..).collect()
    }

    pub fn counts(&self) -> PushCounts {
        self.shared.borrow().counts
    }

    fn record(&self, record: SinkRecord) {
        let mut shared = self.shared.borrow_mut();
        match &record {
            SinkRecord::Items { .. } => shared.counts.items += 1,
            SinkRecord::Transform { .. } => shared.counts.transforms += 1,
            SinkRecord::Overlay { .. } => shared.counts.overlays += 1,
        }
        if shared.queue {
            shared.pending.push_back(record);
        }
    }
}

impl RenderSink for QueueSink {
    fn present_items(&mut self, items: &Arc<[VisibleItem]>) {
        let queue = self.shared.borrow().queue;
        self.record(SinkRecord::Items {
            count: items.len(),
            items: if queue { items.to_vec() } else { Vec::new() },
        });
    }

    fn present_transform(&mut self, offset: Vec2) {
        self.record(SinkRecord::Transform { offset });
    }

    fn present_overlay(&mut self, overlay: &Overlay) {
        self.record(SinkRecord::Overlay { overlay: *overlay });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_without_queueing_when_summarising() {
        let sink = QueueSink::new(false);
        let mut canvas_side = sink.clone();
        canvas_side.present_transform(Vec2::new(1.0, 2.0));
        let empty: Vec<VisibleItem> = Vec::new();
        canvas_side.present_items(&Arc::from(empty));
        assert!(sink.drain().is_empty());
        assert_eq!(
            sink.counts(),
            PushCounts {
                items: 1,
                transforms: 1,
                overlays: 0
            }
        );
    }

    #[test]
    fn queued_records_drain_in_order() {
        let sink = QueueSink::new(true);
        let mut canvas_side = sink.clone();
        canvas_side.present_transform(Vec2::new(3.0, 4.0));
        canvas_side.present_overlay(&Overlay::default());
        let records = sink.drain();
        assert!(matches!(records[0], SinkRecord::Transform { .. }));
        assert!(matches!(records[1], SinkRecord::Overlay { .. }));
        assert!(sink.drain().is_empty());

        let line = serde_json::to_string(&records[0]).expect("serialize");
        assert_eq!(line, r#"{"push":"transform","offset":{"x":3.0,"y":4.0}}"#);
    }
}
