//! Frame loop on a virtual clock.

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Context;
use pano_core::model::{Vec2, Viewport};
use pano_core::{
    CanvasEvent, CanvasMessage, GalleryCanvas, InMemoryProvider, ViewState,
};
use serde::Serialize;

use crate::script::ScriptDriver;
use crate::sink::{PushCounts, QueueSink, SinkRecord};

/// Virtual time between frames.
pub const FRAME: Duration = Duration::from_millis(16);

/// End-of-run report.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub frames: u64,
    pub pushes: PushCounts,
    pub recomputes: u64,
    pub teleports: u64,
    pub events: u64,
    pub columns: usize,
    pub view: ViewState,
    pub camera: Vec2,
    pub target: Vec2,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frames: {}", self.frames)?;
        writeln!(f, "item_pushes: {}", self.pushes.items)?;
        writeln!(f, "transform_pushes: {}", self.pushes.transforms)?;
        writeln!(f, "overlay_pushes: {}", self.pushes.overlays)?;
        writeln!(f, "recomputes: {}", self.recomputes)?;
        writeln!(f, "teleports: {}", self.teleports)?;
        writeln!(f, "events: {}", self.events)?;
        writeln!(f, "columns: {}", self.columns)?;
        writeln!(f, "view: {:?}", self.view)?;
        writeln!(
            f,
            "camera: ({:.1}, {:.1})",
            self.camera.x, self.camera.y
        )?;
        write!(f, "target: ({:.1}, {:.1})", self.target.x, self.target.y)
    }
}

/// Drives one canvas through a scripted run.
#[derive(Debug)]
pub struct Session {
    pub canvas: GalleryCanvas<InMemoryProvider>,
    pub sink: QueueSink,
    pub driver: ScriptDriver,
}

impl Session {
    /// Measure the canvas, run `frames` frames and shut down. When `out` is
    /// given every sink push and canvas event is written to it as one JSON
    /// object per line.
    pub fn run(
        mut self,
        viewport: Viewport,
        frames: u64,
        mut out: Option<&mut dyn Write>,
    ) -> anyhow::Result<Summary> {
        let mut now = Instant::now();
        let mut events = 0u64;

        let initial = self.canvas.update(CanvasMessage::Resized(viewport), now);
        events += initial.len() as u64;

        for frame in 0..frames {
            let mut emitted = Vec::new();
            for message in self.driver.messages(frame) {
                emitted.extend(self.canvas.update(message, now));
            }
            emitted.extend(self.canvas.tick(now));
            events += emitted.len() as u64;

            if let Some(out) = out.as_deref_mut() {
                for record in self.sink.drain() {
                    write_record(out, frame, &record)?;
                }
                for event in &emitted {
                    write_event(out, frame, event)?;
                }
            }
            now += FRAME;
        }

        let stats = self.canvas.stats();
        let summary = Summary {
            frames: stats.ticks,
            pushes: self.sink.counts(),
            recomputes: stats.recomputes,
            teleports: stats.teleports,
            events,
            columns: self.canvas.columns(),
            view: self.canvas.view(),
            camera: self.canvas.camera(),
            target: self.canvas.target(),
        };
        self.canvas.shutdown();
        log::debug!("session finished after {frames} frames");
        Ok(summary)
    }
}

fn write_record(
    out: &mut dyn Write,
    frame: u64,
    record: &SinkRecord,
) -> anyhow::Result<()> {
    let mut line = serde_json::to_value(record)?;
    line["frame"] = frame.into();
    writeln!(out, "{line}").context("failed to write sink record")
}

fn write_event(
    out: &mut dyn Write,
    frame: u64,
    event: &CanvasEvent,
) -> anyhow::Result<()> {
    let mut line = serde_json::to_value(event)?;
    line["frame"] = frame.into();
    writeln!(out, "{line}").context("failed to write canvas event")
}
