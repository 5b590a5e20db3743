//! Shared harness for canvas integration tests.
#![allow(dead_code)]

use std::time::{Duration, Instant};

use pano_core::model::{Gallery, GalleryId, Url, Vec2, Viewport};
use pano_core::{
    CanvasConfig, CanvasEvent, CanvasMessage, GalleryCanvas, GateHandle,
    InMemoryProvider, RecordingSink,
};

/// One frame at 60 Hz, rounded.
pub const FRAME: Duration = Duration::from_millis(16);

pub const VIEWPORT: Viewport = Viewport::new(1200.0, 800.0);

pub fn gallery_id(index: usize) -> GalleryId {
    GalleryId::from_u128(index as u128 + 1)
}

pub fn image_url(gallery: usize, image: usize) -> Url {
    Url::parse(&format!("https://photos.test/g{gallery}/{image}.jpg"))
        .expect("static url")
}

pub fn fixture_galleries(galleries: usize, images: usize) -> Vec<Gallery> {
    (0..galleries)
        .map(|g| {
            Gallery::new(
                gallery_id(g),
                format!("Gallery {g}"),
                (0..images).map(|i| image_url(g, i)).collect(),
            )
        })
        .collect()
}

pub struct Harness {
    pub canvas: GalleryCanvas<InMemoryProvider>,
    pub sink: RecordingSink,
    pub gate: GateHandle,
    pub now: Instant,
}

impl Harness {
    /// Measured 1200x800 canvas with default config, after one frame.
    pub fn new(galleries: usize, images: usize) -> Self {
        Self::with_config(CanvasConfig::default(), galleries, images)
    }

    pub fn with_config(
        config: CanvasConfig,
        galleries: usize,
        images: usize,
    ) -> Self {
        let sink = RecordingSink::new();
        let gate = GateHandle::default();
        let canvas = GalleryCanvas::new(
            config,
            InMemoryProvider::new(fixture_galleries(galleries, images)),
            Box::new(sink.clone()),
            Box::new(gate.clone()),
        )
        .expect("valid config");
        let mut harness = Self {
            canvas,
            sink,
            gate,
            now: Instant::now(),
        };
        harness.send(CanvasMessage::Resized(VIEWPORT));
        harness.tick();
        harness
    }

    pub fn send(&mut self, message: CanvasMessage) -> Vec<CanvasEvent> {
        self.canvas.update(message, self.now)
    }

    /// Advance the clock one frame and tick.
    pub fn tick(&mut self) -> Vec<CanvasEvent> {
        self.now += FRAME;
        self.canvas.tick(self.now)
    }

    pub fn ticks(&mut self, frames: usize) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        for _ in 0..frames {
            events.extend(self.tick());
        }
        events
    }

    /// Tick frame by frame until at least `duration` has elapsed.
    pub fn advance(&mut self, duration: Duration) -> Vec<CanvasEvent> {
        let end = self.now + duration;
        let mut events = Vec::new();
        while self.now < end {
            events.extend(self.tick());
        }
        events
    }

    /// Tick until the camera rests on its target.
    pub fn settle(&mut self) {
        for _ in 0..2000 {
            if self.canvas.camera() == self.canvas.target() {
                return;
            }
            self.tick();
        }
        panic!("camera did not settle");
    }

    /// Centre of the fully visible tile matching `filter` that lies closest
    /// to the viewport centre.
    pub fn tile_center(
        &self,
        filter: impl Fn(&pano_core::model::VisibleItem) -> bool,
    ) -> Vec2 {
        let camera = self.canvas.camera();
        let middle = VIEWPORT.center();
        self.canvas
            .items()
            .iter()
            .filter(|item| filter(item))
            .map(|item| item.screen_rect(camera))
            .filter(|rect| {
                rect.x >= 0.0
                    && rect.y >= 0.0
                    && rect.right() <= VIEWPORT.width
                    && rect.bottom() <= VIEWPORT.height
            })
            .map(|rect| {
                Vec2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
            })
            .min_by(|a, b| {
                (*a - middle).length().total_cmp(&(*b - middle).length())
            })
            .expect("a fully visible tile")
    }

    /// Grid point (in cells) under the viewport centre.
    pub fn focus_cells(&self) -> Vec2 {
        let dims = self.canvas.dimensions().expect("measured");
        let world = self.canvas.viewport().center() - self.canvas.camera();
        Vec2::new(world.x / dims.cell_width, world.y / dims.cell_height)
    }
}
