//! Scripted input sessions.

use clap::ValueEnum;
use pano_core::model::{Vec2, Viewport};
use pano_core::{CanvasMessage, Key};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Frames each scripted phase lasts.
const PHASE_FRAMES: u64 = 120;

/// Pointer inset from the viewport edge while edge scrolling (px).
const EDGE_INSET: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Script {
    /// No input after the initial measurement.
    Idle,
    /// Park the pointer near each edge in turn.
    Edge,
    /// Hold each arrow key in turn, zooming out once.
    Keys,
    /// Request auto-navigation once the first frame is laid out.
    AutoNav,
    /// Seeded random pointer moves, clicks, zooms and escapes.
    Wander,
}

/// Produces the messages to send before each frame.
#[derive(Debug)]
pub struct ScriptDriver {
    script: Script,
    viewport: Viewport,
    rng: StdRng,
}

impl ScriptDriver {
    pub fn new(script: Script, viewport: Viewport, seed: u64) -> Self {
        Self {
            script,
            viewport,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn messages(&mut self, frame: u64) -> Vec<CanvasMessage> {
        match self.script {
            Script::Idle => Vec::new(),
            Script::Edge => self.edge(frame),
            Script::Keys => keys(frame),
            Script::AutoNav if frame == 1 => vec![CanvasMessage::RequestAutoNav],
            Script::AutoNav => Vec::new(),
            Script::Wander => self.wander(frame),
        }
    }

    fn edge(&self, frame: u64) -> Vec<CanvasMessage> {
        if frame % PHASE_FRAMES != 0 {
            return Vec::new();
        }
        let Viewport { width, height } = self.viewport;
        let (mid_x, mid_y) = (width / 2.0, height / 2.0);
        let point = match (frame / PHASE_FRAMES) % 4 {
            0 => Vec2::new(width - EDGE_INSET, mid_y),
            1 => Vec2::new(mid_x, height - EDGE_INSET),
            2 => Vec2::new(EDGE_INSET, mid_y),
            _ => Vec2::new(mid_x, EDGE_INSET),
        };
        vec![CanvasMessage::PointerMoved(point)]
    }

    fn wander(&mut self, frame: u64) -> Vec<CanvasMessage> {
        if frame % 20 != 0 || self.viewport.is_degenerate() {
            return Vec::new();
        }
        let point = Vec2::new(
            self.rng.random_range(0.0..self.viewport.width),
            self.rng.random_range(0.0..self.viewport.height),
        );
        let mut messages = vec![CanvasMessage::PointerMoved(point)];
        match self.rng.random_range(0..20) {
            0 | 1 => messages.push(CanvasMessage::Clicked(point)),
            2 | 3 => messages.push(CanvasMessage::KeyPressed(Key::Escape)),
            4 => messages.push(CanvasMessage::ZoomIn),
            5 => messages.push(CanvasMessage::ZoomOut),
            _ => {}
        }
        messages
    }
}

fn keys(frame: u64) -> Vec<CanvasMessage> {
    const ARROWS: [Key; 4] =
        [Key::ArrowLeft, Key::ArrowUp, Key::ArrowRight, Key::ArrowDown];

    let mut messages = Vec::new();
    if frame % PHASE_FRAMES == 0 {
        let phase = (frame / PHASE_FRAMES) as usize;
        if phase > 0 {
            let released = ARROWS[(phase - 1) % ARROWS.len()];
            messages.push(CanvasMessage::KeyReleased(released));
        }
        messages.push(CanvasMessage::KeyPressed(ARROWS[phase % ARROWS.len()]));
    }
    if frame == PHASE_FRAMES / 2 {
        messages.push(CanvasMessage::ZoomOut);
    }
    messages
}
