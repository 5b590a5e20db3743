//! Pano canvas engine.
//!
//! A single-owner, tick-driven engine for an infinite, wrapping grid of
//! photos or gallery cards. Each frame the [`GalleryCanvas`] folds pointer,
//! keyboard and auto-navigation input into a camera target, eases the camera
//! toward it, keeps coordinates bounded by teleporting the origin, and
//! publishes the culled set of visible items to a [`RenderSink`].
//!
//! Nothing here performs I/O. Data, rendering and modal gating are supplied
//! through the traits in [`contracts`].

// TODO: document message payload fields and subsystem accessors
#![allow(missing_docs)]

pub mod auto_nav;
pub mod camera;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod grid;
pub mod input;
pub mod messages;
pub mod preview;
pub mod provider;
pub mod recorder;
pub mod scheduler;
pub mod scroll_manager;
pub mod view_state;

pub use canvas::{CanvasStats, GalleryCanvas};
pub use config::{CanvasConfig, ConfigError};
pub use contracts::{
    GalleryProvider, GateHandle, InteractionGate, Overlay, RenderSink,
};
pub use input::Key;
pub use messages::{CanvasEvent, CanvasMessage};
pub use provider::InMemoryProvider;
pub use recorder::{RecordingSink, SinkLog};
pub use view_state::ViewState;

pub use pano_model as model;
