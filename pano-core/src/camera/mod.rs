//! Camera motion: first-order easing toward a target plus the teleport
//! correction that keeps world coordinates bounded.

pub mod integrator;
pub mod teleport;

// Re-export primary types for convenience
pub use integrator::{Camera, ease_toward};
pub use teleport::{TeleportAnchor, anchor_for, span_cells};
