//! Pointer and keyboard input folded into a per-tick target velocity.

pub mod aggregator;
pub mod keys;

pub use aggregator::{InputAggregator, edge_intensity};
pub use keys::{HeldArrows, Key};
