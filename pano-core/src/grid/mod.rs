//! Infinite grid virtualization
//!
//! The grid is an unbounded lattice of square cells. Each cell shows the
//! backing-list entry at `wrap(row * columns + col, N)`, so the content
//! repeats forever in both directions. Only the cells overlapping the
//! viewport plus a buffer zone are materialized.

pub mod backing;
pub mod range;
pub mod virtualizer;
pub mod wrap;

pub use backing::BackingList;
pub use range::{CellRange, visible_cells};
pub use virtualizer::{GridInput, GridVirtualizer, compute_visible};
pub use wrap::{content_period, wrap_index};
