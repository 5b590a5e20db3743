//! Core data model definitions shared across Pano crates.
#![allow(missing_docs)]

pub mod dimensions;
pub mod gallery;
pub mod geometry;
pub mod ids;
pub mod prelude;
pub mod visible;

// Intentionally curated re-exports for downstream consumers.
pub use dimensions::ItemDimensions;
pub use gallery::{Gallery, GallerySummary};
pub use geometry::{GridPosition, PixelRect, Vec2, Viewport};
pub use ids::GalleryId;
pub use visible::{VisibleContent, VisibleItem};

/// Re-exported so consumers can name photo URLs without a direct dependency.
pub use url::Url;
