//! Convenience re-exports for crates consuming the model wholesale.

pub use crate::dimensions::ItemDimensions;
pub use crate::gallery::{Gallery, GallerySummary};
pub use crate::geometry::{GridPosition, PixelRect, Vec2, Viewport};
pub use crate::ids::GalleryId;
pub use crate::visible::{VisibleContent, VisibleItem};
pub use url::Url;
