use pano_model::{GalleryId, Vec2, Viewport};
use serde::Serialize;

use crate::input::Key;
use crate::view_state::ViewState;

/// Input delivered to [`crate::GalleryCanvas::update`]. Positions are
/// viewport-relative pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasMessage {
    /// Pointer moved over the canvas.
    PointerMoved(Vec2),
    /// Pointer left the canvas.
    PointerLeft,
    /// Primary click at a position.
    Clicked(Vec2),
    KeyPressed(Key),
    KeyReleased(Key),
    /// Window lost focus; held keys are released.
    FocusLost,
    /// The container was measured; also the first measurement.
    Resized(Viewport),
    /// A context menu opened (`true`) or closed over the canvas.
    ContextMenu(bool),
    /// One column fewer (larger tiles).
    ZoomIn,
    /// One column more.
    ZoomOut,
    /// Jump to a column count; clamped to the zoom bounds.
    SetColumns(usize),
    SetView(ViewState),
    /// The provider's lists changed length or content.
    DataChanged,
    /// Start the auto-navigation countdown.
    RequestAutoNav,
    CancelAutoNav,
}

/// Notifications returned to the host from `update` and `tick`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CanvasEvent {
    /// A gallery card was clicked.
    GalleryOpened { gallery: GalleryId },
    /// A photo was clicked; `index` is its position in the gallery.
    PhotoExpanded { gallery: GalleryId, index: usize },
    ViewChanged { view: ViewState },
    /// Countdown value shown to the user.
    AutoNavCountdown { remaining: u32 },
    /// The elliptical traversal began.
    AutoNavStarted,
    /// Countdown or traversal ended.
    AutoNavStopped,
    ColumnsChanged { columns: usize },
}
