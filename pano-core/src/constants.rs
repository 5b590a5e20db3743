//! Canvas tuning constants
//!
//! Compiled defaults for every parameter of [`crate::CanvasConfig`]. Tuning
//! should happen here so the config defaults, the CLI and the tests agree.

/// Grid layout defaults.
pub mod layout {
    /// Column count at startup.
    pub const DEFAULT_COLUMNS: usize = 4;
    /// Fewest columns reachable by zooming in.
    pub const MIN_COLUMNS: usize = 1;
    /// Most columns reachable by zooming out.
    pub const MAX_COLUMNS: usize = 8;
    /// Gap between neighbouring tiles (px).
    pub const GAP: f64 = 32.0;
    /// Extra cells rendered beyond each viewport edge.
    pub const BUFFER_ZONE: f64 = 1.5;
    /// Camera travel (px) per memoization bucket of the virtualizer.
    pub const RECOMPUTE_QUANTUM: f64 = 100.0;
}

/// Camera and input motion defaults.
pub mod motion {
    /// Distance from a viewport edge (px) where edge scrolling starts.
    pub const EDGE_THRESHOLD: f64 = 150.0;
    /// Target displacement per tick at full intensity (px).
    pub const MAX_SCROLL_SPEED: f64 = 25.0;
    /// Fraction of the remaining distance covered per tick.
    pub const DRAG_EASE: f64 = 0.075;
    /// Below this distance (px) the camera snaps onto its target.
    pub const SETTLE_EPSILON: f64 = 0.001;
}

/// Auto-navigation defaults.
pub mod auto_nav {
    /// Countdown start value (one step per countdown interval).
    pub const COUNTDOWN_SECS: u32 = 3;
    /// Angular speed along the ellipse (rad/tick).
    pub const IDLE_SPEED: f64 = 0.001;
    /// Ellipse x radius as a multiple of the viewport width.
    pub const RADIUS_X_FACTOR: f64 = 2.5;
    /// Ellipse y radius as a multiple of the viewport height.
    pub const RADIUS_Y_FACTOR: f64 = 1.5;
    /// Key that requests auto-navigation.
    pub const HOTKEY: char = 'a';
}

/// Timer cadences.
pub mod timers {
    /// Countdown step (ms).
    pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;
    /// How long the auto-navigation hint stays up (ms).
    pub const HINT_DURATION_MS: u64 = 4000;
    /// Gallery preview rotation cadence while hovered (ms).
    pub const PREVIEW_INTERVAL_MS: u64 = 500;
    /// Upper bound of timer events delivered by a single poll.
    pub const MAX_FIRES_PER_POLL: usize = 64;
}
