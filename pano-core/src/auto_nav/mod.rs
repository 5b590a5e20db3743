//! Idle auto-navigation: an explicit request starts a countdown, after which
//! the camera target follows a slow ellipse until the user interacts.

pub mod state;

pub use state::{AutoNavPhase, AutoNavigator, CountdownStep, EllipsePath};
