//! Canvas configuration surface
//!
//! [`CanvasConfig`] carries every tunable of the engine. Missing fields in a
//! serialized config fall back to the compiled defaults in
//! [`crate::constants`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{auto_nav, layout, motion, timers};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("column bounds are inverted: min {min} > max {max}")]
    ColumnBoundsInverted { min: usize, max: usize },
    #[error("columns {columns} outside the allowed range {min}..={max}")]
    ColumnsOutOfRange {
        columns: usize,
        min: usize,
        max: usize,
    },
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("drag_ease must lie in (0, 1], got {0}")]
    EaseOutOfRange(f64),
    #[error("{field} must be at least 1 ms")]
    ZeroDuration { field: &'static str },
    #[error("countdown_secs must be at least 1")]
    ZeroCountdown,
}

/// Every tunable of the canvas engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Column count at startup.
    pub columns: usize,
    /// Fewest columns reachable by zooming in.
    pub min_columns: usize,
    /// Most columns reachable by zooming out.
    pub max_columns: usize,
    /// Gap between tiles (px).
    pub gap: f64,
    /// Edge scroll activation distance (px).
    pub edge_threshold: f64,
    /// Target displacement per tick at full input intensity (px).
    pub max_scroll_speed: f64,
    /// First-order lag factor applied to the camera every tick.
    pub drag_ease: f64,
    /// Extra cells rendered beyond each viewport edge.
    pub buffer_zone: f64,
    /// Camera travel (px) per virtualizer memoization bucket.
    pub recompute_quantum: f64,
    /// Below this distance (px) the camera snaps onto its target.
    pub settle_epsilon: f64,
    /// Auto-navigation countdown start value.
    pub countdown_secs: u32,
    pub countdown_interval_ms: u64,
    /// Angular speed along the auto-navigation ellipse (rad/tick).
    pub idle_speed: f64,
    pub idle_radius_x_factor: f64,
    pub idle_radius_y_factor: f64,
    pub hint_duration_ms: u64,
    pub preview_interval_ms: u64,
    /// Key that requests auto-navigation.
    pub auto_nav_hotkey: char,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            columns: layout::DEFAULT_COLUMNS,
            min_columns: layout::MIN_COLUMNS,
            max_columns: layout::MAX_COLUMNS,
            gap: layout::GAP,
            edge_threshold: motion::EDGE_THRESHOLD,
            max_scroll_speed: motion::MAX_SCROLL_SPEED,
            drag_ease: motion::DRAG_EASE,
            buffer_zone: layout::BUFFER_ZONE,
            recompute_quantum: layout::RECOMPUTE_QUANTUM,
            settle_epsilon: motion::SETTLE_EPSILON,
            countdown_secs: auto_nav::COUNTDOWN_SECS,
            countdown_interval_ms: timers::COUNTDOWN_INTERVAL_MS,
            idle_speed: auto_nav::IDLE_SPEED,
            idle_radius_x_factor: auto_nav::RADIUS_X_FACTOR,
            idle_radius_y_factor: auto_nav::RADIUS_Y_FACTOR,
            hint_duration_ms: timers::HINT_DURATION_MS,
            preview_interval_ms: timers::PREVIEW_INTERVAL_MS,
            auto_nav_hotkey: auto_nav::HOTKEY,
        }
    }
}

impl CanvasConfig {
    /// Check every field against its documented domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_columns == 0 {
            return Err(ConfigError::ColumnsOutOfRange {
                columns: self.min_columns,
                min: 1,
                max: self.max_columns,
            });
        }
        if self.min_columns > self.max_columns {
            return Err(ConfigError::ColumnBoundsInverted {
                min: self.min_columns,
                max: self.max_columns,
            });
        }
        if !(self.min_columns..=self.max_columns).contains(&self.columns) {
            return Err(ConfigError::ColumnsOutOfRange {
                columns: self.columns,
                min: self.min_columns,
                max: self.max_columns,
            });
        }

        non_negative("gap", self.gap)?;
        positive("edge_threshold", self.edge_threshold)?;
        non_negative("max_scroll_speed", self.max_scroll_speed)?;
        non_negative("buffer_zone", self.buffer_zone)?;
        positive("recompute_quantum", self.recompute_quantum)?;
        non_negative("settle_epsilon", self.settle_epsilon)?;
        non_negative("idle_speed", self.idle_speed)?;
        non_negative("idle_radius_x_factor", self.idle_radius_x_factor)?;
        non_negative("idle_radius_y_factor", self.idle_radius_y_factor)?;

        if !(self.drag_ease > 0.0 && self.drag_ease <= 1.0) {
            return Err(ConfigError::EaseOutOfRange(self.drag_ease));
        }
        if self.countdown_secs == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        for (field, ms) in [
            ("countdown_interval_ms", self.countdown_interval_ms),
            ("hint_duration_ms", self.hint_duration_ms),
            ("preview_interval_ms", self.preview_interval_ms),
        ] {
            if ms == 0 {
                return Err(ConfigError::ZeroDuration { field });
            }
        }
        Ok(())
    }

    /// Clamp a requested column count into the zoom bounds.
    pub fn clamp_columns(&self, columns: usize) -> usize {
        columns.clamp(self.min_columns, self.max_columns)
    }

    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }

    pub fn hint_duration(&self) -> Duration {
        Duration::from_millis(self.hint_duration_ms)
    }

    pub fn preview_interval(&self) -> Duration {
        Duration::from_millis(self.preview_interval_ms)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
