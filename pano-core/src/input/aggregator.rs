use pano_model::{Vec2, Viewport};

use super::keys::{HeldArrows, Key};

/// Signed edge-scroll intensity for one axis, in `[-1, 1]`.
///
/// Positive within `threshold` of the low edge, negative near the high edge,
/// linear in proximity. When the zones overlap on a small viewport the two
/// contributions cancel proportionally.
pub fn edge_intensity(position: f64, extent: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 || !threshold.is_finite() {
        return 0.0;
    }
    let low = ((threshold - position) / threshold).clamp(0.0, 1.0);
    let high = ((position - (extent - threshold)) / threshold).clamp(0.0, 1.0);
    low - high
}

/// Tracks pointer and held keys between ticks.
#[derive(Debug, Clone, Default)]
pub struct InputAggregator {
    pointer: Option<Vec2>,
    context_menu_open: bool,
    arrows: HeldArrows,
}

#[cfg_attr(feature = "profile-with-puffin", profiling::all_functions)]
impl InputAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn set_pointer(&mut self, position: Option<Vec2>) {
        self.pointer = position.filter(|p| p.is_finite());
    }

    pub fn set_context_menu(&mut self, open: bool) {
        self.context_menu_open = open;
    }

    pub fn context_menu_open(&self) -> bool {
        self.context_menu_open
    }

    pub fn arrows(&self) -> HeldArrows {
        self.arrows
    }

    /// Record an arrow press or release; returns false for other keys.
    pub fn set_key(&mut self, key: Key, held: bool) -> bool {
        self.arrows.set(key, held)
    }

    /// Forget held keys, e.g. after focus loss when releases never arrive.
    pub fn release_all(&mut self) {
        self.arrows.clear();
    }

    /// Edge-scroll velocity (px/tick) from the pointer position.
    pub fn edge_velocity(
        &self,
        viewport: Viewport,
        threshold: f64,
        max_speed: f64,
    ) -> Vec2 {
        if self.context_menu_open || viewport.is_degenerate() {
            return Vec2::ZERO;
        }
        let Some(pointer) = self.pointer else {
            return Vec2::ZERO;
        };
        if !viewport.contains(pointer) {
            return Vec2::ZERO;
        }
        Vec2::new(
            edge_intensity(pointer.x, viewport.width, threshold),
            edge_intensity(pointer.y, viewport.height, threshold),
        ) * max_speed
    }

    /// Keyboard velocity (px/tick) from held arrows.
    pub fn keyboard_velocity(&self, max_speed: f64) -> Vec2 {
        self.arrows.direction() * max_speed
    }

    /// Sum of both sources.
    pub fn velocity(
        &self,
        viewport: Viewport,
        threshold: f64,
        max_speed: f64,
    ) -> Vec2 {
        self.edge_velocity(viewport, threshold, max_speed)
            + self.keyboard_velocity(max_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(1200.0, 800.0);

    #[test]
    fn intensity_is_linear_near_edges() {
        assert_eq!(edge_intensity(0.0, 1200.0, 150.0), 1.0);
        assert_eq!(edge_intensity(75.0, 1200.0, 150.0), 0.5);
        assert_eq!(edge_intensity(600.0, 1200.0, 150.0), 0.0);
        assert_eq!(edge_intensity(1125.0, 1200.0, 150.0), -0.5);
        assert_eq!(edge_intensity(1200.0, 1200.0, 150.0), -1.0);
    }

    #[test]
    fn pointer_in_left_edge_zone_scrolls_right() {
        let mut input = InputAggregator::new();
        input.set_pointer(Some(Vec2::new(30.0, 400.0)));
        let v = input.edge_velocity(VIEW, 150.0, 25.0);
        assert!((v.x - 20.0).abs() < 1e-9);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn no_edge_scroll_outside_viewport_or_with_menu() {
        let mut input = InputAggregator::new();
        input.set_pointer(Some(Vec2::new(-10.0, 400.0)));
        assert_eq!(input.edge_velocity(VIEW, 150.0, 25.0), Vec2::ZERO);

        input.set_pointer(Some(Vec2::new(10.0, 400.0)));
        input.set_context_menu(true);
        assert_eq!(input.edge_velocity(VIEW, 150.0, 25.0), Vec2::ZERO);
    }

    #[test]
    fn sources_combine_additively() {
        let mut input = InputAggregator::new();
        input.set_pointer(Some(Vec2::new(600.0, 0.0)));
        input.set_key(Key::ArrowRight, true);
        let v = input.velocity(VIEW, 150.0, 25.0);
        assert_eq!(v, Vec2::new(-25.0, 25.0));

        input.release_all();
        input.set_pointer(None);
        assert_eq!(input.velocity(VIEW, 150.0, 25.0), Vec2::ZERO);
    }
}
