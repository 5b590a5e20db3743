use pano_model::Vec2;

/// One first-order lag step: cover `ease` of the remaining distance.
pub fn ease_toward(current: f64, target: f64, ease: f64) -> f64 {
    current + (target - current) * ease
}

/// Camera offset state.
///
/// `target` is where input wants the camera to be; `current` is what gets
/// rendered and lags behind it by the drag ease every tick. Both are world
/// translations applied to every tile.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    current: Vec2,
    target: Vec2,
}

impl Camera {
    /// Camera resting at `position`.
    pub fn new(position: Vec2) -> Self {
        Self {
            current: position,
            target: position,
        }
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Move the target by a per-tick velocity.
    pub fn nudge_target(&mut self, velocity: Vec2) {
        if velocity.is_finite() {
            self.target += velocity;
        }
    }

    /// Set the target directly (auto-navigation).
    pub fn set_target(&mut self, target: Vec2) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Place both current and target at `position` with no easing.
    pub fn jump_to(&mut self, position: Vec2) {
        if position.is_finite() {
            self.current = position;
            self.target = position;
        }
    }

    /// Translate both current and target; the distance between them, and
    /// therefore the easing in flight, is preserved.
    pub fn shift(&mut self, delta: Vec2) {
        self.current += delta;
        self.target += delta;
    }

    /// Ease `current` toward `target`. Within `settle_epsilon` the camera
    /// snaps onto the target. Returns whether `current` moved.
    pub fn step(&mut self, ease: f64, settle_epsilon: f64) -> bool {
        let before = self.current;
        let remaining = self.target - self.current;
        if remaining.length() <= settle_epsilon {
            self.current = self.target;
        } else {
            self.current = Vec2::new(
                ease_toward(self.current.x, self.target.x, ease),
                ease_toward(self.current.y, self.target.y, ease),
            );
        }
        self.current != before
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_covers_ease_fraction() {
        let mut camera = Camera::new(Vec2::ZERO);
        camera.nudge_target(Vec2::new(100.0, 0.0));
        assert!(camera.step(0.075, 0.001));
        assert!((camera.current().x - 7.5).abs() < 1e-9);
        assert_eq!(camera.target(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn converges_geometrically() {
        let mut camera = Camera::new(Vec2::ZERO);
        camera.set_target(Vec2::new(-400.0, 200.0));
        for _ in 0..40 {
            camera.step(0.075, 0.001);
        }
        let remaining = (camera.target() - camera.current()).length();
        let expected = Vec2::new(-400.0, 200.0).length() * 0.925_f64.powi(40);
        assert!((remaining - expected).abs() < 1e-6);
    }

    #[test]
    fn snaps_within_epsilon() {
        let mut camera = Camera::new(Vec2::ZERO);
        camera.set_target(Vec2::new(0.0005, 0.0));
        assert!(camera.step(0.075, 0.001));
        assert!(camera.is_settled());
        assert!(!camera.step(0.075, 0.001));
    }

    #[test]
    fn shift_preserves_pending_motion() {
        let mut camera = Camera::new(Vec2::ZERO);
        camera.set_target(Vec2::new(50.0, 0.0));
        camera.shift(Vec2::new(-1000.0, 10.0));
        assert_eq!(camera.current(), Vec2::new(-1000.0, 10.0));
        assert_eq!(camera.target(), Vec2::new(-950.0, 10.0));
    }

    #[test]
    fn ignores_non_finite_velocity() {
        let mut camera = Camera::new(Vec2::ZERO);
        camera.nudge_target(Vec2::new(f64::NAN, 1.0));
        assert_eq!(camera.target(), Vec2::ZERO);
    }
}
