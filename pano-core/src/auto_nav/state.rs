use pano_model::{Vec2, Viewport};

/// Elliptical traversal around a fixed centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsePath {
    pub center: Vec2,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Current angle (rad).
    pub angle: f64,
}

impl EllipsePath {
    /// Ellipse whose angle-zero point is `start`, so entering the
    /// traversal does not move the camera.
    pub fn starting_at(start: Vec2, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center: start - Vec2::new(radius_x, 0.0),
            radius_x,
            radius_y,
            angle: 0.0,
        }
    }

    pub fn point(&self) -> Vec2 {
        self.center
            + Vec2::new(
                self.radius_x * self.angle.cos(),
                self.radius_y * self.angle.sin(),
            )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum AutoNavPhase {
    #[default]
    Idle,
    /// Counting down to activation; `remaining` is the number shown.
    CountingDown { remaining: u32 },
    Active(EllipsePath),
}

/// Result of a countdown timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Still counting; carries the new remaining value.
    Continue(u32),
    /// Reached zero and switched to the elliptical traversal.
    Activated,
    /// No countdown in progress.
    Ignored,
}

/// Auto-navigation state machine.
#[derive(Debug, Clone, Default)]
pub struct AutoNavigator {
    phase: AutoNavPhase,
    hint_visible: bool,
}

impl AutoNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &AutoNavPhase {
        &self.phase
    }

    /// Counting down or active.
    pub fn is_engaged(&self) -> bool {
        !matches!(self.phase, AutoNavPhase::Idle)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, AutoNavPhase::Active(_))
    }

    pub fn countdown(&self) -> Option<u32> {
        match self.phase {
            AutoNavPhase::CountingDown { remaining } => Some(remaining),
            _ => None,
        }
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Hide the hint overlay. Returns whether it was showing.
    pub fn hide_hint(&mut self) -> bool {
        std::mem::take(&mut self.hint_visible)
    }

    /// Start a countdown from `secs`. Returns false if already engaged.
    pub fn request(&mut self, secs: u32) -> bool {
        if self.is_engaged() {
            return false;
        }
        self.phase = AutoNavPhase::CountingDown {
            remaining: secs.max(1),
        };
        log::info!("auto-navigation countdown started at {secs}");
        true
    }

    /// One countdown step. On reaching zero the ellipse is laid out around
    /// `target`, sized from the viewport.
    pub fn countdown_tick(
        &mut self,
        target: Vec2,
        viewport: Viewport,
        radius_x_factor: f64,
        radius_y_factor: f64,
    ) -> CountdownStep {
        let AutoNavPhase::CountingDown { remaining } = self.phase else {
            return CountdownStep::Ignored;
        };
        let remaining = remaining.saturating_sub(1);
        if remaining > 0 {
            self.phase = AutoNavPhase::CountingDown { remaining };
            return CountdownStep::Continue(remaining);
        }
        let path = EllipsePath::starting_at(
            target,
            viewport.width * radius_x_factor,
            viewport.height * radius_y_factor,
        );
        self.phase = AutoNavPhase::Active(path);
        self.hint_visible = true;
        log::info!(
            "auto-navigation active, radii {:.0}x{:.0}",
            path.radius_x,
            path.radius_y
        );
        CountdownStep::Activated
    }

    /// Advance along the ellipse; returns the new target while active.
    pub fn advance(&mut self, angular_speed: f64) -> Option<Vec2> {
        match &mut self.phase {
            AutoNavPhase::Active(path) => {
                path.angle += angular_speed;
                Some(path.point())
            }
            _ => None,
        }
    }

    /// Move the ellipse with a teleport correction.
    pub fn shift(&mut self, delta: Vec2) {
        if let AutoNavPhase::Active(path) = &mut self.phase {
            path.center += delta;
        }
    }

    /// Back to idle. Returns whether anything was engaged.
    pub fn exit(&mut self) -> bool {
        let was_engaged = self.is_engaged();
        self.phase = AutoNavPhase::Idle;
        self.hint_visible = false;
        if was_engaged {
            log::info!("auto-navigation stopped");
        }
        was_engaged
    }
}
