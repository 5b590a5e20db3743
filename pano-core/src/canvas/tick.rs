use std::time::Instant;

use super::GalleryCanvas;
use crate::auto_nav::CountdownStep;
use crate::contracts::GalleryProvider;
use crate::messages::CanvasEvent;
use crate::scheduler::TimerKey;

#[cfg_attr(feature = "profile-with-puffin", profiling::all_functions)]
impl<P: GalleryProvider> GalleryCanvas<P> {
    /// Advance one animation frame.
    ///
    /// Order: due timers, target update (auto-navigation or input), camera
    /// easing, teleport correction, grid refresh, hover under a resting
    /// pointer, sink pushes.
    pub fn tick(&mut self, now: Instant) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        if self.shut_down {
            return events;
        }

        for key in self.timers.poll(now) {
            self.on_timer(key, now, &mut events);
        }

        if self.dims.is_some() {
            self.drive_target();
            self.camera
                .step(self.config.drag_ease, self.config.settle_epsilon);
            self.apply_teleport();
        }

        let pushes = self.stats.item_pushes;
        self.refresh_grid();
        let grid_moved = self.stats.item_pushes != pushes
            || self.pushed_transform != Some(self.camera.current());
        if grid_moved && self.is_interactive() {
            self.refresh_hover(now);
        }
        self.push_transform();
        self.push_overlay();
        self.stats.ticks += 1;
        events
    }

    fn drive_target(&mut self) {
        if !self.is_interactive() {
            return;
        }
        if let Some(target) = self.auto_nav.advance(self.config.idle_speed) {
            self.camera.set_target(target);
            return;
        }
        let velocity = self.input.velocity(
            self.viewport,
            self.config.edge_threshold,
            self.config.max_scroll_speed,
        );
        self.camera.nudge_target(velocity);
    }

    fn on_timer(
        &mut self,
        key: TimerKey,
        now: Instant,
        events: &mut Vec<CanvasEvent>,
    ) {
        match key {
            TimerKey::AutoNavCountdown => {
                if !self.interaction_enabled() {
                    return;
                }
                let step = self.auto_nav.countdown_tick(
                    self.camera.target(),
                    self.viewport,
                    self.config.idle_radius_x_factor,
                    self.config.idle_radius_y_factor,
                );
                match step {
                    CountdownStep::Continue(remaining) => {
                        events.push(CanvasEvent::AutoNavCountdown { remaining });
                    }
                    CountdownStep::Activated => {
                        self.timers.cancel(TimerKey::AutoNavCountdown);
                        self.timers.schedule_once(
                            TimerKey::AutoNavHint,
                            now,
                            self.config.hint_duration(),
                        );
                        events.push(CanvasEvent::AutoNavStarted);
                    }
                    CountdownStep::Ignored => {
                        self.timers.cancel(TimerKey::AutoNavCountdown);
                    }
                }
            }
            TimerKey::AutoNavHint => {
                self.auto_nav.hide_hint();
            }
            TimerKey::PreviewRotation => {
                if !self.interaction_enabled() {
                    return;
                }
                let Some(gallery) = self.previews.hovered() else {
                    self.timers.cancel(TimerKey::PreviewRotation);
                    return;
                };
                let count = self.provider.image_count(&gallery);
                if self.previews.advance(count) {
                    self.force_recompute = true;
                }
            }
        }
    }

    fn push_transform(&mut self) {
        let offset = self.camera.current();
        if self.pushed_transform != Some(offset) {
            self.sink.present_transform(offset);
            self.pushed_transform = Some(offset);
        }
    }

    fn push_overlay(&mut self) {
        let overlay = self.overlay();
        if overlay != self.pushed_overlay {
            self.sink.present_overlay(&overlay);
            self.pushed_overlay = overlay;
        }
    }
}
