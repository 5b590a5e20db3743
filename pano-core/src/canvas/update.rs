use std::time::Instant;

use pano_model::{Vec2, Viewport, VisibleContent};

use super::GalleryCanvas;
use crate::contracts::GalleryProvider;
use crate::input::Key;
use crate::messages::{CanvasEvent, CanvasMessage};
use crate::scheduler::TimerKey;
use crate::view_state::ViewState;

#[cfg_attr(feature = "profile-with-puffin", profiling::all_functions)]
impl<P: GalleryProvider> GalleryCanvas<P> {
    /// Apply one input event. State changes take effect immediately; the
    /// render output follows on the next [`GalleryCanvas::tick`].
    pub fn update(
        &mut self,
        message: CanvasMessage,
        now: Instant,
    ) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        if self.shut_down {
            return events;
        }
        match message {
            CanvasMessage::PointerMoved(position) => {
                self.handle_pointer_moved(position, now, &mut events);
            }
            CanvasMessage::PointerLeft => {
                self.input.set_pointer(None);
                self.stop_preview();
            }
            CanvasMessage::Clicked(position) => {
                self.handle_click(position, &mut events);
            }
            CanvasMessage::KeyPressed(key) => {
                self.handle_key_pressed(key, now, &mut events);
            }
            CanvasMessage::KeyReleased(key) => {
                self.input.set_key(key, false);
            }
            CanvasMessage::FocusLost => self.input.release_all(),
            CanvasMessage::Resized(viewport) => {
                self.handle_resize(viewport, &mut events);
            }
            CanvasMessage::ContextMenu(open) => {
                self.input.set_context_menu(open);
            }
            CanvasMessage::ZoomIn => {
                self.zoom_to(self.columns.saturating_sub(1), &mut events);
            }
            CanvasMessage::ZoomOut => {
                self.zoom_to(self.columns.saturating_add(1), &mut events);
            }
            CanvasMessage::SetColumns(columns) => {
                self.zoom_to(columns, &mut events);
            }
            CanvasMessage::SetView(view) => self.enter_view(view, &mut events),
            CanvasMessage::DataChanged => self.handle_data_changed(&mut events),
            CanvasMessage::RequestAutoNav => {
                self.request_auto_nav(now, &mut events);
            }
            CanvasMessage::CancelAutoNav => self.exit_auto_nav(&mut events),
        }
        events
    }

    fn handle_pointer_moved(
        &mut self,
        position: Vec2,
        now: Instant,
        events: &mut Vec<CanvasEvent>,
    ) {
        self.input.set_pointer(Some(position));
        if !self.is_interactive() {
            return;
        }
        self.exit_auto_nav(events);
        self.refresh_hover(now);
    }

    fn handle_click(&mut self, position: Vec2, events: &mut Vec<CanvasEvent>) {
        if !self.is_interactive() {
            return;
        }
        if self.auto_nav.is_engaged() {
            self.exit_auto_nav(events);
            return;
        }
        let Some(item) = self.item_at(position) else {
            return;
        };
        let (view, opened) = match &item.content {
            VisibleContent::Gallery { id, .. } => (
                ViewState::Photos { gallery: *id },
                CanvasEvent::GalleryOpened { gallery: *id },
            ),
            VisibleContent::Photo { gallery, .. } => (
                ViewState::ExpandedPhoto {
                    gallery: *gallery,
                    index: item.wrapped_index,
                },
                CanvasEvent::PhotoExpanded {
                    gallery: *gallery,
                    index: item.wrapped_index,
                },
            ),
        };
        events.push(opened);
        self.enter_view(view, events);
    }

    fn handle_key_pressed(
        &mut self,
        key: Key,
        now: Instant,
        events: &mut Vec<CanvasEvent>,
    ) {
        if !self.interaction_enabled() {
            return;
        }
        if key == Key::Escape {
            if self.auto_nav.is_engaged() {
                self.exit_auto_nav(events);
            } else if let Some(parent) = self.view.parent() {
                self.enter_view(parent, events);
            }
            return;
        }
        if !self.view.is_canvas_interactive() {
            return;
        }

        // Exiting auto-navigation consumes the press; held arrows still
        // start scrolling.
        if self.auto_nav.is_engaged() {
            self.exit_auto_nav(events);
            if !key.is_arrow() {
                return;
            }
        }

        match key {
            _ if key.is_arrow() => {
                self.input.set_key(key, true);
            }
            _ if key.is_char(self.config.auto_nav_hotkey) => {
                self.request_auto_nav(now, events);
            }
            Key::Character('+' | '=') => {
                self.zoom_to(self.columns.saturating_sub(1), events);
            }
            Key::Character('-') => {
                self.zoom_to(self.columns.saturating_add(1), events);
            }
            Key::Enter => {
                if let Some(pointer) = self.input.pointer() {
                    self.handle_click(pointer, events);
                }
            }
            _ => {}
        }
    }

    fn handle_resize(
        &mut self,
        viewport: Viewport,
        events: &mut Vec<CanvasEvent>,
    ) {
        if viewport == self.viewport {
            return;
        }
        self.exit_auto_nav(events);
        self.relayout(viewport, self.columns);
    }

    /// Change the column count, clamped to the zoom bounds.
    fn zoom_to(&mut self, requested: usize, events: &mut Vec<CanvasEvent>) {
        if !self.interaction_enabled() {
            return;
        }
        let columns = self.config.clamp_columns(requested);
        if columns == self.columns {
            return;
        }
        self.exit_auto_nav(events);
        self.relayout(self.viewport, columns);
        log::info!("zoomed to {columns} columns");
        events.push(CanvasEvent::ColumnsChanged { columns });
    }

    fn handle_data_changed(&mut self, events: &mut Vec<CanvasEvent>) {
        if let ViewState::ExpandedPhoto { gallery, index } = self.view
            && index >= self.provider.image_count(&gallery)
        {
            self.enter_view(ViewState::Photos { gallery }, events);
        }
        self.reconfigure_anchor();
        self.apply_teleport();
        self.force_recompute = true;
    }

    /// Start the countdown if the gallery view shows at least one card.
    fn request_auto_nav(&mut self, now: Instant, events: &mut Vec<CanvasEvent>) {
        if self.view != ViewState::Galleries || !self.interaction_enabled() {
            return;
        }
        if !self.grid.items().iter().any(|item| item.content.is_gallery()) {
            log::debug!("auto-navigation requested with no visible galleries");
            return;
        }
        let secs = self.config.countdown_secs;
        if self.auto_nav.request(secs) {
            self.timers.schedule_repeating(
                TimerKey::AutoNavCountdown,
                now,
                self.config.countdown_interval(),
            );
            events.push(CanvasEvent::AutoNavCountdown { remaining: secs });
        }
    }
}
