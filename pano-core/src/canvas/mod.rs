//! The canvas controller
//!
//! [`GalleryCanvas`] owns every piece of motion state and is the only writer
//! of it. Hosts feed discrete events through [`GalleryCanvas::update`] and
//! drive the frame loop with [`GalleryCanvas::tick`]; both run to completion
//! and return the [`CanvasEvent`]s they produced. Render output is pushed to
//! the injected [`RenderSink`] only when it changed.

mod tick;
mod update;

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use pano_model::{GalleryId, ItemDimensions, Vec2, Viewport, VisibleItem};

use crate::auto_nav::{AutoNavPhase, AutoNavigator};
use crate::camera::{Camera, TeleportAnchor};
use crate::config::{CanvasConfig, ConfigError};
use crate::contracts::{GalleryProvider, InteractionGate, Overlay, RenderSink};
use crate::grid::{BackingList, GridInput, GridVirtualizer};
use crate::input::InputAggregator;
use crate::messages::CanvasEvent;
use crate::preview::{HoverChange, PreviewRotation};
use crate::scheduler::{Scheduler, TimerKey};
use crate::scroll_manager::{SavedCamera, ScrollPositionManager};
use crate::view_state::{GridSource, ViewState};

/// Counters for diagnostics and the simulator summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct CanvasStats {
    pub ticks: u64,
    /// Visible-set rebuilds.
    pub recomputes: u64,
    pub teleports: u64,
    /// Item sets pushed to the sink.
    pub item_pushes: u64,
}

/// Infinite, wrapping gallery canvas.
pub struct GalleryCanvas<P> {
    config: CanvasConfig,
    provider: P,
    sink: Box<dyn RenderSink>,
    gate: Box<dyn InteractionGate>,

    view: ViewState,
    columns: usize,
    viewport: Viewport,
    dims: Option<ItemDimensions>,

    camera: Camera,
    anchor: TeleportAnchor,
    input: InputAggregator,
    auto_nav: AutoNavigator,
    timers: Scheduler<TimerKey>,
    previews: PreviewRotation,
    scroll_positions: ScrollPositionManager,
    grid: GridVirtualizer,

    force_recompute: bool,
    pushed_transform: Option<Vec2>,
    pushed_overlay: Overlay,
    stats: CanvasStats,
    shut_down: bool,
}

impl<P> fmt::Debug for GalleryCanvas<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryCanvas")
            .field("view", &self.view)
            .field("columns", &self.columns)
            .field("viewport", &self.viewport)
            .field("camera", &self.camera)
            .field("auto_nav", self.auto_nav.phase())
            .field("timers", &self.timers)
            .field("visible_items", &self.grid.items().len())
            .field("stats", &self.stats)
            .field("shut_down", &self.shut_down)
            .finish_non_exhaustive()
    }
}

/// Resolve the list a view repeats. Free function so callers can keep
/// disjoint borrows of the canvas fields.
fn backing_list<'a, P: GalleryProvider>(
    view: &ViewState,
    provider: &'a P,
    previews: &'a PreviewRotation,
) -> BackingList<'a> {
    match view.grid_source() {
        GridSource::Galleries => BackingList::Galleries { provider, previews },
        GridSource::Photos(gallery) => BackingList::Photos { provider, gallery },
        GridSource::None => BackingList::Empty,
    }
}

#[cfg_attr(feature = "profile-with-puffin", profiling::all_functions)]
impl<P: GalleryProvider> GalleryCanvas<P> {
    /// Build a canvas in the gallery view. The viewport starts unmeasured;
    /// nothing renders until the first [`crate::CanvasMessage::Resized`].
    pub fn new(
        config: CanvasConfig,
        provider: P,
        sink: Box<dyn RenderSink>,
        gate: Box<dyn InteractionGate>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "canvas created: {} columns, gap {}, ease {}",
            config.columns,
            config.gap,
            config.drag_ease
        );
        Ok(Self {
            columns: config.columns,
            grid: GridVirtualizer::new(config.recompute_quantum),
            config,
            provider,
            sink,
            gate,
            view: ViewState::default(),
            viewport: Viewport::default(),
            dims: None,
            camera: Camera::default(),
            anchor: TeleportAnchor::default(),
            input: InputAggregator::new(),
            auto_nav: AutoNavigator::new(),
            timers: Scheduler::new(),
            previews: PreviewRotation::new(),
            scroll_positions: ScrollPositionManager::new(),
            force_recompute: true,
            pushed_transform: None,
            pushed_overlay: Overlay::default(),
            stats: CanvasStats::default(),
            shut_down: false,
        })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable provider access; follow up with
    /// [`crate::CanvasMessage::DataChanged`].
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn dimensions(&self) -> Option<ItemDimensions> {
        self.dims
    }

    /// Rendered camera offset.
    pub fn camera(&self) -> Vec2 {
        self.camera.current()
    }

    pub fn target(&self) -> Vec2 {
        self.camera.target()
    }

    /// Camera position of the current layout's anchor.
    pub fn anchor(&self) -> Vec2 {
        self.anchor.initial()
    }

    pub fn teleport_distance(&self) -> Vec2 {
        self.anchor.distance()
    }

    /// Current visible set, world-space rects.
    pub fn items(&self) -> &Arc<[VisibleItem]> {
        self.grid.items()
    }

    /// Visible item under a viewport-relative point.
    pub fn item_at(&self, screen: Vec2) -> Option<&VisibleItem> {
        self.grid.item_at(screen - self.camera.current())
    }

    pub fn auto_nav_phase(&self) -> &AutoNavPhase {
        self.auto_nav.phase()
    }

    pub fn is_auto_navigating(&self) -> bool {
        self.auto_nav.is_active()
    }

    pub fn overlay(&self) -> Overlay {
        Overlay {
            countdown: self.auto_nav.countdown(),
            auto_navigating: self.auto_nav.is_active(),
            hint_visible: self.auto_nav.hint_visible(),
        }
    }

    pub fn is_timer_scheduled(&self, key: TimerKey) -> bool {
        self.timers.is_scheduled(key)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn hovered_gallery(&self) -> Option<GalleryId> {
        self.previews.hovered()
    }

    pub fn stats(&self) -> CanvasStats {
        CanvasStats {
            recomputes: self.grid.recompute_count(),
            ..self.stats
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Cancel every timer and stop reacting to input and ticks.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        let cancelled = self.timers.cancel_all();
        self.auto_nav.exit();
        self.input.release_all();
        self.shut_down = true;
        log::info!("canvas shut down, {cancelled} timers cancelled");
    }

    fn interaction_enabled(&self) -> bool {
        self.gate.is_interaction_enabled()
    }

    /// Gate open and the view accepts canvas input.
    fn is_interactive(&self) -> bool {
        self.view.is_canvas_interactive() && self.interaction_enabled()
    }

    fn item_count(&self) -> usize {
        backing_list(&self.view, &self.provider, &self.previews).len()
    }

    /// Leave auto-navigation, dropping its timers.
    fn exit_auto_nav(&mut self, events: &mut Vec<CanvasEvent>) {
        if self.auto_nav.exit() {
            self.timers.cancel(TimerKey::AutoNavCountdown);
            self.timers.cancel(TimerKey::AutoNavHint);
            events.push(CanvasEvent::AutoNavStopped);
        }
    }

    /// Track the gallery card under the pointer. Runs on pointer moves and
    /// whenever the grid moves under a resting pointer.
    fn refresh_hover(&mut self, now: Instant) {
        let hovered = match (self.view, self.input.pointer()) {
            (ViewState::Galleries, Some(pointer)) => self
                .item_at(pointer)
                .filter(|item| item.content.is_gallery())
                .map(|item| item.content.gallery_id()),
            _ => None,
        };
        match self.previews.set_hovered(hovered) {
            HoverChange::Started(gallery) => {
                log::trace!("hovering gallery {gallery}");
                self.timers.schedule_repeating(
                    TimerKey::PreviewRotation,
                    now,
                    self.config.preview_interval(),
                );
            }
            HoverChange::Stopped => {
                self.timers.cancel(TimerKey::PreviewRotation);
            }
            HoverChange::Unchanged => {}
        }
    }

    fn stop_preview(&mut self) {
        self.previews.set_hovered(None);
        self.timers.cancel(TimerKey::PreviewRotation);
    }

    /// Recompute dimensions and the teleport anchor for a new viewport or
    /// column count, keeping the grid point under the viewport centre fixed.
    fn relayout(&mut self, viewport: Viewport, columns: usize) {
        let previous = self.dims.map(|dims| (dims, self.viewport));
        self.viewport = viewport;
        self.columns = columns;
        self.force_recompute = true;

        self.dims = if viewport.is_degenerate() {
            None
        } else {
            ItemDimensions::for_viewport(viewport.width, columns, self.config.gap)
        };
        let Some(dims) = self.dims else {
            log::debug!(
                "viewport {}x{} too small for {} columns",
                viewport.width,
                viewport.height,
                columns
            );
            return;
        };
        self.reconfigure_anchor();

        match previous {
            Some((old_dims, old_viewport)) => {
                let reproject = |point: Vec2| {
                    let old_center = old_viewport.center();
                    let cells = Vec2::new(
                        (old_center.x - point.x) / old_dims.cell_width,
                        (old_center.y - point.y) / old_dims.cell_height,
                    );
                    viewport.center()
                        - Vec2::new(
                            cells.x * dims.cell_width,
                            cells.y * dims.cell_height,
                        )
                };
                let current = reproject(self.camera.current());
                let target = reproject(self.camera.target());
                self.camera.jump_to(current);
                self.camera.set_target(target);
            }
            None => self.camera.jump_to(self.anchor.initial()),
        }
        self.apply_teleport();
        log::debug!(
            "layout {}x{} with {} columns: tile {:.1}px",
            viewport.width,
            viewport.height,
            columns,
            dims.width
        );
    }

    fn reconfigure_anchor(&mut self) {
        if let Some(dims) = self.dims {
            let count = self.item_count();
            self.anchor.reconfigure(
                self.viewport,
                &dims,
                self.columns,
                count,
                self.config.buffer_zone,
            );
        }
    }

    /// Shift the camera back inside the teleport bounds.
    fn apply_teleport(&mut self) -> bool {
        let correction = self.anchor.correction(self.camera.current());
        if correction == Vec2::ZERO {
            return false;
        }
        self.camera.shift(correction);
        self.auto_nav.shift(correction);
        self.stats.teleports += 1;
        self.force_recompute = true;
        log::trace!("teleported by ({:.1}, {:.1})", correction.x, correction.y);
        true
    }

    /// Switch views, persisting and restoring per-view camera positions.
    fn enter_view(&mut self, view: ViewState, events: &mut Vec<CanvasEvent>) {
        if view == self.view {
            return;
        }
        self.exit_auto_nav(events);
        self.stop_preview();

        let old_key = self.view.scroll_key();
        let new_key = view.scroll_key();
        if old_key != new_key
            && let (Some(key), Some(dims)) = (old_key, self.dims)
            && let Some(saved) = SavedCamera::capture(
                self.camera.current(),
                self.anchor.initial(),
                dims.cell(),
            )
        {
            self.scroll_positions.save(key, saved);
        }

        log::info!("view {:?} -> {:?}", self.view, view);
        self.view = view;
        self.force_recompute = true;

        if old_key != new_key {
            self.reconfigure_anchor();
            if let Some(dims) = self.dims {
                let position = new_key
                    .and_then(|key| self.scroll_positions.restore(&key))
                    .map(|saved| saved.position(self.anchor.initial(), dims.cell()))
                    .unwrap_or_else(|| self.anchor.initial());
                self.camera.jump_to(position);
                self.apply_teleport();
            }
        }
        events.push(CanvasEvent::ViewChanged { view });
    }

    /// Rebuild the visible set if the camera bucket changed or a rebuild
    /// was requested, and push it to the sink.
    fn refresh_grid(&mut self) {
        if !self.view.renders_grid() {
            self.force_recompute = false;
            if self.grid.clear() {
                self.push_items();
            }
            return;
        }
        let Some(dims) = self.dims else {
            return;
        };
        let input = GridInput {
            camera: self.camera.current(),
            viewport: self.viewport,
            dims,
            columns: self.columns,
            buffer_zone: self.config.buffer_zone,
        };
        let list = backing_list(&self.view, &self.provider, &self.previews);
        let changed = self.grid.recompute(&input, &list, self.force_recompute);
        self.force_recompute = false;
        if changed {
            self.push_items();
        }
    }

    fn push_items(&mut self) {
        self.sink.present_items(self.grid.items());
        self.stats.item_pushes += 1;
    }
}
