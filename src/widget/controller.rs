//! WidgetController - one owner for the bot's position, visibility and bubble
//!
//! The host adapts native events to the `on_*` methods. Every call applies
//! its whole effect before returning; position and visibility changes are
//! written through to the store inside the same call.

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::primitives::{Footprint, Position, Viewport};

use super::clock::Clock;
use super::config::WidgetConfig;
use super::drag::DragState;
use super::messages::{self, DisplayMessage};
use super::solver;
use super::store::{self, PlacementStore};
use super::timer::{Timer, TimerKind};

pub struct WidgetController<S, R, C> {
    store: S,
    rng: R,
    clock: C,
    config: WidgetConfig,
    viewport: Viewport,
    footprint: Footprint,
    position: Position,
    visible: bool,
    drag: DragState,
    rotation: &'static str,
    tip: Option<&'static str>,
    bubble_visible: bool,
    highlighted: bool,
    bubble_generation: u64,
    tip_generation: u64,
    /// Bubble generation the current tip opened; a later hover owns the bubble
    tip_bubble_generation: u64,
    highlight_generation: u64,
    /// Scroll offset seen while hidden, applied on restore
    missed_scroll: Option<f32>,
    on_close: Option<Box<dyn FnMut()>>,
}

impl<S, R, C> WidgetController<S, R, C>
where
    S: PlacementStore,
    R: Rng,
    C: Clock,
{
    /// Restore visibility and position from `store`, falling back to the
    /// breakpoint default when nothing usable is stored.
    pub fn new(store: S, viewport: Viewport, rng: R, clock: C, config: WidgetConfig) -> Self {
        let footprint = Footprint::for_viewport(viewport);
        let visible = store::load::<bool, _>(&store, &config.keys.visible).unwrap_or(true);
        let stored = store::load::<Position, _>(&store, &config.keys.position);
        let start = stored.unwrap_or_else(|| config.default_position(viewport));
        let position = solver::clamp(start, footprint, viewport);
        debug!(?position, visible, restored = stored.is_some(), "widget constructed");

        Self {
            store,
            rng,
            clock,
            config,
            viewport,
            footprint,
            position,
            visible,
            drag: DragState::Idle,
            rotation: messages::ROTATION[0],
            tip: None,
            bubble_visible: false,
            highlighted: false,
            bubble_generation: 0,
            tip_generation: 0,
            tip_bubble_generation: 0,
            highlight_generation: 0,
            missed_scroll: None,
            on_close: None,
        }
    }

    pub fn set_on_close(&mut self, callback: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn message(&self) -> DisplayMessage {
        DisplayMessage {
            text: self.tip.unwrap_or(self.rotation),
            bubble_visible: self.visible && self.bubble_visible,
            highlighted: self.visible && self.highlighted,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn on_pointer_down(&mut self, pointer: Position) {
        if !self.visible {
            return;
        }
        let now = self.clock.now_ms();
        self.drag.press(pointer, self.position, now);
        trace!(?pointer, "drag started");
    }

    pub fn on_pointer_move(&mut self, pointer: Position) {
        if let Some(next) = self.drag.drag_to(pointer, self.footprint, self.viewport) {
            self.set_position(next);
        }
    }

    /// End the drag. A tap opens a tip and returns the timer that closes it.
    pub fn on_pointer_up(&mut self) -> Option<Timer> {
        let now = self.clock.now_ms();
        let release = self.drag.release(now, self.config.tap_threshold_ms)?;
        trace!(duration_ms = release.duration_ms, tap = release.is_tap, "drag ended");
        release.is_tap.then(|| self.show_tip())
    }

    pub fn on_scroll(&mut self, scroll_offset: f32) {
        if !self.visible {
            self.missed_scroll = Some(scroll_offset);
            return;
        }
        if self.drag.is_dragging() {
            return;
        }
        self.apply_scroll(scroll_offset);
    }

    fn apply_scroll(&mut self, scroll_offset: f32) {
        let y = self.config.scroll.target_y(scroll_offset, self.viewport);
        let next = solver::clamp(self.position.with_y(y), self.footprint, self.viewport);
        if next != self.position {
            self.set_position(next);
        }
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.footprint = Footprint::for_viewport(viewport);
        let next = solver::clamp(self.position, self.footprint, viewport);
        debug!(?viewport, footprint = self.footprint.width, ?next, "viewport resized");
        self.set_position(next);
    }

    /// Rotate the greeting and pulse it; returns the timer that ends the pulse.
    pub fn on_tick(&mut self) -> Timer {
        self.rotation = messages::pick_rotation(&mut self.rng);
        self.highlighted = true;
        self.highlight_generation += 1;
        Timer::new(
            TimerKind::ClearHighlight { generation: self.highlight_generation },
            self.config.highlight_ms,
        )
    }

    pub fn on_hover_enter(&mut self) {
        if !self.visible {
            return;
        }
        self.bubble_visible = true;
        self.bubble_generation += 1;
    }

    pub fn on_hover_leave(&mut self) -> Option<Timer> {
        if !self.visible {
            return None;
        }
        Some(Timer::new(
            TimerKind::HideBubble { generation: self.bubble_generation },
            self.config.hover_hide_ms,
        ))
    }

    pub fn on_timer(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::ClearTip { generation } if generation == self.tip_generation => {
                self.tip = None;
                if self.bubble_generation == self.tip_bubble_generation {
                    self.bubble_visible = false;
                }
            }
            TimerKind::HideBubble { generation } if generation == self.bubble_generation => {
                self.bubble_visible = false;
            }
            TimerKind::ClearHighlight { generation } if generation == self.highlight_generation => {
                self.highlighted = false;
            }
            stale => trace!(?stale, "ignoring superseded timer"),
        }
    }

    /// Hide the widget and notify the host. An in-flight drag is dropped
    /// without the tap check.
    pub fn close(&mut self) {
        if self.drag.abandon() {
            debug!("drag abandoned by close");
        }
        self.visible = false;
        self.bubble_visible = false;
        self.persist_visibility();
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    /// Show the widget again, catching up with any scroll missed while hidden.
    pub fn restore(&mut self) {
        self.visible = true;
        self.persist_visibility();
        if let Some(offset) = self.missed_scroll.take() {
            self.apply_scroll(offset);
        }
    }

    fn show_tip(&mut self) -> Timer {
        let tip = messages::pick_tip(&mut self.rng);
        self.tip = Some(tip);
        self.bubble_visible = true;
        self.bubble_generation += 1;
        self.tip_generation += 1;
        self.tip_bubble_generation = self.bubble_generation;
        Timer::new(
            TimerKind::ClearTip { generation: self.tip_generation },
            self.config.tip_ms,
        )
    }

    fn set_position(&mut self, next: Position) {
        debug_assert!(solver::contains(next, self.footprint, self.viewport));
        self.position = next;
        if let Err(err) = store::save(&mut self.store, &self.config.keys.position, &next) {
            warn!(error = %err, "failed to persist widget position");
        }
    }

    fn persist_visibility(&mut self) {
        debug!(visible = self.visible, "visibility changed");
        if let Err(err) = store::save(&mut self.store, &self.config.keys.visible, &self.visible) {
            warn!(error = %err, "failed to persist widget visibility");
        }
    }
}
