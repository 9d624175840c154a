// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::{debug, trace};
use tactile_gesture::gate::{ActivationGate, ActivationRule, Axis, Direction};
use tactile_gesture::{ConfigError, PanUpdate, TouchBatch};
use tactile_motion::{Easing, Settled, Spring, SpringConfig, Timeline, Timing};

/// Spring used to bring the sheet in.
pub const SHOW_SPRING: SpringConfig = SpringConfig::new(0.5, 16.0, 180.0);

/// Tunables for a [`DraggableSheet`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetConfig {
    /// Height of the sheet.
    pub box_height: f64,
    /// Drag distance, as a fraction of the height, past which a release collapses.
    pub collapse_ratio: f64,
    /// Duration of the collapse animation.
    pub collapse_duration_ms: u64,
    /// Duration of the animation back to fully shown.
    pub back_duration_ms: u64,
    /// Spring of [`DraggableSheet::show`].
    pub show_spring: SpringConfig,
    /// Downward travel that claims a drag.
    pub activation_travel: f64,
    /// The inner list counts as scrolled to the top below this offset.
    pub top_tolerance: f64,
}

impl SheetConfig {
    /// Default tunables for a zero-height sheet.
    pub const DEFAULT: Self = Self {
        box_height: 0.0,
        collapse_ratio: 0.5,
        collapse_duration_ms: 150,
        back_duration_ms: 120,
        show_spring: SHOW_SPRING,
        activation_travel: 3.0,
        top_tolerance: 1.0,
    };

    /// Default tunables for a sheet `box_height` tall.
    #[must_use]
    pub fn new(box_height: f64) -> Self {
        Self {
            box_height,
            ..Self::DEFAULT
        }
    }

    /// Drag distance past which a release collapses the sheet.
    #[must_use]
    pub fn collapse_threshold(&self) -> f64 {
        self.box_height * self.collapse_ratio
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::ensure_within("box_height", self.box_height, 0.0, f64::MAX)?;
        ConfigError::ensure_positive("collapse_ratio", self.collapse_ratio)?;
        ConfigError::ensure_within("collapse_ratio", self.collapse_ratio, 0.0, 1.0)?;
        ConfigError::ensure_within("activation_travel", self.activation_travel, 0.0, f64::MAX)?;
        ConfigError::ensure_within("top_tolerance", self.top_tolerance, 0.0, f64::MAX)?;
        ConfigError::ensure_positive("show_spring.mass", self.show_spring.mass)?;
        ConfigError::ensure_positive("show_spring.stiffness", self.show_spring.stiffness)?;
        Ok(())
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Where a [`DraggableSheet`] is in its life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetPhase {
    /// Shown (or showing) and not being dragged.
    Idle,
    /// Following a drag.
    Dragging,
    /// Animating back to fully shown after a release.
    Returning,
    /// Animating out.
    Collapsing,
    /// Fully collapsed; [`SheetEvent::Closed`] has been queued.
    Closed,
}

/// Notifications a [`DraggableSheet`] queues for its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetEvent {
    /// The collapse animation finished; the host should hide the sheet.
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Track {
    Enter,
    Drag,
}

/// A bottom sheet hosting a scrolling list that can be dragged down to close.
///
/// The sheet's vertical offset combines two values: the enter offset, which
/// springs from the sheet height to zero on [`show`](Self::show), and the
/// drag offset, which follows the finger. The drag only moves the sheet by
/// the part not consumed by scrolling the inner list.
///
/// ```
/// use kurbo::{Point, Vec2};
/// use tactile_gesture::{PanUpdate, TouchBatch, TouchPhase};
/// use tactile_scroll::{DraggableSheet, SheetConfig, SheetEvent};
///
/// let mut sheet = DraggableSheet::new(SheetConfig::new(400.0));
/// sheet.show(0);
/// sheet.tick(1_000);
/// assert_eq!(sheet.offset(), 0.0);
///
/// sheet.touches_down(&TouchBatch::single(TouchPhase::Down, Point::new(50.0, 10.0), 1_100));
/// assert!(sheet.touches_move(&TouchBatch::single(TouchPhase::Move, Point::new(50.0, 20.0), 1_116)));
/// sheet.pan_update(&PanUpdate::at(Vec2::new(0.0, 250.0), 1_132));
/// assert_eq!(sheet.offset(), 250.0);
///
/// sheet.pan_end(&PanUpdate::at(Vec2::new(0.0, 250.0), 1_148));
/// sheet.tick(1_400);
/// assert_eq!(sheet.drain_events().collect::<Vec<_>>(), [SheetEvent::Closed]);
/// ```
#[derive(Clone, Debug)]
pub struct DraggableSheet {
    config: SheetConfig,
    enter_offset: f64,
    drag_offset: f64,
    scroll_offset: f64,
    phase: SheetPhase,
    gate: ActivationGate,
    timeline: Timeline<Track>,
    queue: VecDeque<Settled<Track>>,
    events: Vec<SheetEvent>,
    now: u64,
}

impl DraggableSheet {
    /// Creates a sheet parked below its container; call [`show`](Self::show) to bring it in.
    #[must_use]
    pub fn new(config: SheetConfig) -> Self {
        let rule = ActivationRule::new(
            Axis::Vertical,
            config.activation_travel,
            config.activation_travel,
        )
        .with_direction(Direction::Positive);
        Self {
            config,
            enter_offset: config.box_height,
            drag_offset: 0.0,
            scroll_offset: 0.0,
            phase: SheetPhase::Idle,
            gate: ActivationGate::new(rule),
            timeline: Timeline::new(),
            queue: VecDeque::new(),
            events: Vec::new(),
            now: 0,
        }
    }

    /// Creates a sheet after validating `config`.
    pub fn try_new(config: SheetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Current life-cycle phase.
    #[must_use]
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// Vertical offset to render the sheet at; `0` is fully shown.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.enter_offset + (self.drag_offset - self.scroll_offset).max(0.0)
    }

    /// Returns `true` while the inner list is scrolled to the top.
    #[must_use]
    pub fn is_list_at_top(&self) -> bool {
        self.scroll_offset < self.config.top_tolerance
    }

    /// Records the inner list's scroll offset.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// Springs the sheet into view.
    ///
    /// A closed sheet is parked below its container again first.
    pub fn show(&mut self, now: u64) {
        self.now = self.now.max(now);
        if self.phase == SheetPhase::Closed {
            self.timeline.clear();
            self.queue.clear();
            self.drag_offset = 0.0;
            self.enter_offset = self.config.box_height;
            self.phase = SheetPhase::Idle;
        }
        let spring = Spring::new(self.enter_offset, 0.0, self.config.show_spring);
        self.timeline.start(Track::Enter, spring.into(), self.now);
    }

    /// Collapses the sheet, queueing [`SheetEvent::Closed`] when done.
    pub fn close(&mut self, now: u64) {
        self.now = self.now.max(now);
        if matches!(self.phase, SheetPhase::Collapsing | SheetPhase::Closed) {
            return;
        }
        self.run(true);
    }

    /// Starts tracking a touch; stops the enter spring where it is.
    pub fn touches_down(&mut self, batch: &TouchBatch) {
        self.now = self.now.max(batch.time);
        if let Some(y) = self.timeline.cancel(Track::Enter) {
            self.enter_offset = y;
        }
        if let Some(pos) = batch.primary() {
            self.gate.touch_down(pos);
        }
    }

    /// Feeds a touch move to the activation gate.
    ///
    /// A drag is claimed once it moves down past the activation travel, stays
    /// within it horizontally, and the inner list is at the top. Returns
    /// `true` on the claiming move.
    pub fn touches_move(&mut self, batch: &TouchBatch) -> bool {
        self.now = self.now.max(batch.time);
        let Some(pos) = batch.primary() else {
            return false;
        };
        if !self.is_list_at_top() {
            return false;
        }
        let granted = self.gate.touch_move(pos);
        if granted {
            trace!("sheet drag granted");
        }
        granted
    }

    /// Ends touch tracking.
    pub fn touches_up(&mut self) {
        self.gate.release();
    }

    /// Ends touch tracking after the platform cancelled the touch.
    pub fn touches_cancel(&mut self) {
        self.gate.release();
    }

    /// Follows the drag.
    pub fn pan_update(&mut self, update: &PanUpdate) {
        self.now = self.now.max(update.time);
        if matches!(self.phase, SheetPhase::Collapsing | SheetPhase::Closed) {
            return;
        }
        self.timeline.cancel(Track::Drag);
        self.phase = SheetPhase::Dragging;
        self.drag_offset = update.translation.y;
    }

    /// Releases the drag, collapsing the sheet or animating it back.
    pub fn pan_end(&mut self, update: &PanUpdate) {
        self.now = self.now.max(update.time);
        if self.phase != SheetPhase::Dragging {
            return;
        }
        let pulled = (update.translation.y - self.scroll_offset).max(0.0);
        let collapse = pulled > self.config.collapse_threshold()
            || (update.velocity.y > self.config.box_height && self.is_list_at_top());
        debug!(
            "sheet release pulled={pulled} v={} collapse={collapse}",
            update.velocity.y
        );
        self.run(collapse);
    }

    /// Advances running animations to host time `now`.
    pub fn tick(&mut self, now: u64) {
        self.now = self.now.max(now);
        let (enter, drag) = (&mut self.enter_offset, &mut self.drag_offset);
        let settled = self.timeline.advance(self.now, |track, value| match track {
            Track::Enter => *enter = value,
            Track::Drag => *drag = value,
        });
        self.queue.extend(settled);
        while let Some(settled) = self.queue.pop_front() {
            self.on_settled(settled);
        }
    }

    /// Takes the queued events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SheetEvent> + '_ {
        self.events.drain(..)
    }

    fn run(&mut self, collapse: bool) {
        let (to, duration) = if collapse {
            (self.config.box_height, self.config.collapse_duration_ms)
        } else {
            (0.0, self.config.back_duration_ms)
        };
        self.phase = if collapse {
            SheetPhase::Collapsing
        } else {
            SheetPhase::Returning
        };
        let timing = Timing::new(self.drag_offset, to, duration, Easing::InOutQuad);
        self.timeline.start(Track::Drag, timing.into(), self.now);
    }

    fn on_settled(&mut self, settled: Settled<Track>) {
        if settled.key != Track::Drag {
            return;
        }
        match self.phase {
            SheetPhase::Collapsing => {
                debug!("sheet closed");
                self.phase = SheetPhase::Closed;
                self.events.push(SheetEvent::Closed);
            }
            SheetPhase::Returning => self.phase = SheetPhase::Idle,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use tactile_gesture::{TouchBatch, TouchPhase};

    use super::{DraggableSheet, SheetConfig};

    fn at(x: f64, y: f64, time: u64) -> TouchBatch {
        TouchBatch::single(TouchPhase::Move, Point::new(x, y), time)
    }

    #[test]
    fn activation_needs_downward_drag_at_top() {
        let mut sheet = DraggableSheet::new(SheetConfig::new(400.0));

        sheet.touches_down(&at(100.0, 100.0, 0));
        assert!(!sheet.touches_move(&at(100.0, 90.0, 8)), "upward drag scrolls the list");
        assert!(!sheet.touches_move(&at(104.0, 105.0, 16)), "too much sideways travel");
        sheet.touches_up();

        sheet.set_scroll_offset(40.0);
        sheet.touches_down(&at(100.0, 100.0, 100));
        assert!(!sheet.touches_move(&at(100.0, 120.0, 116)), "list is not at the top");
        sheet.touches_up();

        sheet.set_scroll_offset(0.5);
        sheet.touches_down(&at(100.0, 100.0, 200));
        assert!(sheet.touches_move(&at(101.0, 104.0, 216)));
    }

    #[test]
    fn touch_down_freezes_the_enter_spring() {
        let mut sheet = DraggableSheet::new(SheetConfig::new(400.0));
        sheet.show(0);
        sheet.tick(50);
        let frozen = sheet.offset();
        assert!(frozen > 0.0 && frozen < 400.0, "mid-flight: {frozen}");
        sheet.touches_down(&at(0.0, 0.0, 60));
        sheet.tick(2_000);
        assert_eq!(sheet.offset(), frozen);
    }
}
