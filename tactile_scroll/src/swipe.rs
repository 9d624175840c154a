// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-to-reveal rows.
//!
//! A [`SwipeRow`] slides its content left to uncover a strip of actions of
//! width `W` laid out underneath. Dragging follows the finger between `-W`
//! and `0` and rubber-bands past either end. Releasing opens the row when the
//! drag was fast or long enough, and closes it otherwise.
//!
//! ```
//! use kurbo::Vec2;
//! use tactile_gesture::PanUpdate;
//! use tactile_scroll::{SwipeConfig, SwipeRow};
//!
//! let mut row = SwipeRow::new(SwipeConfig::new(160.0));
//! row.pan_begin(0);
//! row.pan_update(&PanUpdate::at(Vec2::new(-100.0, 0.0), 16));
//! row.pan_end(&PanUpdate::at(Vec2::new(-100.0, 0.0), 32));
//! row.tick(2_000);
//!
//! assert!(row.is_open());
//! assert_eq!(row.offset(), -160.0);
//! // The first action sits flush with the right edge once fully revealed.
//! assert_eq!(row.action_offset(80.0), 0.0);
//! ```

use alloc::vec::Vec;

use log::{debug, trace};
use tactile_gesture::gate::{ActivationGate, ActivationRule, Axis};
use tactile_gesture::{ConfigError, PanUpdate, TouchBatch};
use tactile_motion::{Spring, SpringConfig, Timeline, interpolate};

/// Spring used to open and close a row.
pub const ROW_SPRING: SpringConfig = SpringConfig::new(0.5, 20.0, 200.0);

/// Tunables for a [`SwipeRow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Total width of the actions underneath the row.
    pub underneath_width: f64,
    /// Horizontal travel that claims a drag.
    pub activation_travel: f64,
    /// Drag distance past either end over which the rubber band stretches.
    pub overdrag: f64,
    /// Furthest the row moves past either end.
    pub overdrag_limit: f64,
    /// Open / close spring.
    pub spring: SpringConfig,
}

impl SwipeConfig {
    /// Default tunables with no actions.
    pub const DEFAULT: Self = Self {
        underneath_width: 0.0,
        activation_travel: 5.0,
        overdrag: 200.0,
        overdrag_limit: 20.0,
        spring: ROW_SPRING,
    };

    /// Default tunables for actions `underneath_width` wide.
    #[must_use]
    pub fn new(underneath_width: f64) -> Self {
        Self {
            underneath_width,
            ..Self::DEFAULT
        }
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::ensure_within("underneath_width", self.underneath_width, 0.0, f64::MAX)?;
        ConfigError::ensure_within("activation_travel", self.activation_travel, 0.0, f64::MAX)?;
        ConfigError::ensure_positive("overdrag", self.overdrag)?;
        ConfigError::ensure_within("overdrag_limit", self.overdrag_limit, 0.0, self.overdrag)?;
        ConfigError::ensure_positive("spring.mass", self.spring.mass)?;
        ConfigError::ensure_positive("spring.stiffness", self.spring.stiffness)?;
        Ok(())
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Notifications a [`SwipeRow`] queues for its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeEvent {
    /// A drag was claimed. Other open rows should close.
    Activated,
    /// The row came to rest open.
    Opened,
    /// The row came to rest closed.
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Offset;

/// A list row that reveals actions when swiped left.
#[derive(Clone, Debug)]
pub struct SwipeRow {
    config: SwipeConfig,
    offset: f64,
    saved: f64,
    open: bool,
    activation_pending: bool,
    gate: ActivationGate,
    timeline: Timeline<Offset>,
    events: Vec<SwipeEvent>,
    now: u64,
}

impl SwipeRow {
    /// Creates a closed row.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            saved: 0.0,
            open: false,
            activation_pending: false,
            gate: ActivationGate::new(ActivationRule::new(
                Axis::Horizontal,
                config.activation_travel,
                f64::INFINITY,
            )),
            timeline: Timeline::new(),
            events: Vec::new(),
            now: 0,
        }
    }

    /// Creates a row after validating `config`.
    pub fn try_new(config: SwipeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Current horizontal offset of the row content.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns `true` if the row is open or opening.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` while the open / close spring runs.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Offset of the leftmost point the row may rest at.
    #[must_use]
    pub fn stop_edge(&self) -> f64 {
        -self.config.underneath_width
    }

    /// Horizontal offset of an underneath action `action_width` wide.
    ///
    /// Actions slide in from the right: fully hidden (`action_width`) while
    /// the row is closed and flush (`0`) once the row reaches [`Self::stop_edge`].
    #[must_use]
    pub fn action_offset(&self, action_width: f64) -> f64 {
        interpolate(self.offset, &[self.stop_edge(), 0.0], &[0.0, action_width])
    }

    /// Starts tracking a touch for activation.
    pub fn touches_down(&mut self, batch: &TouchBatch) {
        self.now = self.now.max(batch.time);
        if let Some(pos) = batch.primary() {
            self.gate.touch_down(pos);
        }
    }

    /// Feeds a touch move to the activation gate.
    ///
    /// Returns `true` on the move that claims the drag and queues
    /// [`SwipeEvent::Activated`].
    pub fn touches_move(&mut self, batch: &TouchBatch) -> bool {
        self.now = self.now.max(batch.time);
        let Some(pos) = batch.primary() else {
            return false;
        };
        if !self.gate.touch_move(pos) {
            return false;
        }
        trace!("swipe row activated");
        self.events.push(SwipeEvent::Activated);
        self.activation_pending = true;
        true
    }

    /// Returns `true` once after each activation.
    ///
    /// [`SwipeRegistry::tick`](crate::SwipeRegistry::tick) consumes this to
    /// close the other rows.
    pub fn take_activation(&mut self) -> bool {
        core::mem::take(&mut self.activation_pending)
    }

    /// Ends touch tracking.
    pub fn touches_up(&mut self) {
        self.gate.release();
    }

    /// Ends touch tracking after the platform cancelled the touch.
    pub fn touches_cancel(&mut self) {
        self.gate.release();
    }

    /// Stops a running spring and drags from where it was.
    pub fn pan_begin(&mut self, time: u64) {
        self.now = self.now.max(time);
        if let Some(x) = self.timeline.cancel(Offset) {
            self.offset = x;
            self.saved = x;
        }
    }

    /// Moves the row with the drag through the rubber band.
    pub fn pan_update(&mut self, update: &PanUpdate) {
        self.now = self.now.max(update.time);
        let w = self.config.underneath_width;
        let over = self.config.overdrag;
        let limit = self.config.overdrag_limit;
        self.offset = interpolate(
            self.saved + update.translation.x,
            &[-(w + over), -w, 0.0, over * 0.5],
            &[-(w + limit), -w, 0.0, limit],
        );
    }

    /// Releases the drag, opening or closing the row.
    pub fn pan_end(&mut self, update: &PanUpdate) {
        self.now = self.now.max(update.time);
        let w = self.config.underneath_width;
        let open = update.velocity.x < -w || update.translation.x < -w * 0.5;
        debug!(
            "swipe release v={} t={} open={open}",
            update.velocity.x, update.translation.x
        );
        self.run(open);
    }

    /// Springs the row open.
    pub fn open(&mut self) {
        self.run(true);
    }

    /// Springs the row closed.
    pub fn close(&mut self) {
        self.run(false);
    }

    /// Advances the spring to host time `now`.
    pub fn tick(&mut self, now: u64) {
        self.now = self.now.max(now);
        let offset = &mut self.offset;
        let settled = self.timeline.advance(self.now, |_, x| *offset = x);
        if !settled.is_empty() {
            self.events.push(if self.open {
                SwipeEvent::Opened
            } else {
                SwipeEvent::Closed
            });
        }
    }

    /// Takes the queued events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SwipeEvent> + '_ {
        self.events.drain(..)
    }

    fn run(&mut self, open: bool) {
        let to = if open { self.stop_edge() } else { 0.0 };
        self.saved = to;
        self.open = open;
        let spring = Spring::new(self.offset, to, self.config.spring);
        self.timeline.start(Offset, spring.into(), self.now);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use tactile_gesture::PanUpdate;

    use super::{SwipeConfig, SwipeRow};

    fn dragged(dx: f64) -> f64 {
        let mut row = SwipeRow::new(SwipeConfig::new(160.0));
        row.pan_begin(0);
        row.pan_update(&PanUpdate::at(Vec2::new(dx, 0.0), 16));
        row.offset()
    }

    #[test]
    fn rubber_band_limits_overdrag() {
        assert_eq!(dragged(-80.0), -80.0);
        assert_eq!(dragged(-160.0), -160.0);
        assert_eq!(dragged(-260.0), -170.0);
        assert_eq!(dragged(-1_000.0), -180.0);
        assert_eq!(dragged(50.0), 10.0);
        assert_eq!(dragged(500.0), 20.0);
    }

    #[test]
    fn action_offset_tracks_reveal() {
        let mut row = SwipeRow::new(SwipeConfig::new(160.0));
        assert_eq!(row.action_offset(80.0), 80.0);
        row.pan_begin(0);
        row.pan_update(&PanUpdate::at(Vec2::new(-80.0, 0.0), 16));
        assert_eq!(row.action_offset(80.0), 40.0);
        row.pan_update(&PanUpdate::at(Vec2::new(-400.0, 0.0), 32));
        assert_eq!(row.action_offset(80.0), 0.0);
    }

    #[test]
    fn overdrag_limit_cannot_exceed_overdrag() {
        let cfg = SwipeConfig {
            overdrag_limit: 300.0,
            ..SwipeConfig::new(160.0)
        };
        assert!(cfg.validate().is_err());
        assert!(SwipeConfig::new(160.0).validate().is_ok());
    }
}
