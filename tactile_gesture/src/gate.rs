// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Manual activation gate: claim a gesture only once movement resolves.
//!
//! ## Usage
//!
//! 1) Call [`ActivationGate::touch_down`] with the landing position.
//! 2) On each move, call [`ActivationGate::touch_move`]; it returns `true`
//!    exactly once, on the move that satisfies the [`ActivationRule`].
//! 3) Call [`ActivationGate::release`] on touch up or cancel.
//!
//! The rule compares the total offset from the landing position, not
//! per-event deltas, so slow drags activate as reliably as fast ones.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tactile_gesture::gate::{ActivationGate, ActivationRule, Axis, Direction};
//!
//! // Only downward drags that stay within 3px horizontally.
//! let rule = ActivationRule::new(Axis::Vertical, 3.0, 3.0).with_direction(Direction::Positive);
//! let mut gate = ActivationGate::new(rule);
//!
//! gate.touch_down(Point::new(0.0, 0.0));
//! assert!(!gate.touch_move(Point::new(0.0, -10.0)));
//! assert!(gate.touch_move(Point::new(1.0, 4.0)));
//! assert_eq!(gate.total_offset(Point::new(1.0, 4.0)).unwrap().y, 4.0);
//! ```

use kurbo::{Point, Vec2};

/// Primary axis of a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// X is the primary axis.
    Horizontal,
    /// Y is the primary axis.
    Vertical,
}

impl Axis {
    /// Splits `v` into `(primary, cross)` components for this axis.
    #[must_use]
    pub fn split(self, v: Vec2) -> (f64, f64) {
        match self {
            Self::Horizontal => (v.x, v.y),
            Self::Vertical => (v.y, v.x),
        }
    }
}

/// Which signs of primary-axis travel may activate a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Either direction.
    #[default]
    Either,
    /// Only positive travel (right / down).
    Positive,
    /// Only negative travel (left / up).
    Negative,
}

/// Thresholds a drag has to satisfy before the gate claims it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationRule {
    /// Primary axis.
    pub axis: Axis,
    /// Primary travel must exceed this (strictly).
    pub min_travel: f64,
    /// Cross-axis travel must stay below this (strictly).
    pub max_cross_travel: f64,
    /// Allowed direction of primary travel.
    pub direction: Direction,
}

impl ActivationRule {
    /// Creates a rule accepting either direction along `axis`.
    #[must_use]
    pub fn new(axis: Axis, min_travel: f64, max_cross_travel: f64) -> Self {
        Self {
            axis,
            min_travel,
            max_cross_travel,
            direction: Direction::Either,
        }
    }

    /// Returns a copy restricted to `direction`.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns `true` if a total offset `offset` satisfies this rule.
    #[must_use]
    pub fn accepts(&self, offset: Vec2) -> bool {
        let (primary, cross) = self.axis.split(offset);
        let direction_ok = match self.direction {
            Direction::Either => true,
            Direction::Positive => primary > 0.0,
            Direction::Negative => primary < 0.0,
        };
        direction_ok && primary.abs() > self.min_travel && cross.abs() < self.max_cross_travel
    }
}

/// Tracks one touch sequence and decides when it activates.
#[derive(Clone, Copy, Debug)]
pub struct ActivationGate {
    rule: ActivationRule,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    active: bool,
}

impl ActivationGate {
    /// Creates an idle gate.
    #[must_use]
    pub fn new(rule: ActivationRule) -> Self {
        Self {
            rule,
            start_pos: None,
            last_pos: None,
            active: false,
        }
    }

    /// Returns the rule this gate applies.
    #[must_use]
    pub fn rule(&self) -> ActivationRule {
        self.rule
    }

    /// Starts tracking a new touch sequence from `pos`.
    ///
    /// Any previous sequence is forgotten, including its activation.
    pub fn touch_down(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.active = false;
    }

    /// Records a move; returns `true` on the move that activates the gate.
    ///
    /// Moves without a preceding [`ActivationGate::touch_down`] are ignored.
    pub fn touch_move(&mut self, pos: Point) -> bool {
        let Some(start) = self.start_pos else {
            return false;
        };
        self.last_pos = Some(pos);
        if self.active {
            return false;
        }
        if self.rule.accepts(pos - start) {
            self.active = true;
            return true;
        }
        false
    }

    /// Total offset of `current_pos` from the landing position.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Last position seen by the gate.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }

    /// Ends the sequence (touch up or cancel).
    pub fn release(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.active = false;
    }

    /// Returns `true` while a sequence is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the current sequence has activated.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
