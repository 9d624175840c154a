// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

/// Identifies one pointer (finger) for the lifetime of its contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// A single touch contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touch {
    /// Pointer that produced this contact.
    pub id: PointerId,
    /// Position in surface coordinates.
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub time: u64,
}

impl Touch {
    /// Creates a touch record.
    #[must_use]
    pub fn new(id: u32, position: Point, time: u64) -> Self {
        Self {
            id: PointerId(id),
            position,
            time,
        }
    }
}

/// What happened to the touches in a [`TouchBatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// One or more pointers landed.
    Down,
    /// One or more pointers moved.
    Move,
    /// One or more pointers lifted.
    Up,
    /// The platform cancelled the touch sequence.
    Cancel,
}

/// A batch of touch changes, carrying every contact still on the surface.
///
/// `touches` mirrors the "all touches" list of mobile gesture recognizers:
/// for [`TouchPhase::Down`] and [`TouchPhase::Move`] it includes the pointers
/// that changed; for [`TouchPhase::Up`] it holds the pointers that remain.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchBatch {
    /// Kind of change.
    pub phase: TouchPhase,
    /// Active contacts, in landing order.
    pub touches: SmallVec<[Touch; 2]>,
    /// Host timestamp in milliseconds.
    pub time: u64,
}

impl TouchBatch {
    /// Creates a batch from its contacts.
    #[must_use]
    pub fn new(phase: TouchPhase, touches: impl IntoIterator<Item = Touch>, time: u64) -> Self {
        Self {
            phase,
            touches: touches.into_iter().collect(),
            time,
        }
    }

    /// Convenience constructor for a single-finger batch.
    #[must_use]
    pub fn single(phase: TouchPhase, position: Point, time: u64) -> Self {
        Self::new(phase, [Touch::new(0, position, time)], time)
    }

    /// Number of pointers on the surface.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.touches.len()
    }

    /// Position of the first contact, if any.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.touches.first().map(|t| t.position)
    }

    /// Midpoint of the first two contacts, if there are at least two.
    #[must_use]
    pub fn midpoint(&self) -> Option<Point> {
        match self.touches.as_slice() {
            [a, b, ..] => Some(a.position.midpoint(b.position)),
            _ => None,
        }
    }
}
