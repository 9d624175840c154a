// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Derived state of a pan recognizer at one instant.
///
/// `translation` is measured from the point where the pan started (averaged
/// across pointers), `velocity` is in pixels per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanUpdate {
    /// Accumulated translation since the pan began.
    pub translation: Vec2,
    /// Current velocity in pixels per second.
    pub velocity: Vec2,
    /// Number of pointers contributing to the pan.
    pub pointers: usize,
    /// Host timestamp in milliseconds.
    pub time: u64,
}

impl PanUpdate {
    /// Creates a pan record.
    #[must_use]
    pub fn new(translation: Vec2, velocity: Vec2, pointers: usize, time: u64) -> Self {
        Self {
            translation,
            velocity,
            pointers,
            time,
        }
    }

    /// A one-finger pan record with zero velocity.
    #[must_use]
    pub fn at(translation: Vec2, time: u64) -> Self {
        Self::new(translation, Vec2::ZERO, 1, time)
    }

    /// Returns a copy with the given velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Returns a copy with the given pointer count.
    #[must_use]
    pub fn with_pointers(mut self, pointers: usize) -> Self {
        self.pointers = pointers;
        self
    }
}

/// Derived state of a pinch recognizer at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Scale factor relative to the finger distance at pinch start.
    pub scale: f64,
    /// Midpoint of the two pointers in surface coordinates.
    pub focal: Point,
    /// Number of pointers on the surface.
    pub pointers: usize,
    /// Host timestamp in milliseconds.
    pub time: u64,
}

impl PinchUpdate {
    /// Creates a pinch record.
    #[must_use]
    pub fn new(scale: f64, focal: Point, pointers: usize, time: u64) -> Self {
        Self {
            scale,
            focal,
            pointers,
            time,
        }
    }
}
