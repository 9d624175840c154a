// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;
use crate::motion::Sample;

/// Per-millisecond velocity retention used by fling decays.
pub const DEFAULT_DECELERATION: f64 = 0.998;

/// Below this speed (units per second) a decay is at rest.
const REST_SPEED: f64 = 1.0;

/// Inertial deceleration from an initial velocity.
///
/// Velocity decays geometrically: after `t` milliseconds it is
/// `velocity * deceleration^t`. Position is the closed-form integral of that
/// curve. When `clamp` is set, the decay stops as soon as it reaches the bound
/// it is heading towards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decay {
    /// Start value.
    pub from: f64,
    /// Initial velocity in units per second.
    pub velocity: f64,
    /// Fraction of velocity retained per millisecond, in `(0, 1)`.
    pub deceleration: f64,
    /// Optional `(min, max)` interval the value may not leave.
    pub clamp: Option<(f64, f64)>,
}

impl Decay {
    /// Creates an unclamped decay with [`DEFAULT_DECELERATION`].
    #[must_use]
    pub fn new(from: f64, velocity: f64) -> Self {
        Self {
            from,
            velocity,
            deceleration: DEFAULT_DECELERATION,
            clamp: None,
        }
    }

    /// Returns a copy clamped to `[min, max]`.
    ///
    /// Reversed bounds are normalized.
    #[must_use]
    pub fn with_clamp(mut self, min: f64, max: f64) -> Self {
        self.clamp = Some(if min <= max { (min, max) } else { (max, min) });
        self
    }

    /// Returns a copy with a different deceleration.
    #[must_use]
    pub fn with_deceleration(mut self, deceleration: f64) -> Self {
        self.deceleration = deceleration;
        self
    }

    fn is_inert(&self) -> bool {
        self.velocity.abs() < REST_SPEED || !(self.deceleration > 0.0 && self.deceleration < 1.0)
    }

    /// Milliseconds until the velocity falls below the rest speed.
    fn stop_time(&self) -> f64 {
        if self.is_inert() {
            return 0.0;
        }
        (REST_SPEED / self.velocity.abs()).ln() / self.deceleration.ln()
    }

    fn unclamped_at(&self, t: f64) -> (f64, f64) {
        let d = self.deceleration;
        let kv = d.powf(t);
        let travel = self.velocity / 1000.0 * d * (1.0 - kv) / (1.0 - d);
        (self.from + travel, self.velocity * kv)
    }

    /// Value the decay comes to rest at.
    #[must_use]
    pub fn rest_value(&self) -> f64 {
        if self.is_inert() {
            return self.from;
        }
        let (value, _) = self.unclamped_at(self.stop_time());
        self.apply_clamp(value).0
    }

    /// Clamps `value` if it crossed the bound in the direction of travel.
    fn apply_clamp(&self, value: f64) -> (f64, bool) {
        match self.clamp {
            Some((min, _)) if self.velocity < 0.0 && value <= min => (min, true),
            Some((_, max)) if self.velocity > 0.0 && value >= max => (max, true),
            _ => (value, false),
        }
    }

    /// Samples the decay `elapsed_ms` after it started.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u64) -> Sample {
        if self.is_inert() {
            return Sample::rest(self.from);
        }
        let stop = self.stop_time();
        let t = (elapsed_ms as f64).min(stop);
        let (value, velocity) = self.unclamped_at(t);
        let (value, hit_bound) = self.apply_clamp(value);
        if hit_bound || t >= stop {
            return Sample::rest(value);
        }
        Sample {
            value,
            velocity,
            done: false,
        }
    }
}
