// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::easing::Easing;
use crate::motion::Sample;

/// Duration used by timing animations when the caller has no preference.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Time-based interpolation from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Curve applied to normalized time.
    pub easing: Easing,
}

impl Timing {
    /// Creates a timing animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    /// A [`DEFAULT_DURATION_MS`] in-out quadratic animation.
    #[must_use]
    pub fn ease(from: f64, to: f64) -> Self {
        Self::new(from, to, DEFAULT_DURATION_MS, Easing::default())
    }

    /// Samples the animation `elapsed_ms` after it started.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u64) -> Sample {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return Sample::rest(self.to);
        }
        let (elapsed, duration) = (elapsed_ms as f64, self.duration_ms as f64);
        let t = elapsed / duration;
        let span = self.to - self.from;
        Sample {
            value: self.from + span * self.easing.apply(t),
            velocity: span * self.easing.slope(t) * 1000.0 / duration,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Easing, Timing};

    #[test]
    fn linear_midpoint_and_end() {
        let t = Timing::new(10.0, 20.0, 100, Easing::Linear);
        let mid = t.sample(50);
        assert_eq!(mid.value, 15.0);
        assert!(!mid.done);
        // 10px over 100ms is 100px/s.
        assert!((mid.velocity - 100.0).abs() < 1e-9);

        let end = t.sample(100);
        assert_eq!(end.value, 20.0);
        assert!(end.done);
        assert_eq!(t.sample(5_000).value, 20.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let t = Timing::new(0.0, 1.0, 0, Easing::InOutQuad);
        let s = t.sample(0);
        assert!(s.done);
        assert_eq!(s.value, 1.0);
    }

    #[test]
    fn start_value_at_time_zero() {
        let t = Timing::ease(160.0, 150.0);
        assert_eq!(t.sample(0).value, 160.0);
        assert_eq!(t.duration_ms, 300);
    }
}
