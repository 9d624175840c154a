// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::decay::Decay;
use crate::spring::Spring;
use crate::timing::Timing;

/// Value of an animation at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Current value.
    pub value: f64,
    /// Current velocity in units per second.
    pub velocity: f64,
    /// `true` once the animation has come to rest.
    pub done: bool,
}

impl Sample {
    /// A finished sample resting at `value`.
    #[must_use]
    pub fn rest(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            done: true,
        }
    }
}

/// Any animation a [`crate::Timeline`] can run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Time-based interpolation.
    Timing(Timing),
    /// Velocity decay.
    Decay(Decay),
    /// Spring physics.
    Spring(Spring),
}

impl Motion {
    /// Samples the motion `elapsed_ms` after it started.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u64) -> Sample {
        match self {
            Self::Timing(t) => t.sample(elapsed_ms),
            Self::Decay(d) => d.sample(elapsed_ms),
            Self::Spring(s) => s.sample(elapsed_ms),
        }
    }

    /// Start value.
    #[must_use]
    pub fn start_value(&self) -> f64 {
        match self {
            Self::Timing(t) => t.from,
            Self::Decay(d) => d.from,
            Self::Spring(s) => s.from,
        }
    }

    /// Value the motion comes to rest at.
    #[must_use]
    pub fn target(&self) -> f64 {
        match self {
            Self::Timing(t) => t.to,
            Self::Decay(d) => d.rest_value(),
            Self::Spring(s) => s.to,
        }
    }
}

impl From<Timing> for Motion {
    fn from(t: Timing) -> Self {
        Self::Timing(t)
    }
}

impl From<Decay> for Motion {
    fn from(d: Decay) -> Self {
        Self::Decay(d)
    }
}

impl From<Spring> for Motion {
    fn from(s: Spring) -> Self {
        Self::Spring(s)
    }
}
