// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;
use crate::motion::Sample;

/// Give up on springs that are still moving after this long.
const MAX_SPRING_MS: u64 = 10_000;

/// Physical parameters of a [`Spring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass attached to the spring.
    pub mass: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Spring stiffness.
    pub stiffness: f64,
    /// The spring rests once it is closer than this to its target...
    pub rest_displacement: f64,
    /// ...and slower than this, in units per second.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Mass 1, damping 10, stiffness 100.
    pub const DEFAULT: Self = Self::new(1.0, 10.0, 100.0);

    /// Creates a config with the default rest thresholds.
    #[must_use]
    pub const fn new(mass: f64, damping: f64, stiffness: f64) -> Self {
        Self {
            mass,
            damping,
            stiffness,
            rest_displacement: 0.01,
            rest_speed: 2.0,
        }
    }

    /// Damping ratio `ζ`; `< 1` oscillates, `1` is critical, `> 1` is overdamped.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn is_valid(&self) -> bool {
        self.mass > 0.0 && self.stiffness > 0.0 && self.damping >= 0.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A damped harmonic oscillator pulling a value towards `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// Start value.
    pub from: f64,
    /// Target value.
    pub to: f64,
    /// Initial velocity in units per second.
    pub velocity: f64,
    /// Physical parameters.
    pub config: SpringConfig,
}

impl Spring {
    /// Creates a spring starting at rest.
    #[must_use]
    pub fn new(from: f64, to: f64, config: SpringConfig) -> Self {
        Self {
            from,
            to,
            velocity: 0.0,
            config,
        }
    }

    /// Returns a copy with an initial velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    /// Displacement from the target and its rate of change at `t` seconds.
    fn solve(&self, t: f64) -> (f64, f64) {
        let SpringConfig {
            mass,
            damping,
            stiffness,
            ..
        } = self.config;
        let y0 = self.from - self.to;
        let v0 = self.velocity;
        let omega0 = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());

        if (zeta - 1.0).abs() < 1e-9 {
            let b = v0 + omega0 * y0;
            let envelope = (-omega0 * t).exp();
            (envelope * (y0 + b * t), envelope * (v0 - omega0 * b * t))
        } else if zeta < 1.0 {
            let a = zeta * omega0;
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + a * y0) / omega1;
            let envelope = (-a * t).exp();
            let (sin, cos) = ((omega1 * t).sin(), (omega1 * t).cos());
            let y = envelope * (y0 * cos + b * sin);
            let dy = envelope * (v0 * cos - (a * b + omega1 * y0) * sin);
            (y, dy)
        } else {
            let root = omega0 * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega0 + root;
            let r2 = -zeta * omega0 - root;
            let c1 = (v0 - r2 * y0) / (r1 - r2);
            let c2 = y0 - c1;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }

    /// Samples the spring `elapsed_ms` after it started.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u64) -> Sample {
        if !self.config.is_valid() || elapsed_ms >= MAX_SPRING_MS {
            return Sample::rest(self.to);
        }
        let (y, dy) = self.solve(elapsed_ms as f64 / 1000.0);
        if y.abs() < self.config.rest_displacement && dy.abs() < self.config.rest_speed {
            return Sample::rest(self.to);
        }
        Sample {
            value: self.to + y,
            velocity: dy,
            done: false,
        }
    }
}
