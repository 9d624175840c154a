// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Motion: headless animation primitives.
//!
//! This crate models the animations a touch engine starts when a gesture is
//! released, without owning a render loop:
//!
//! - [`Timing`]: time-based interpolation with an [`Easing`] curve.
//! - [`Decay`]: velocity-driven deceleration with optional clamping.
//! - [`Spring`]: a damped harmonic oscillator solved in closed form.
//! - [`Timeline`]: a set of running animations keyed by a caller-defined
//!   channel type, advanced by the host clock.
//! - [`interpolate`]: clamped piecewise-linear mapping, for values derived
//!   from gesture travel (fades, rubber bands).
//!
//! All curves are pure functions of elapsed time, so sampling at arbitrary
//! frame times is deterministic and tests do not depend on frame pacing.
//!
//! ## Settled messages
//!
//! [`Timeline::advance`] applies the current value of every running channel
//! and returns a [`Settled`] record for each channel that finished. Engines
//! push those records into the same queue as gesture input, so "animation
//! finished" is handled in order with touches rather than from an unrelated
//! callback context.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_motion::{Easing, Motion, Timeline, Timing};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Channel { X }
//!
//! let mut timeline = Timeline::new();
//! timeline.start(Channel::X, Motion::Timing(Timing::new(0.0, 100.0, 100, Easing::Linear)), 1_000);
//!
//! let mut x = 0.0;
//! let settled = timeline.advance(1_050, |_, v| x = v);
//! assert_eq!(x, 50.0);
//! assert!(settled.is_empty());
//!
//! let settled = timeline.advance(1_100, |_, v| x = v);
//! assert_eq!(x, 100.0);
//! assert_eq!(settled[0].key, Channel::X);
//! assert!(timeline.is_empty());
//! ```
//!
//! Velocities are pixels per second; times are milliseconds.
//!
//! This crate is `no_std` when built without its `std` feature (enable `libm`
//! instead).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("tactile_motion requires either the `std` or `libm` feature");

mod decay;
mod easing;
mod float;
mod interpolate;
mod motion;
mod spring;
mod timeline;
mod timing;

pub use decay::{DEFAULT_DECELERATION, Decay};
pub use easing::Easing;
pub use interpolate::interpolate;
pub use motion::{Motion, Sample};
pub use spring::{Spring, SpringConfig};
pub use timeline::{Settled, Timeline};
pub use timing::{DEFAULT_DURATION_MS, Timing};
