// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Gesture: input records shared by the Tactile touch engines.
//!
//! The engines in this workspace never talk to a platform gesture recognizer
//! directly. Hosts translate whatever their toolkit delivers into the small,
//! plain records defined here:
//!
//! - [`TouchBatch`]: a touch-down / move / up / cancel batch with every touch
//!   that is currently on the surface.
//! - [`PanUpdate`]: the derived translation, velocity and pointer count of a
//!   pan recognizer.
//! - [`PinchUpdate`]: the derived scale factor and focal point of a pinch
//!   recognizer.
//!
//! It also provides [`gate::ActivationGate`], a manual activation helper that
//! only claims a gesture once movement along one axis dominates the other.
//! Pagers, swipe rows and sheets use it so they do not steal scroll gestures
//! that belong to an ancestor.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tactile_gesture::gate::{ActivationGate, ActivationRule, Axis};
//!
//! // Claim horizontal drags that stay within 3px vertically.
//! let mut gate = ActivationGate::new(ActivationRule::new(Axis::Horizontal, 2.0, 3.0));
//! gate.touch_down(Point::new(100.0, 100.0));
//!
//! assert!(!gate.touch_move(Point::new(101.0, 100.0)));
//! assert!(gate.touch_move(Point::new(104.0, 101.0)));
//! assert!(gate.is_active());
//! ```
//!
//! [`ConfigError`] is the shared validation error for engine configuration.
//!
//! Timestamps are milliseconds on a host-chosen monotonic clock. Velocities
//! are pixels per second, matching what mobile gesture recognizers report.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
pub mod gate;
mod touch;
mod update;

pub use error::ConfigError;
pub use touch::{PointerId, Touch, TouchBatch, TouchPhase};
pub use update::{PanUpdate, PinchUpdate};
