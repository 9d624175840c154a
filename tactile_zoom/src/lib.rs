// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Zoom: a headless pan / pinch / fling / slide-to-dismiss engine.
//!
//! A [`ZoomSurface`] owns the transform of one zoomable image. The host feeds
//! it recognizer output ([`ZoomInput`]), calls [`ZoomSurface::tick`] once per
//! frame, renders [`ZoomSurface::transform`] and drains [`ZoomEvent`]s.
//!
//! The engine is split the same way the behavior is:
//!
//! - [`TransformState`]: live and committed offset, scale, focal correction
//!   and slide values.
//! - [`Bounds`]: the symmetric pan box for a scale, from [`ViewportGeometry`].
//! - [`Phase`]: the interaction state machine driven by the surface.
//! - [`settle`]: pure planners for snap-back, fling, reset, close and
//!   bounce-back animations.
//! - [`DismissGate`]: decides whether a released slide closes the surface.
//! - [`Gallery`]: one surface per page of a horizontal pager, with a merged
//!   scroll-enable flag and a shared backdrop.
//!
//! Animations run on a [`tactile_motion::Timeline`]. When one settles, a
//! message is queued behind any pending input, and handling it commits the
//! saved values, so "animation finished" is ordered with touches.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use tactile_gesture::{PanUpdate, PinchUpdate, Touch, TouchBatch, TouchPhase};
//! use tactile_zoom::{Phase, ViewportGeometry, ZoomConfig, ZoomSurface};
//!
//! let geometry = ViewportGeometry::fit(Size::new(300.0, 600.0), Size::new(300.0, 600.0));
//! let mut surface = ZoomSurface::new(ZoomConfig::default(), geometry);
//!
//! let center = Point::new(150.0, 300.0);
//! surface.touches_down(TouchBatch::new(
//!     TouchPhase::Down,
//!     [Touch::new(0, Point::new(100.0, 300.0), 0), Touch::new(1, Point::new(200.0, 300.0), 0)],
//!     0,
//! ));
//! surface.pinch_begin(PinchUpdate::new(1.0, center, 2, 0));
//! surface.pinch_update(PinchUpdate::new(2.5, center, 2, 16));
//! surface.pinch_end(PinchUpdate::new(2.5, center, 2, 32));
//! surface.pan_end(PanUpdate::at(Vec2::ZERO, 32).with_pointers(2));
//! surface.tick(500);
//!
//! assert_eq!(surface.state().scale, 2.5);
//! assert!(!surface.is_pan_locked());
//! assert_eq!(surface.phase(), Phase::Idle);
//! ```
//!
//! Coordinates are in the container's space, in the same units as its size.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod config;
mod dismiss;
mod gallery;
mod geometry;
mod phase;
pub mod settle;
mod state;
mod surface;

pub use bounds::Bounds;
pub use config::ZoomConfig;
pub use dismiss::{DismissDecision, DismissGate};
pub use gallery::{Gallery, GalleryEvent};
pub use geometry::ViewportGeometry;
pub use phase::Phase;
pub use settle::SettlePlan;
pub use state::{Channel, TransformState};
pub use surface::{ZoomEvent, ZoomInput, ZoomSurface};
