// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Scroll: headless interaction engines for scrolling lists.
//!
//! - [`SwipeRow`]: a row that slides left to reveal actions, with a
//!   [`SwipeRegistry`] that keeps at most one row open.
//! - [`DraggableSheet`]: a bottom sheet around a list that is dragged down
//!   to close once the list is scrolled to the top.
//! - [`OverscrollPull`]: a damped pull past the top of a list.
//!
//! Each engine follows the same shape as the rest of the workspace: the host
//! forwards touches and recognizer updates, calls `tick` once per frame,
//! reads the values to render and drains the queued events.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Vec2};
//! use tactile_gesture::{PanUpdate, TouchBatch, TouchPhase};
//! use tactile_scroll::{SwipeConfig, SwipeRegistry, SwipeRow};
//!
//! let first = Rc::new(RefCell::new(SwipeRow::new(SwipeConfig::new(120.0))));
//! let second = Rc::new(RefCell::new(SwipeRow::new(SwipeConfig::new(120.0))));
//! let mut registry = SwipeRegistry::new();
//! registry.register(&first);
//! registry.register(&second);
//! first.borrow_mut().open();
//! registry.tick(1_000);
//!
//! // Swiping the second row closes the first.
//! {
//!     let mut row = second.borrow_mut();
//!     row.touches_down(&TouchBatch::single(TouchPhase::Down, Point::new(200.0, 20.0), 1_100));
//!     assert!(row.touches_move(&TouchBatch::single(TouchPhase::Move, Point::new(190.0, 22.0), 1_116)));
//!     row.pan_begin(1_116);
//!     row.pan_update(&PanUpdate::at(Vec2::new(-10.0, 0.0), 1_116));
//! }
//! registry.tick(1_132);
//! assert!(!first.borrow().is_open());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod overscroll;
mod registry;
mod sheet;
mod swipe;

pub use overscroll::{OverscrollConfig, OverscrollEvent, OverscrollPull, PULL_SPRING};
pub use registry::{RowId, SharedRow, SwipeRegistry};
pub use sheet::{DraggableSheet, SHOW_SPRING, SheetConfig, SheetEvent, SheetPhase};
pub use swipe::{ROW_SPRING, SwipeConfig, SwipeEvent, SwipeRow};
