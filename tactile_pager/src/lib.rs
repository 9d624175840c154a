// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Pager: a headless horizontal page swiper.
//!
//! A [`PageSwiper`] tracks the translation of a row of equal-width pages.
//! It decides, from raw touches, when a horizontal drag should be claimed
//! (the host then activates its pan recognizer), follows the drag while
//! clamping at the first and last page, and on release picks a page from the
//! drag distance and the release velocity:
//!
//! - A release faster than [`PagerConfig::fling_velocity`] advances one page
//!   in the direction of the fling.
//! - A slower release advances only if the drag crossed half a page.
//! - A fling against the drag direction snaps back.
//!
//! The chosen page is reached with a spring. When it settles, the committed
//! translation is updated and [`PagerEvent::PageChanged`] is queued if the
//! page differs from the last one reported.
//!
//! ```rust
//! use kurbo::Vec2;
//! use tactile_gesture::PanUpdate;
//! use tactile_pager::{PageSwiper, PagerConfig};
//!
//! let mut pager = PageSwiper::new(PagerConfig::new(300.0, 5).with_initial_index(2));
//! pager.pan_begin(0);
//! pager.pan_update(&PanUpdate::at(Vec2::new(-50.0, 0.0), 16));
//! let release = PanUpdate::at(Vec2::new(-50.0, 0.0), 32).with_velocity(Vec2::new(-400.0, 0.0));
//! pager.pan_end(&release, true);
//! pager.tick(2_000);
//!
//! // Too slow and too short: back to page 2.
//! assert_eq!(pager.translation(), -600.0);
//! assert_eq!(pager.current_page(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod swiper;

pub use config::{PAGE_SPRING, PagerConfig};
pub use swiper::{PageSwiper, PagerEvent, Side};
