// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::{debug, trace};
use tactile_gesture::gate::{ActivationGate, ActivationRule, Axis};
use tactile_gesture::{ConfigError, PanUpdate, TouchBatch};
use tactile_motion::{Settled, Spring, Timeline};

use crate::config::PagerConfig;

/// Horizontal travel that claims the gesture.
const ACTIVATION_TRAVEL: f64 = 2.0;
/// Vertical travel that still allows claiming it.
const ACTIVATION_CROSS: f64 = 3.0;
/// Width change that counts as a new layout.
const LAYOUT_TOLERANCE: f64 = 1.0;

/// Edge a drag ran past.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Past the first page.
    Left,
    /// Past the last page.
    Right,
}

/// Notifications a [`PageSwiper`] queues for its host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PagerEvent {
    /// The pager came to rest on a different page.
    PageChanged(usize),
    /// A release is heading to a different page.
    PageWillChange {
        /// Page the pager was heading to before the release.
        from: usize,
        /// Page it is heading to now.
        to: usize,
    },
    /// A drag was clamped at an edge.
    MoveOverflow {
        /// Edge that was hit.
        side: Side,
        /// Horizontal recognizer translation at the time.
        translation: f64,
    },
    /// A recognized drag was released.
    MoveEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Track {
    Translation,
}

/// Page swiper: drags a row of equal-width pages and settles on one.
///
/// Translations are negative: page `i` is shown at `-i * page_width`.
///
/// ```
/// use kurbo::Vec2;
/// use tactile_gesture::PanUpdate;
/// use tactile_pager::{PageSwiper, PagerConfig, PagerEvent};
///
/// let mut pager = PageSwiper::new(PagerConfig::new(300.0, 5).with_initial_index(2));
/// pager.pan_begin(0);
/// pager.pan_update(&PanUpdate::at(Vec2::new(-200.0, 0.0), 50));
/// pager.pan_end(&PanUpdate::at(Vec2::new(-200.0, 0.0), 60), true);
/// pager.tick(2_000);
///
/// assert_eq!(pager.translation(), -900.0);
/// assert!(pager.drain_events().any(|e| e == PagerEvent::PageChanged(3)));
/// ```
#[derive(Clone, Debug)]
pub struct PageSwiper {
    config: PagerConfig,
    trans_x: f64,
    saved_x: f64,
    target_x: f64,
    gate: ActivationGate,
    timeline: Timeline<Track>,
    queue: VecDeque<Settled<Track>>,
    events: Vec<PagerEvent>,
    reported_page: usize,
    now: u64,
}

impl PageSwiper {
    /// Creates a pager showing `config.initial_index`, clamped to the page range.
    #[must_use]
    pub fn new(mut config: PagerConfig) -> Self {
        config.initial_index = config
            .initial_index
            .min(config.page_count.saturating_sub(1));
        let x = -config.page_width * index_to_f64(config.initial_index);
        Self {
            config,
            trans_x: x,
            saved_x: x,
            target_x: x,
            gate: ActivationGate::new(ActivationRule::new(
                Axis::Horizontal,
                ACTIVATION_TRAVEL,
                ACTIVATION_CROSS,
            )),
            timeline: Timeline::new(),
            queue: VecDeque::new(),
            events: Vec::new(),
            reported_page: config.initial_index,
            now: 0,
        }
    }

    /// Creates a pager after validating `config`.
    pub fn try_new(config: PagerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Current translation.
    #[must_use]
    pub fn translation(&self) -> f64 {
        self.trans_x
    }

    /// Committed translation a drag starts from.
    #[must_use]
    pub fn saved_translation(&self) -> f64 {
        self.saved_x
    }

    /// Translation of the page the pager is heading to.
    #[must_use]
    pub fn target_translation(&self) -> f64 {
        self.target_x
    }

    /// Page the pager is heading to.
    #[must_use]
    pub fn target_page(&self) -> usize {
        self.page_at(self.target_x)
    }

    /// Last page reported through [`PagerEvent::PageChanged`] (or the initial page).
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.reported_page
    }

    /// Scroll position in pages: `-translation / page_width`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.config.page_width > 0.0 {
            -self.trans_x / self.config.page_width
        } else {
            0.0
        }
    }

    /// Returns `true` once the activation gate claimed the current touch.
    #[must_use]
    pub fn is_pan_granted(&self) -> bool {
        self.gate.is_active()
    }

    /// Returns `true` while the settle spring runs.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Starts tracking a touch for manual activation.
    pub fn touches_down(&mut self, batch: &TouchBatch) {
        if let Some(pos) = batch.primary() {
            self.gate.touch_down(pos);
        }
    }

    /// Feeds a touch move to the activation gate.
    ///
    /// Returns `true` on the move that claims the gesture; the host should
    /// then activate its pan recognizer.
    pub fn touches_move(&mut self, batch: &TouchBatch) -> bool {
        let Some(pos) = batch.primary() else {
            return false;
        };
        let granted = self.gate.touch_move(pos);
        if granted {
            trace!("pager pan granted");
        }
        granted
    }

    /// Ends touch tracking.
    pub fn touches_up(&mut self) {
        self.gate.release();
    }

    /// Ends touch tracking after the platform cancelled the touch.
    pub fn touches_cancel(&mut self) {
        self.gate.release();
    }

    /// Stops the settle spring and adopts the frozen position.
    pub fn pan_begin(&mut self, time: u64) {
        self.now = self.now.max(time);
        if let Some(x) = self.timeline.cancel(Track::Translation) {
            self.trans_x = x;
        }
        self.saved_x = self.trans_x;
    }

    /// Moves the pages with the drag, clamped to the first and last page.
    pub fn pan_update(&mut self, update: &PanUpdate) {
        self.now = self.now.max(update.time);
        let min = self.min_translation();
        let mut tx = self.saved_x + update.translation.x;
        if tx > 0.0 {
            self.overflow(Side::Left, update.translation.x);
            tx = 0.0;
        } else if tx < min {
            self.overflow(Side::Right, update.translation.x);
            tx = min;
        }
        self.trans_x = tx;
    }

    /// Releases the drag.
    ///
    /// `recognized` is `false` when the pan never activated (e.g. a tap);
    /// the pager then aligns to the nearest page.
    pub fn pan_end(&mut self, update: &PanUpdate, recognized: bool) {
        self.now = self.now.max(update.time);
        if !recognized {
            self.align_to_nearest();
            return;
        }
        self.events.push(PagerEvent::MoveEnd);
        let w = self.config.page_width;
        if w <= 0.0 {
            return;
        }

        let v = update.velocity.x;
        let fling = self.config.fling_velocity();
        let crossed = (self.trans_x - self.saved_x).abs() > w * 0.5;
        let (toward_start, back) = if update.translation.x >= 0.0 {
            if v >= 0.0 {
                (true, !(v > fling || crossed))
            } else {
                (true, v < -fling || !crossed)
            }
        } else if v <= 0.0 {
            (false, !(v < -fling || crossed))
        } else {
            (false, v > fling || !crossed)
        };
        debug!(
            "pager release v={v} moved={} toward_start={toward_start} back={back}",
            self.trans_x - self.saved_x
        );
        self.run_move(toward_start, back);
    }

    /// Applies a measured page width.
    ///
    /// Widths within one unit of the current one are ignored. Otherwise all
    /// translations are re-based so the same page stays in view.
    pub fn on_layout(&mut self, page_width: f64) {
        if page_width.is_nan()
            || page_width <= 0.0
            || (page_width - self.config.page_width).abs() <= LAYOUT_TOLERANCE
        {
            return;
        }
        let page = if self.config.page_width > 0.0 {
            self.target_page()
        } else {
            self.config.initial_index
        };
        debug!("pager layout width {page_width}, keeping page {page}");
        self.config.page_width = page_width;
        self.timeline.cancel(Track::Translation);
        let x = -page_width * index_to_f64(page);
        self.trans_x = x;
        self.saved_x = x;
        self.target_x = x;
    }

    /// Changes the number of pages, pulling the target back if it no longer exists.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.config.page_count = page_count;
        let min = self.min_translation();
        if self.target_x < min {
            self.target_x = min;
            self.start_spring(min);
        }
    }

    /// Advances the settle spring to host time `now`.
    pub fn tick(&mut self, now: u64) {
        self.now = self.now.max(now);
        let trans_x = &mut self.trans_x;
        let settled = self.timeline.advance(self.now, |_, x| *trans_x = x);
        self.queue.extend(settled);
        while let Some(settled) = self.queue.pop_front() {
            self.on_settled(settled);
        }
    }

    /// Takes the queued events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = PagerEvent> + '_ {
        self.events.drain(..)
    }

    fn min_translation(&self) -> f64 {
        -self.config.page_width * index_to_f64(self.config.page_count.saturating_sub(1))
    }

    fn page_at(&self, x: f64) -> usize {
        nearest_page(x, self.config.page_width, self.config.page_count)
    }

    fn overflow(&mut self, side: Side, translation: f64) {
        trace!("pager overflow {side:?}");
        self.events.push(PagerEvent::MoveOverflow { side, translation });
    }

    fn run_move(&mut self, toward_start: bool, back: bool) {
        if !back {
            let w = self.config.page_width;
            let t = if toward_start {
                (self.target_x + w).min(0.0)
            } else {
                (self.target_x - w).max(self.min_translation())
            };
            self.retarget(t);
        }
        self.start_spring(self.target_x);
    }

    fn align_to_nearest(&mut self) {
        if self.config.page_width <= 0.0 {
            return;
        }
        let page = self.page_at(self.saved_x);
        let t = -self.config.page_width * index_to_f64(page);
        self.retarget(t);
        self.start_spring(t);
    }

    fn retarget(&mut self, t: f64) {
        let from = self.page_at(self.target_x);
        let to = self.page_at(t);
        if from != to {
            self.events.push(PagerEvent::PageWillChange { from, to });
        }
        self.target_x = t;
    }

    fn start_spring(&mut self, to: f64) {
        let spring = Spring::new(self.trans_x, to, self.config.spring);
        self.timeline.start(Track::Translation, spring.into(), self.now);
    }

    fn on_settled(&mut self, settled: Settled<Track>) {
        self.saved_x = settled.value;
        let page = self.page_at(settled.value);
        if page != self.reported_page {
            debug!("pager page {} -> {page}", self.reported_page);
            self.reported_page = page;
            self.events.push(PagerEvent::PageChanged(page));
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "page positions are small non-negative values"
)]
fn nearest_page(x: f64, page_width: f64, page_count: usize) -> usize {
    if page_width.is_nan() || page_width <= 0.0 || page_count == 0 {
        return 0;
    }
    let page = (-x / page_width + 0.5).max(0.0) as usize;
    page.min(page_count - 1)
}

fn index_to_f64(index: usize) -> f64 {
    index as f64
}
