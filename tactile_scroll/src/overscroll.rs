// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use log::{debug, trace};
use tactile_gesture::{ConfigError, PanUpdate};
use tactile_motion::{Settled, Spring, SpringConfig, Timeline, interpolate};

/// Spring that returns a released pull to rest.
pub const PULL_SPRING: SpringConfig = SpringConfig::new(0.42, 10.0, 100.0);

/// Tunables for an [`OverscrollPull`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverscrollConfig {
    /// Longest screen dimension; pulls are scaled against it.
    pub screen_extent: f64,
    /// Pull distance, as a fraction of the extent, for a drag of one extent.
    pub pull_ratio: f64,
    /// Largest pull distance, as a fraction of the extent.
    pub max_pull_ratio: f64,
    /// Spring back after release.
    pub spring: SpringConfig,
}

impl OverscrollConfig {
    /// Default tunables for an unmeasured screen.
    pub const DEFAULT: Self = Self {
        screen_extent: 0.0,
        pull_ratio: 0.36,
        max_pull_ratio: 0.38,
        spring: PULL_SPRING,
    };

    /// Default tunables for a screen whose longest side is `screen_extent`.
    #[must_use]
    pub fn new(screen_extent: f64) -> Self {
        Self {
            screen_extent,
            ..Self::DEFAULT
        }
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::ensure_within("screen_extent", self.screen_extent, 0.0, f64::MAX)?;
        ConfigError::ensure_within("pull_ratio", self.pull_ratio, 0.0, 1.0)?;
        ConfigError::ensure_within("max_pull_ratio", self.max_pull_ratio, 0.0, 1.0)?;
        ConfigError::ensure_ordered(
            ("pull_ratio", self.pull_ratio),
            ("max_pull_ratio", self.max_pull_ratio),
        )?;
        ConfigError::ensure_positive("spring.mass", self.spring.mass)?;
        ConfigError::ensure_positive("spring.stiffness", self.spring.stiffness)?;
        Ok(())
    }
}

impl Default for OverscrollConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Requests an [`OverscrollPull`] makes of its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverscrollEvent {
    /// Enable or disable the list's own scrolling.
    ScrollEnable(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Drag;

/// Pull-past-the-top for a scrolling list.
///
/// While the list is at the top, a downward drag moves the whole list down
/// by a damped distance instead of scrolling it, and the list's scrolling is
/// disabled. Releasing springs the pull back and re-enables scrolling once it
/// has settled.
///
/// ```
/// use kurbo::Vec2;
/// use tactile_gesture::PanUpdate;
/// use tactile_scroll::{OverscrollConfig, OverscrollEvent, OverscrollPull};
///
/// let mut pull = OverscrollPull::new(OverscrollConfig::new(1_000.0));
/// pull.pan_update(&PanUpdate::at(Vec2::new(0.0, 500.0), 16));
/// assert_eq!(pull.pull_distance(), 180.0);
///
/// pull.pan_end(32);
/// pull.tick(5_000);
/// assert_eq!(pull.pull_distance(), 0.0);
/// assert_eq!(
///     pull.drain_events().collect::<Vec<_>>(),
///     [OverscrollEvent::ScrollEnable(false), OverscrollEvent::ScrollEnable(true)]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct OverscrollPull {
    config: OverscrollConfig,
    drag_offset: f64,
    scroll_offset: f64,
    scroll_enabled: bool,
    timeline: Timeline<Drag>,
    events: Vec<OverscrollEvent>,
    now: u64,
}

impl OverscrollPull {
    /// Creates a pull at rest with scrolling enabled.
    #[must_use]
    pub fn new(config: OverscrollConfig) -> Self {
        Self {
            config,
            drag_offset: 0.0,
            scroll_offset: 0.0,
            scroll_enabled: true,
            timeline: Timeline::new(),
            events: Vec::new(),
            now: 0,
        }
    }

    /// Creates a pull after validating `config`.
    pub fn try_new(config: OverscrollConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &OverscrollConfig {
        &self.config
    }

    /// Scroll state last requested of the host.
    #[must_use]
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Raw drag distance currently applied.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    /// Damped pull distance for the current drag.
    #[must_use]
    pub fn limited_drag(&self) -> f64 {
        let s = self.config.screen_extent;
        if self.drag_offset <= 0.0 || s <= 0.0 {
            return self.drag_offset.min(0.0);
        }
        interpolate(
            self.drag_offset,
            &[0.0, s, 2.0 * s],
            &[0.0, self.config.pull_ratio * s, self.config.max_pull_ratio * s],
        )
    }

    /// Effective scroll offset: the list's own offset minus the pull.
    ///
    /// Negative while pulled past the top.
    #[must_use]
    pub fn total_scroll_offset(&self) -> f64 {
        self.scroll_offset + (-self.limited_drag()).min(0.0)
    }

    /// Distance to translate the list down by.
    #[must_use]
    pub fn pull_distance(&self) -> f64 {
        -self.total_scroll_offset().min(0.0)
    }

    /// Records the list's own scroll offset.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// Follows a drag over the list.
    pub fn pan_update(&mut self, update: &PanUpdate) {
        self.now = self.now.max(update.time);
        if self.scroll_offset > 0.0 {
            self.set_scroll_enabled(true);
            return;
        }
        self.timeline.cancel(Drag);
        self.drag_offset = update.translation.y;
        self.set_scroll_enabled(update.translation.y < 0.0);
    }

    /// Releases the drag, springing any pull back.
    pub fn pan_end(&mut self, time: u64) {
        self.now = self.now.max(time);
        self.spring_back();
    }

    /// Handles the end of the list's momentum scroll.
    pub fn on_momentum_scroll_end(&mut self, time: u64) {
        self.now = self.now.max(time);
        self.spring_back();
    }

    /// Advances the spring to host time `now`.
    pub fn tick(&mut self, now: u64) {
        self.now = self.now.max(now);
        let drag = &mut self.drag_offset;
        let settled = self.timeline.advance(self.now, |_, y| *drag = y);
        for settled in settled {
            self.on_settled(settled);
        }
    }

    /// Takes the queued events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = OverscrollEvent> + '_ {
        self.events.drain(..)
    }

    fn spring_back(&mut self) {
        if self.drag_offset <= 0.0 || self.timeline.is_running(Drag) {
            return;
        }
        debug!("overscroll release from {}", self.drag_offset);
        let spring = Spring::new(self.drag_offset, 0.0, self.config.spring);
        self.timeline.start(Drag, spring.into(), self.now);
    }

    fn on_settled(&mut self, _settled: Settled<Drag>) {
        self.set_scroll_enabled(true);
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        if self.scroll_enabled != enabled {
            trace!("overscroll scroll enabled: {enabled}");
            self.scroll_enabled = enabled;
            self.events.push(OverscrollEvent::ScrollEnable(enabled));
        }
    }
}
