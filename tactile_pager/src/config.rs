// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tactile_gesture::ConfigError;
use tactile_motion::SpringConfig;

/// Spring used to settle on a page.
pub const PAGE_SPRING: SpringConfig = SpringConfig::new(0.5, 12.0, 100.0);

/// Configuration of a [`PageSwiper`](crate::PageSwiper).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerConfig {
    /// Width of one page. Zero until measured.
    pub page_width: f64,
    /// Number of pages.
    pub page_count: usize,
    /// Page shown first.
    pub initial_index: usize,
    /// A release faster than one page width per this interval is a fling.
    pub fling_interval_ms: u64,
    /// Settle spring.
    pub spring: SpringConfig,
}

impl PagerConfig {
    /// Unmeasured, empty pager.
    pub const DEFAULT: Self = Self {
        page_width: 0.0,
        page_count: 0,
        initial_index: 0,
        fling_interval_ms: 500,
        spring: PAGE_SPRING,
    };

    /// Configuration for `page_count` pages of `page_width`.
    #[must_use]
    pub fn new(page_width: f64, page_count: usize) -> Self {
        Self {
            page_width,
            page_count,
            ..Self::DEFAULT
        }
    }

    /// Sets the first page shown.
    #[must_use]
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::ensure_within("page_width", self.page_width, 0.0, f64::MAX)?;
        ConfigError::ensure_positive("fling_interval_ms", self.fling_interval_ms as f64)?;
        if self.page_count > 0 {
            ConfigError::ensure_within(
                "initial_index",
                self.initial_index as f64,
                0.0,
                (self.page_count - 1) as f64,
            )?;
        }
        ConfigError::ensure_positive("spring.mass", self.spring.mass)?;
        ConfigError::ensure_positive("spring.stiffness", self.spring.stiffness)?;
        ConfigError::ensure_within("spring.damping", self.spring.damping, 0.0, f64::MAX)?;
        Ok(())
    }

    /// Release speed (px/s) above which a release counts as a fling.
    #[must_use]
    pub fn fling_velocity(&self) -> f64 {
        if self.fling_interval_ms == 0 {
            return f64::INFINITY;
        }
        self.page_width * 1000.0 / self.fling_interval_ms as f64
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
