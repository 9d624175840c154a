// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Outcome of releasing a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissDecision {
    /// Run the close animation.
    Close,
    /// Return the slide to rest.
    BounceBack,
}

/// Decides whether a released slide closes the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DismissGate {
    /// Fraction of the container height the slide must reach.
    pub threshold: f64,
}

impl DismissGate {
    /// Creates a gate closing at `threshold` of the container height.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Closes when `slide_y >= threshold * container_height`.
    ///
    /// A zero container height never closes.
    #[must_use]
    pub fn decide(&self, slide_y: f64, container_height: f64) -> DismissDecision {
        if container_height > 0.0 && slide_y >= self.threshold * container_height {
            DismissDecision::Close
        } else {
            DismissDecision::BounceBack
        }
    }
}
