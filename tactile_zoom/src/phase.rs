// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Interaction phase of a [`ZoomSurface`](crate::ZoomSurface).
///
/// Exactly one of sliding, one-finger panning and two-finger manipulation is
/// active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// One finger down on an unzoomed surface. Pan updates leave the offset
    /// alone so the ancestor pager can move; only a slide can start.
    Locked,
    /// One-finger pan of a zoomed (or unlocked) surface.
    Panning {
        /// Downward movement past the vertical bound is feeding the slide.
        handoff: bool,
    },
    /// Two-finger drag, with or without a running pinch.
    TwoFinger {
        /// The pinch recognizer is active.
        pinching: bool,
    },
    /// One finger left after a two-finger gesture; ignored until lifted.
    Residual,
    /// Vertical slide-to-dismiss.
    Sliding,
    /// Close animation in flight.
    Closing,
    /// Close finished; input is ignored until reset.
    Closed,
}

impl Phase {
    /// Returns `true` unless the surface is closing or closed.
    #[must_use]
    pub fn accepts_input(self) -> bool {
        !matches!(self, Self::Closing | Self::Closed)
    }

    /// Returns `true` for the phases a one-finger release settles.
    #[must_use]
    pub fn is_one_finger(self) -> bool {
        matches!(self, Self::Locked | Self::Panning { .. } | Self::Sliding)
    }
}
