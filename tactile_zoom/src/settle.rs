// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terminal animations started when a gesture is released.
//!
//! Each planner is a pure function from the current [`TransformState`] to a
//! [`SettlePlan`]; the surface starts the plan on its timeline.

use kurbo::Vec2;
use smallvec::SmallVec;
use tactile_motion::{Decay, Easing, Motion, Timing};

use crate::bounds::Bounds;
use crate::config::ZoomConfig;
use crate::state::{Channel, TransformState};

/// Animations to start, one per channel.
pub type SettlePlan = SmallVec<[(Channel, Motion); 6]>;

fn ease(state: &TransformState, channel: Channel, to: f64, duration_ms: u64) -> (Channel, Motion) {
    let from = state.get(channel);
    (
        channel,
        Timing::new(from, to, duration_ms, Easing::InOutQuad).into(),
    )
}

/// Snap after a two-finger gesture.
///
/// Per axis: at or below the axis' natural scale, offset and focal
/// correction return to zero. Above it, an offset whose displayed value lies
/// outside the box is moved back onto the nearest edge.
#[must_use]
pub fn two_finger_release(state: &TransformState, bounds: &Bounds, duration_ms: u64) -> SettlePlan {
    let mut plan = SettlePlan::new();
    let scale = state.scale;
    let over = bounds.overshoot(state.displayed_offset(), scale);

    if scale <= 1.0 {
        plan.push(ease(state, Channel::OffsetX, 0.0, duration_ms));
        plan.push(ease(state, Channel::ScaleOffsetX, 0.0, duration_ms));
    } else if over.x != 0.0 {
        plan.push(ease(state, Channel::OffsetX, state.offset.x - over.x, duration_ms));
    }

    if scale <= bounds.natural_scale() {
        plan.push(ease(state, Channel::OffsetY, 0.0, duration_ms));
        plan.push(ease(state, Channel::ScaleOffsetY, 0.0, duration_ms));
    } else if over.y != 0.0 {
        plan.push(ease(state, Channel::OffsetY, state.offset.y - over.y, duration_ms));
    }
    plan
}

/// Return every transform channel to identity.
#[must_use]
pub fn reset_identity(state: &TransformState, duration_ms: u64) -> SettlePlan {
    let mut plan = SettlePlan::new();
    plan.push(ease(state, Channel::Scale, 1.0, duration_ms));
    plan.push(ease(state, Channel::ScaleOffsetX, 0.0, duration_ms));
    plan.push(ease(state, Channel::ScaleOffsetY, 0.0, duration_ms));
    plan.push(ease(state, Channel::OffsetX, 0.0, duration_ms));
    plan.push(ease(state, Channel::OffsetY, 0.0, duration_ms));
    plan
}

/// Inertial decay after a one-finger pan of a zoomed surface.
///
/// Only axes strictly inside their box fling, and the decay is clamped to
/// the box. The vertical axis flings only above the natural scale.
#[must_use]
pub fn fling(
    state: &TransformState,
    bounds: &Bounds,
    velocity: Vec2,
    deceleration: f64,
) -> SettlePlan {
    let mut plan = SettlePlan::new();
    let scale = state.scale;

    let (lo, hi) = bounds.offset_range_x(scale, state.scale_offset.x);
    if lo < state.offset.x && state.offset.x < hi {
        let decay = Decay::new(state.offset.x, velocity.x)
            .with_deceleration(deceleration)
            .with_clamp(lo, hi);
        plan.push((Channel::OffsetX, decay.into()));
    }

    if state.saved_scale > bounds.natural_scale() {
        let (lo, hi) = bounds.offset_range_y(scale, state.scale_offset.y);
        if lo < state.offset.y && state.offset.y < hi {
            let decay = Decay::new(state.offset.y, velocity.y)
                .with_deceleration(deceleration)
                .with_clamp(lo, hi);
            plan.push((Channel::OffsetY, decay.into()));
        }
    }
    plan
}

/// Close animation: slide down, shrink and fade the backdrop out together.
#[must_use]
pub fn close(state: &TransformState, container_height: f64, config: &ZoomConfig) -> SettlePlan {
    let d = config.dismiss_duration_ms;
    let mut plan = SettlePlan::new();
    plan.push(ease(state, Channel::SlideY, config.dismiss_travel * container_height, d));
    plan.push(ease(state, Channel::SlideX, 0.0, d));
    plan.push(ease(state, Channel::Backdrop, 0.0, d));
    plan.push(ease(state, Channel::SlideScale, config.dismiss_scale, d));
    plan
}

/// Return an uncommitted slide to rest.
#[must_use]
pub fn bounce_back(state: &TransformState) -> SettlePlan {
    let mut plan = SettlePlan::new();
    for (channel, to) in [
        (Channel::SlideX, 0.0),
        (Channel::SlideY, 0.0),
        (Channel::SlideScale, 1.0),
        (Channel::Backdrop, 1.0),
    ] {
        plan.push((channel, Timing::ease(state.get(channel), to).into()));
    }
    plan
}
