// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Vec2};
use log::{debug, trace};
use tactile_gesture::{ConfigError, PanUpdate, PinchUpdate, TouchBatch};
use tactile_motion::{Motion, Settled, Timeline, interpolate};

use crate::config::ZoomConfig;
use crate::dismiss::{DismissDecision, DismissGate};
use crate::geometry::ViewportGeometry;
use crate::phase::Phase;
use crate::settle::{self, SettlePlan};
use crate::state::{Channel, TransformState};

const UNIT_EPSILON: f64 = 1e-9;

fn is_unit(scale: f64) -> bool {
    (scale - 1.0).abs() < UNIT_EPSILON
}

/// Gesture input accepted by a [`ZoomSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum ZoomInput {
    /// Touches landed; the batch lists every touch now on the surface.
    TouchesDown(TouchBatch),
    /// The pan recognizer activated.
    PanBegin(PanUpdate),
    /// The pan recognizer moved.
    PanUpdate(PanUpdate),
    /// The pan recognizer ended.
    PanEnd(PanUpdate),
    /// The pinch recognizer activated.
    PinchBegin(PinchUpdate),
    /// The pinch recognizer moved.
    PinchUpdate(PinchUpdate),
    /// The pinch recognizer ended.
    PinchEnd(PinchUpdate),
}

impl ZoomInput {
    /// Host timestamp of the input.
    #[must_use]
    pub fn time(&self) -> u64 {
        match self {
            Self::TouchesDown(batch) => batch.time,
            Self::PanBegin(p) | Self::PanUpdate(p) | Self::PanEnd(p) => p.time,
            Self::PinchBegin(p) | Self::PinchUpdate(p) | Self::PinchEnd(p) => p.time,
        }
    }
}

/// Requests a [`ZoomSurface`] makes of its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomEvent {
    /// Enable or disable scrolling of the ancestor pager.
    RequestScrollEnable(bool),
    /// The close animation finished.
    CloseCompleted,
}

#[derive(Clone, Debug)]
enum Message {
    Input(ZoomInput),
    Settled(Settled<Channel>),
}

/// Pan, pinch, fling and slide-to-dismiss engine for one zoomable surface.
///
/// Input and animation completions share one queue and are processed in
/// order. Output is queued as [`ZoomEvent`]s for the host to drain.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use tactile_gesture::{PanUpdate, TouchBatch, TouchPhase};
/// use tactile_zoom::{Phase, ViewportGeometry, ZoomConfig, ZoomEvent, ZoomSurface};
///
/// let geometry = ViewportGeometry::fit(Size::new(400.0, 800.0), Size::new(400.0, 800.0));
/// let mut surface = ZoomSurface::new(ZoomConfig::default(), geometry);
///
/// // A fast downward drag on an unzoomed surface starts a slide.
/// surface.touches_down(TouchBatch::single(TouchPhase::Down, Point::new(200.0, 300.0), 0));
/// let pan = PanUpdate::at(Vec2::new(0.0, 30.0), 16).with_velocity(Vec2::new(0.0, 600.0));
/// surface.pan_begin(pan);
/// surface.pan_update(PanUpdate::at(Vec2::new(0.0, 200.0), 80));
/// assert_eq!(surface.phase(), Phase::Sliding);
///
/// // Released past 15% of the height: the surface closes.
/// surface.pan_end(PanUpdate::at(Vec2::new(0.0, 200.0), 96));
/// surface.tick(1_000);
/// let events: Vec<_> = surface.drain_events().collect();
/// assert_eq!(events, [ZoomEvent::RequestScrollEnable(false), ZoomEvent::CloseCompleted]);
/// ```
#[derive(Clone, Debug)]
pub struct ZoomSurface {
    config: ZoomConfig,
    geometry: ViewportGeometry,
    state: TransformState,
    phase: Phase,
    pan_locked: bool,
    scroll_enabled: bool,
    timeline: Timeline<Channel>,
    queue: VecDeque<Message>,
    events: Vec<ZoomEvent>,
    now: u64,
}

impl ZoomSurface {
    /// Creates a surface, normalizing out-of-range scale limits.
    #[must_use]
    pub fn new(config: ZoomConfig, geometry: ViewportGeometry) -> Self {
        Self {
            config: config.sanitized(),
            geometry,
            state: TransformState::IDENTITY,
            phase: Phase::Idle,
            pan_locked: true,
            scroll_enabled: true,
            timeline: Timeline::new(),
            queue: VecDeque::new(),
            events: Vec::new(),
            now: 0,
        }
    }

    /// Creates a surface after validating `config`.
    pub fn try_new(config: ZoomConfig, geometry: ViewportGeometry) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, geometry))
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Current geometry.
    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    /// Replaces the geometry, e.g. after layout or image load.
    pub fn set_geometry(&mut self, geometry: ViewportGeometry) {
        if self.geometry != geometry {
            debug!("zoom geometry {geometry:?}");
            self.geometry = geometry;
        }
    }

    /// Current transform values.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while one-finger pans are left to the ancestor pager.
    #[must_use]
    pub fn is_pan_locked(&self) -> bool {
        self.pan_locked
    }

    /// Last scroll-enable state requested of the host.
    #[must_use]
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Returns `true` while any animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Returns `true` while a fling is moving the pan offset.
    #[must_use]
    pub fn is_decaying(&self) -> bool {
        [Channel::OffsetX, Channel::OffsetY]
            .into_iter()
            .any(|c| matches!(self.timeline.motion(c), Some(Motion::Decay(_))))
    }

    /// Animation running on `channel`, if any.
    #[must_use]
    pub fn motion(&self, channel: Channel) -> Option<&Motion> {
        self.timeline.motion(channel)
    }

    /// Content-to-container transform to render with.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.state
            .to_affine(self.geometry.container, self.config.max_scale)
    }

    /// Latest host time seen.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Queues `input` and processes the queue.
    pub fn handle(&mut self, input: ZoomInput) {
        self.queue.push_back(Message::Input(input));
        self.pump();
    }

    /// Shorthand for [`ZoomInput::TouchesDown`].
    pub fn touches_down(&mut self, batch: TouchBatch) {
        self.handle(ZoomInput::TouchesDown(batch));
    }

    /// Shorthand for [`ZoomInput::PanBegin`].
    pub fn pan_begin(&mut self, update: PanUpdate) {
        self.handle(ZoomInput::PanBegin(update));
    }

    /// Shorthand for [`ZoomInput::PanUpdate`].
    pub fn pan_update(&mut self, update: PanUpdate) {
        self.handle(ZoomInput::PanUpdate(update));
    }

    /// Shorthand for [`ZoomInput::PanEnd`].
    pub fn pan_end(&mut self, update: PanUpdate) {
        self.handle(ZoomInput::PanEnd(update));
    }

    /// Shorthand for [`ZoomInput::PinchBegin`].
    pub fn pinch_begin(&mut self, update: PinchUpdate) {
        self.handle(ZoomInput::PinchBegin(update));
    }

    /// Shorthand for [`ZoomInput::PinchUpdate`].
    pub fn pinch_update(&mut self, update: PinchUpdate) {
        self.handle(ZoomInput::PinchUpdate(update));
    }

    /// Shorthand for [`ZoomInput::PinchEnd`].
    pub fn pinch_end(&mut self, update: PinchUpdate) {
        self.handle(ZoomInput::PinchEnd(update));
    }

    /// Advances animations to host time `now`.
    ///
    /// Finished animations are queued as settled messages and handled
    /// before this returns.
    pub fn tick(&mut self, now: u64) {
        self.now = self.now.max(now);
        let state = &mut self.state;
        let settled = self
            .timeline
            .advance(self.now, |channel, value| state.set(channel, value));
        self.queue.extend(settled.into_iter().map(Message::Settled));
        self.pump();
    }

    /// Takes the queued output events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ZoomEvent> + '_ {
        self.events.drain(..)
    }

    /// Returns the surface to identity, dropping animations and pending events.
    pub fn reset(&mut self) {
        debug!("zoom reset from {:?}", self.phase);
        self.timeline.clear();
        self.queue.clear();
        self.events.clear();
        self.state = TransformState::IDENTITY;
        self.phase = Phase::Idle;
        self.pan_locked = true;
        self.scroll_enabled = true;
    }

    fn pump(&mut self) {
        while let Some(message) = self.queue.pop_front() {
            match message {
                Message::Input(input) => self.on_input(input),
                Message::Settled(settled) => self.on_settled(settled),
            }
        }
    }

    fn on_input(&mut self, input: ZoomInput) {
        self.now = self.now.max(input.time());
        if !self.phase.accepts_input() {
            trace!("zoom input ignored while {:?}", self.phase);
            return;
        }
        match input {
            ZoomInput::TouchesDown(batch) => self.on_touches_down(&batch),
            ZoomInput::PanBegin(p) => self.on_pan_begin(&p),
            ZoomInput::PanUpdate(p) => self.on_pan_update(&p),
            ZoomInput::PanEnd(p) => self.on_pan_end(&p),
            ZoomInput::PinchBegin(p) => self.on_pinch_begin(&p),
            ZoomInput::PinchUpdate(p) => self.on_pinch_update(&p),
            ZoomInput::PinchEnd(_) => self.on_pinch_end(),
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!("zoom phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn request_scroll(&mut self, enabled: bool) {
        if self.scroll_enabled != enabled {
            self.scroll_enabled = enabled;
            self.events.push(ZoomEvent::RequestScrollEnable(enabled));
        }
    }

    fn start_plan(&mut self, plan: SettlePlan) {
        for (channel, motion) in plan {
            self.timeline.start(channel, motion, self.now);
        }
    }

    fn cancel_channels(&mut self, channels: &[Channel]) -> bool {
        let mut any = false;
        for &channel in channels {
            if let Some(value) = self.timeline.cancel(channel) {
                self.state.set(channel, value);
                any = true;
            }
        }
        any
    }

    fn backdrop_for(&self, slide_y: f64) -> f64 {
        let fade = self.config.backdrop_fade_distance * self.geometry.container.height;
        interpolate(slide_y, &[0.0, fade], &[1.0, 0.0])
    }

    fn relock(&mut self) {
        self.pan_locked = is_unit(self.state.saved_scale);
        if self.pan_locked {
            self.request_scroll(true);
        }
    }

    fn enter_one_finger(&mut self) {
        let phase = if self.pan_locked {
            Phase::Locked
        } else {
            Phase::Panning { handoff: false }
        };
        self.set_phase(phase);
    }

    fn capture_focal(&mut self, mid: Point) {
        let saved = self.state.saved_scale;
        if saved <= 0.0 {
            return;
        }
        let container = self.geometry.container;
        let t = self.state.translation();
        self.state.focal = Point::new(
            (mid.x + (saved - 1.0) * container.width * 0.5 - t.x) / saved,
            (mid.y + (saved - 1.0) * container.height * 0.5 - t.y) / saved,
        );
    }

    fn abort_slide(&mut self) {
        debug!("slide aborted by a second pointer");
        let plan = settle::bounce_back(&self.state);
        self.start_plan(plan);
    }

    fn on_touches_down(&mut self, batch: &TouchBatch) {
        let n = batch.pointer_count();
        self.state.pointer_count = n;

        if self.cancel_channels(&[Channel::OffsetX, Channel::OffsetY]) {
            self.state.saved_offset = self.state.offset;
        }
        self.cancel_channels(&[Channel::ScaleOffsetX, Channel::ScaleOffsetY]);
        if self.cancel_channels(&[Channel::Scale]) {
            self.state.saved_scale = self.state.scale;
        }
        self.state.saved_scale_offset = self.state.scale_offset;

        if n >= 2 {
            self.pan_locked = false;
            if let Some(mid) = batch.midpoint() {
                self.capture_focal(mid);
            }
            if self.phase == Phase::Sliding {
                self.abort_slide();
            }
            if !matches!(self.phase, Phase::TwoFinger { .. }) {
                self.set_phase(Phase::TwoFinger { pinching: false });
            }
        } else if n == 1 && self.phase == Phase::Idle {
            self.enter_one_finger();
        }
    }

    fn on_pan_begin(&mut self, p: &PanUpdate) {
        if self.phase == Phase::Idle {
            if p.pointers >= 2 {
                self.set_phase(Phase::TwoFinger { pinching: false });
            } else {
                self.enter_one_finger();
            }
        }
        if self.phase == Phase::Locked
            && p.pointers == 1
            && p.velocity.y > self.config.slide_min_velocity_y
            && p.velocity.x.abs() < self.config.slide_max_velocity_x
            && is_unit(self.state.scale)
        {
            self.cancel_channels(&Channel::SLIDE);
            self.set_phase(Phase::Sliding);
            self.request_scroll(false);
        }
    }

    fn on_pan_update(&mut self, p: &PanUpdate) {
        trace!(
            "zoom pan {:?} pointers={} in {:?}",
            p.translation, p.pointers, self.phase
        );
        match self.phase {
            Phase::Sliding => {
                self.state.slide = p.translation;
                self.state.backdrop_opacity = self.backdrop_for(p.translation.y);
            }
            Phase::TwoFinger { .. } => {
                if p.pointers == 1 {
                    self.two_finger_released();
                    self.set_phase(Phase::Residual);
                } else {
                    self.state.offset = self.state.saved_offset + p.translation;
                }
            }
            Phase::Panning { handoff } => {
                if p.pointers >= 2 || self.state.scale < 1.0 {
                    self.state.offset = self.state.saved_offset + p.translation;
                } else {
                    self.one_finger_pan(p.translation, handoff);
                }
            }
            Phase::Idle | Phase::Locked | Phase::Residual | Phase::Closing | Phase::Closed => {}
        }
    }

    fn one_finger_pan(&mut self, translation: Vec2, was_handoff: bool) {
        if !self.geometry.is_measured() {
            return;
        }
        let bounds = self.geometry.bounds();
        let scale = self.state.scale;
        let so = self.state.scale_offset;
        let target = self.state.saved_offset + translation;

        let (x0, x1) = bounds.offset_range_x(scale, so.x);
        let x = target.x.clamp(x0, x1);
        self.state.offset.x = x;
        self.request_scroll(x != target.x);

        let mut handoff = false;
        if scale >= bounds.natural_scale() && (target.y + so.y).abs() <= bounds.max_pan_y(scale) {
            self.state.offset.y = target.y;
        } else {
            let (y0, y1) = bounds.offset_range_y(scale, so.y);
            self.state.offset.y = target.y.clamp(y0, y1);
            let overflow = target.y - y1;
            if translation.y > 0.0 && overflow > 0.0 {
                if !was_handoff {
                    self.cancel_channels(&Channel::SLIDE);
                }
                self.state.slide.y = overflow;
                self.state.backdrop_opacity = self.backdrop_for(overflow);
                handoff = true;
            }
        }
        if was_handoff && !handoff {
            self.state.slide.y = 0.0;
            self.state.backdrop_opacity = 1.0;
        }
        self.set_phase(Phase::Panning { handoff });
    }

    fn on_pan_end(&mut self, p: &PanUpdate) {
        match self.phase {
            Phase::Residual => {
                self.relock();
                self.set_phase(Phase::Idle);
            }
            Phase::TwoFinger { .. } => {
                self.relock();
                self.two_finger_released();
                self.set_phase(Phase::Idle);
            }
            phase if phase.is_one_finger() => self.one_finger_released(p.velocity),
            _ => {}
        }
    }

    fn one_finger_released(&mut self, velocity: Vec2) {
        let was_sliding = self.phase == Phase::Sliding;
        self.state.saved_offset = self.state.offset;
        self.set_phase(Phase::Idle);

        if was_sliding || self.state.slide != Vec2::ZERO {
            let gate = DismissGate::new(self.config.dismiss_threshold);
            let height = self.geometry.container.height;
            match gate.decide(self.state.slide.y, height) {
                DismissDecision::Close => {
                    debug!("slide released at {} of {height}: closing", self.state.slide.y);
                    let plan = settle::close(&self.state, height, &self.config);
                    self.start_plan(plan);
                    self.set_phase(Phase::Closing);
                    return;
                }
                DismissDecision::BounceBack => {
                    debug!("slide released at {}: bounce back", self.state.slide.y);
                    let plan = settle::bounce_back(&self.state);
                    self.start_plan(plan);
                    self.request_scroll(true);
                }
            }
        }
        self.relock();

        if self.state.saved_scale > 1.0 {
            if self.geometry.is_measured() {
                let plan = settle::fling(
                    &self.state,
                    &self.geometry.bounds(),
                    velocity,
                    self.config.deceleration,
                );
                if !plan.is_empty() {
                    debug!("fling at {velocity:?}");
                }
                self.start_plan(plan);
            }
        } else if self.state.scale < 1.0
            || (self.state.scale <= 1.0 && self.state.offset != Vec2::ZERO)
        {
            self.reset_to_identity();
        }
    }

    fn two_finger_released(&mut self) {
        self.state.pointer_count = 0;
        // Snap settles overwrite the axes they move.
        self.state.saved_offset = self.state.offset;
        if !self.geometry.is_measured() {
            return;
        }
        let plan = settle::two_finger_release(
            &self.state,
            &self.geometry.bounds(),
            self.config.snap_duration_ms,
        );
        debug!("two-finger release at scale {}", self.state.scale);
        self.start_plan(plan);
    }

    fn reset_to_identity(&mut self) {
        debug!("reset to identity from scale {}", self.state.scale);
        let plan = settle::reset_identity(&self.state, self.config.reset_duration_ms);
        self.start_plan(plan);
        self.state.saved_scale = 1.0;
        self.state.saved_offset = Vec2::ZERO;
        self.state.saved_scale_offset = Vec2::ZERO;
        self.pan_locked = true;
        self.request_scroll(true);
    }

    fn on_pinch_begin(&mut self, p: &PinchUpdate) {
        self.request_scroll(false);
        self.state.pointer_count = p.pointers;
        match self.phase {
            Phase::TwoFinger { .. } => self.set_phase(Phase::TwoFinger { pinching: true }),
            Phase::Residual => {}
            _ => {
                if self.phase == Phase::Sliding {
                    self.abort_slide();
                }
                self.state.saved_scale_offset = self.state.scale_offset;
                self.capture_focal(p.focal);
                self.set_phase(Phase::TwoFinger { pinching: true });
            }
        }
    }

    fn on_pinch_update(&mut self, p: &PinchUpdate) {
        if !matches!(self.phase, Phase::TwoFinger { .. }) || !self.geometry.is_measured() {
            return;
        }
        let saved = self.state.saved_scale;
        let scale = self.config.clamp_scale(saved * p.scale);
        self.state.scale = scale;
        if scale < 1.0 {
            self.pan_locked = false;
        }
        if scale <= 1.0 {
            self.state.scale_offset = Vec2::ZERO;
        } else {
            let w = self.geometry.content_display.width;
            let h = self.geometry.container.height;
            let focal = self.state.focal;
            let base = self.state.saved_scale_offset;
            let grow = scale - saved;
            self.state.scale_offset = Vec2::new(
                -(grow * w * 0.5 * (focal.x - w * 0.5) / (w * 0.5)) + base.x,
                -(grow * h * 0.5 * (focal.y - h * 0.5) / (h * 0.5)) + base.y,
            );
        }
        trace!("zoom pinch scale={scale} offset={:?}", self.state.scale_offset);
    }

    fn on_pinch_end(&mut self) {
        self.state.saved_scale = self.state.scale;
        let two_finger = matches!(self.phase, Phase::TwoFinger { .. });
        if self.state.scale <= 1.0 {
            self.reset_to_identity();
            if two_finger {
                self.set_phase(Phase::Residual);
            }
        } else if self.state.pointer_count == 2 {
            self.two_finger_released();
            if two_finger {
                self.set_phase(Phase::Residual);
            }
        } else if two_finger {
            self.set_phase(Phase::TwoFinger { pinching: false });
        }
    }

    fn on_settled(&mut self, settled: Settled<Channel>) {
        trace!("zoom settled {:?} at {}", settled.key, settled.value);
        match settled.key {
            Channel::OffsetX => self.state.saved_offset.x = settled.value,
            Channel::OffsetY => self.state.saved_offset.y = settled.value,
            Channel::Scale => self.state.saved_scale = settled.value,
            Channel::ScaleOffsetX | Channel::ScaleOffsetY => {}
            Channel::SlideX | Channel::SlideY | Channel::SlideScale | Channel::Backdrop => {
                let running = Channel::SLIDE.iter().any(|&c| self.timeline.is_running(c));
                if self.phase == Phase::Closing && !running {
                    self.set_phase(Phase::Closed);
                    self.events.push(ZoomEvent::CloseCompleted);
                }
            }
        }
    }
}
