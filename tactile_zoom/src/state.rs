// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};
use tactile_motion::interpolate;

/// Animatable scalar of a [`TransformState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Pan offset, X.
    OffsetX,
    /// Pan offset, Y.
    OffsetY,
    /// Focal correction, X.
    ScaleOffsetX,
    /// Focal correction, Y.
    ScaleOffsetY,
    /// Zoom factor.
    Scale,
    /// Slide-to-dismiss translation, X.
    SlideX,
    /// Slide-to-dismiss translation, Y.
    SlideY,
    /// Slide-to-dismiss shrink factor.
    SlideScale,
    /// Backdrop opacity.
    Backdrop,
}

impl Channel {
    /// Channels moved by pan, pinch and their settle animations.
    pub const TRANSFORM: [Self; 5] = [
        Self::OffsetX,
        Self::OffsetY,
        Self::ScaleOffsetX,
        Self::ScaleOffsetY,
        Self::Scale,
    ];

    /// Channels moved by slide-to-dismiss.
    pub const SLIDE: [Self; 4] = [Self::SlideX, Self::SlideY, Self::SlideScale, Self::Backdrop];

    /// Returns `true` for the slide-to-dismiss channels.
    #[must_use]
    pub fn is_slide(self) -> bool {
        Self::SLIDE.contains(&self)
    }
}

/// Transform values of one zoomable surface.
///
/// The `saved_*` fields hold the committed values a gesture starts from;
/// the others are the live values the host renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Current zoom factor.
    pub scale: f64,
    /// Zoom factor at the start of the current gesture.
    pub saved_scale: f64,
    /// Current pan offset.
    pub offset: Vec2,
    /// Committed pan offset.
    pub saved_offset: Vec2,
    /// Translation that keeps the pinch focal point fixed.
    pub scale_offset: Vec2,
    /// Focal correction captured at touch-down.
    pub saved_scale_offset: Vec2,
    /// Slide-to-dismiss translation.
    pub slide: Vec2,
    /// Slide-to-dismiss shrink factor.
    pub slide_scale: f64,
    /// Opacity of the backdrop behind the content.
    pub backdrop_opacity: f64,
    /// Content-space point under the pinch midpoint.
    pub focal: Point,
    /// Pointers seen at the last touch-down; zero once a two-finger release was handled.
    pub pointer_count: usize,
}

impl TransformState {
    /// Untransformed state with an opaque backdrop.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        saved_scale: 1.0,
        offset: Vec2::ZERO,
        saved_offset: Vec2::ZERO,
        scale_offset: Vec2::ZERO,
        saved_scale_offset: Vec2::ZERO,
        slide: Vec2::ZERO,
        slide_scale: 1.0,
        backdrop_opacity: 1.0,
        focal: Point::ORIGIN,
        pointer_count: 0,
    };

    /// Reads a channel.
    #[must_use]
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::OffsetX => self.offset.x,
            Channel::OffsetY => self.offset.y,
            Channel::ScaleOffsetX => self.scale_offset.x,
            Channel::ScaleOffsetY => self.scale_offset.y,
            Channel::Scale => self.scale,
            Channel::SlideX => self.slide.x,
            Channel::SlideY => self.slide.y,
            Channel::SlideScale => self.slide_scale,
            Channel::Backdrop => self.backdrop_opacity,
        }
    }

    /// Writes a channel.
    pub fn set(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::OffsetX => self.offset.x = value,
            Channel::OffsetY => self.offset.y = value,
            Channel::ScaleOffsetX => self.scale_offset.x = value,
            Channel::ScaleOffsetY => self.scale_offset.y = value,
            Channel::Scale => self.scale = value,
            Channel::SlideX => self.slide.x = value,
            Channel::SlideY => self.slide.y = value,
            Channel::SlideScale => self.slide_scale = value,
            Channel::Backdrop => self.backdrop_opacity = value,
        }
    }

    /// Offset that is checked against the bounds box: `offset + scale_offset`.
    #[must_use]
    pub fn displayed_offset(&self) -> Vec2 {
        self.offset + self.scale_offset
    }

    /// Full on-screen translation, including the slide.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.displayed_offset() + self.slide
    }

    /// Scale actually rendered for the current zoom factor.
    ///
    /// Below `0.5` the visual shrink is compressed so content never renders
    /// smaller than `0.45`; from `0.5` up to `max_scale` it is the zoom factor.
    #[must_use]
    pub fn rendered_scale(&self, max_scale: f64) -> f64 {
        if (0.5..=max_scale).contains(&self.scale) {
            return self.scale;
        }
        interpolate(
            self.scale,
            &[0.0, 0.1, 0.5, max_scale, 100.0],
            &[0.45, 0.45, 0.5, max_scale, max_scale],
        )
    }

    /// Content-to-container transform for a surface of size `container`.
    ///
    /// Scaling is about the container center, followed by the translation.
    #[must_use]
    pub fn to_affine(&self, container: Size, max_scale: f64) -> Affine {
        let center = container.to_vec2() * 0.5;
        Affine::translate(center + self.translation())
            * Affine::scale(self.rendered_scale(max_scale) * self.slide_scale)
            * Affine::translate(-center)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}
