// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Pan limits of a zoomed surface.
///
/// At scale `s` the content overflows the container by `s - 1` display
/// widths horizontally and `s - natural_scale` display heights vertically.
/// Half of each overflow is the largest allowed distance of the displayed
/// offset (`offset + scale_offset`) from the center, giving a symmetric box.
///
/// An unmeasured display size yields a zero box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    display: Size,
    natural_scale: f64,
}

impl Bounds {
    /// Creates a bounds calculator for content displayed at `display` size.
    #[must_use]
    pub fn new(display: Size, natural_scale: f64) -> Self {
        Self {
            display,
            natural_scale,
        }
    }

    /// Scale at which the content fills the container height.
    #[must_use]
    pub fn natural_scale(&self) -> f64 {
        self.natural_scale
    }

    /// Half-width of the horizontal box at `scale`.
    #[must_use]
    pub fn max_pan_x(&self, scale: f64) -> f64 {
        ((scale - 1.0) * self.display.width * 0.5).max(0.0)
    }

    /// Half-height of the vertical box at `scale`; zero at or below the natural scale.
    #[must_use]
    pub fn max_pan_y(&self, scale: f64) -> f64 {
        if scale > self.natural_scale {
            ((scale - self.natural_scale) * self.display.height * 0.5).max(0.0)
        } else {
            0.0
        }
    }

    /// Both half-extents at `scale`.
    #[must_use]
    pub fn max_pan(&self, scale: f64) -> Vec2 {
        Vec2::new(self.max_pan_x(scale), self.max_pan_y(scale))
    }

    /// Interval the X pan offset may take so that `offset + scale_offset` stays in the box.
    #[must_use]
    pub fn offset_range_x(&self, scale: f64, scale_offset: f64) -> (f64, f64) {
        let m = self.max_pan_x(scale);
        (-m - scale_offset, m - scale_offset)
    }

    /// Interval the Y pan offset may take so that `offset + scale_offset` stays in the box.
    #[must_use]
    pub fn offset_range_y(&self, scale: f64, scale_offset: f64) -> (f64, f64) {
        let m = self.max_pan_y(scale);
        (-m - scale_offset, m - scale_offset)
    }

    /// Clamps a pan offset per axis so that `offset + scale_offset` is inside the box.
    #[must_use]
    pub fn clamp_offset(&self, offset: Vec2, scale: f64, scale_offset: Vec2) -> Vec2 {
        let (x0, x1) = self.offset_range_x(scale, scale_offset.x);
        let (y0, y1) = self.offset_range_y(scale, scale_offset.y);
        Vec2::new(offset.x.clamp(x0, x1), offset.y.clamp(y0, y1))
    }

    /// Signed excess of `displayed` beyond the box, per axis.
    ///
    /// Zero on an axis that is inside; positive past the upper bound and
    /// negative past the lower bound.
    #[must_use]
    pub fn overshoot(&self, displayed: Vec2, scale: f64) -> Vec2 {
        let m = self.max_pan(scale);
        Vec2::new(excess(displayed.x, m.x), excess(displayed.y, m.y))
    }

    /// Returns `true` if `displayed` is inside the box (edges included).
    #[must_use]
    pub fn contains(&self, displayed: Vec2, scale: f64) -> bool {
        self.overshoot(displayed, scale) == Vec2::ZERO
    }
}

fn excess(value: f64, max: f64) -> f64 {
    if value > max {
        value - max
    } else if value < -max {
        value + max
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::Bounds;

    fn wide() -> Bounds {
        // 300x150 content letterboxed in a 300x600 container.
        Bounds::new(Size::new(300.0, 150.0), 4.0)
    }

    #[test]
    fn horizontal_box_grows_with_scale() {
        let b = wide();
        assert_eq!(b.max_pan_x(1.0), 0.0);
        assert_eq!(b.max_pan_x(0.5), 0.0);
        assert_eq!(b.max_pan_x(2.0), 150.0);
        assert_eq!(b.max_pan_x(3.0), 300.0);
    }

    #[test]
    fn vertical_box_opens_past_natural_scale() {
        let b = wide();
        assert_eq!(b.max_pan_y(2.0), 0.0);
        assert_eq!(b.max_pan_y(4.0), 0.0);
        assert_eq!(b.max_pan_y(6.0), 150.0);
    }

    #[test]
    fn clamp_accounts_for_scale_offset() {
        let b = wide();
        let clamped = b.clamp_offset(Vec2::new(200.0, 40.0), 2.0, Vec2::new(-20.0, 0.0));
        // Displayed x may reach 150, so the pan offset may reach 170.
        assert_eq!(clamped, Vec2::new(170.0, 0.0));
        assert_eq!(b.offset_range_x(2.0, -20.0), (-130.0, 170.0));
    }

    #[test]
    fn overshoot_is_signed() {
        let b = wide();
        assert_eq!(b.overshoot(Vec2::new(160.0, 0.0), 2.0), Vec2::new(10.0, 0.0));
        assert_eq!(b.overshoot(Vec2::new(-155.0, 3.0), 2.0), Vec2::new(-5.0, 3.0));
        assert!(b.contains(Vec2::new(150.0, 0.0), 2.0));
        assert!(!b.contains(Vec2::new(150.5, 0.0), 2.0));
    }

    #[test]
    fn unmeasured_box_is_empty() {
        let b = Bounds::new(Size::ZERO, 1.0);
        assert_eq!(b.max_pan(5.0), Vec2::ZERO);
        assert_eq!(b.clamp_offset(Vec2::new(10.0, -10.0), 5.0, Vec2::ZERO), Vec2::ZERO);
    }
}
