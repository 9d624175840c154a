// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::bounds::Bounds;

/// Measured layout of a zoomable surface.
///
/// `content_display` is the size the content occupies at scale `1` inside
/// `container`. `natural_scale` is the scale at which letterboxed content
/// fills the container vertically (`1` when it already does).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    /// Size of the surface's container.
    pub container: Size,
    /// Displayed content size at scale `1`.
    pub content_display: Size,
    /// Scale at which the content fills the container height.
    pub natural_scale: f64,
}

impl ViewportGeometry {
    /// Geometry before layout or image load.
    pub const UNMEASURED: Self = Self {
        container: Size::ZERO,
        content_display: Size::ZERO,
        natural_scale: 1.0,
    };

    /// Creates geometry from an already laid-out content size.
    #[must_use]
    pub fn new(container: Size, content_display: Size) -> Self {
        let natural_scale =
            if content_display.height > 0.0 && content_display.height < container.height {
                container.height / content_display.height
            } else {
                1.0
            };
        Self {
            container,
            content_display,
            natural_scale,
        }
    }

    /// Lays out content of intrinsic size `content` with a contain fit.
    ///
    /// Wide content spans the container width and is letterboxed
    /// vertically. Tall content spans the container height.
    ///
    /// ```
    /// use kurbo::Size;
    /// use tactile_zoom::ViewportGeometry;
    ///
    /// let g = ViewportGeometry::fit(Size::new(400.0, 800.0), Size::new(2000.0, 1000.0));
    /// assert_eq!(g.content_display, Size::new(400.0, 200.0));
    /// assert_eq!(g.natural_scale, 4.0);
    /// ```
    #[must_use]
    pub fn fit(container: Size, content: Size) -> Self {
        if !container.is_finite()
            || container.width <= 0.0
            || container.height <= 0.0
            || content.width <= 0.0
            || content.height <= 0.0
        {
            return Self {
                container,
                ..Self::UNMEASURED
            };
        }
        let fitted_height = container.width * content.height / content.width;
        let display = if fitted_height < container.height {
            Size::new(container.width, fitted_height)
        } else {
            Size::new(
                container.height * content.width / content.height,
                container.height,
            )
        };
        Self::new(container, display)
    }

    /// Returns `true` once both container and content have a non-zero size.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.container.width > 0.0
            && self.container.height > 0.0
            && self.content_display.width > 0.0
            && self.content_display.height > 0.0
    }

    /// Bounds calculator for this geometry.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.content_display, self.natural_scale)
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::UNMEASURED
    }
}
