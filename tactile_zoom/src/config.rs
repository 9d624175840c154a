// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tactile_gesture::ConfigError;

/// Tunables for a [`ZoomSurface`](crate::ZoomSurface).
///
/// Fractions (`dismiss_threshold`, `dismiss_travel`, `backdrop_fade_distance`)
/// are relative to the container height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Smallest scale a pinch can reach.
    pub min_scale: f64,
    /// Largest scale a pinch can reach.
    pub max_scale: f64,
    /// Slide distance (fraction of height) at which a release closes the surface.
    pub dismiss_threshold: f64,
    /// Duration of the close animation.
    pub dismiss_duration_ms: u64,
    /// Final slide distance (fraction of height) of the close animation.
    pub dismiss_travel: f64,
    /// Final slide scale of the close animation.
    pub dismiss_scale: f64,
    /// Slide distance (fraction of height) over which the backdrop fades out.
    pub backdrop_fade_distance: f64,
    /// Duration of the snap back into bounds after a two-finger gesture.
    pub snap_duration_ms: u64,
    /// Duration of the reset to identity after zooming out.
    pub reset_duration_ms: u64,
    /// Fling deceleration per millisecond.
    pub deceleration: f64,
    /// Minimum downward velocity (px/s) that starts a slide.
    pub slide_min_velocity_y: f64,
    /// Maximum horizontal speed (px/s) that still starts a slide.
    pub slide_max_velocity_x: f64,
}

impl ZoomConfig {
    /// Default configuration.
    pub const DEFAULT: Self = Self {
        min_scale: 0.1,
        max_scale: 6.0,
        dismiss_threshold: 0.15,
        dismiss_duration_ms: 360,
        dismiss_travel: 0.5,
        dismiss_scale: 0.5,
        backdrop_fade_distance: 0.3,
        snap_duration_ms: 100,
        reset_duration_ms: 300,
        deceleration: tactile_motion::DEFAULT_DECELERATION,
        slide_min_velocity_y: 100.0,
        slide_max_velocity_x: 50.0,
    };

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::ensure_positive("min_scale", self.min_scale)?;
        ConfigError::ensure_within("min_scale", self.min_scale, 0.0, 1.0)?;
        ConfigError::ensure_within("max_scale", self.max_scale, 1.0, f64::MAX)?;
        ConfigError::ensure_ordered(
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        )?;
        ConfigError::ensure_positive("dismiss_threshold", self.dismiss_threshold)?;
        ConfigError::ensure_within("dismiss_threshold", self.dismiss_threshold, 0.0, 1.0)?;
        ConfigError::ensure_within("dismiss_travel", self.dismiss_travel, 0.0, 1.0)?;
        ConfigError::ensure_within("dismiss_scale", self.dismiss_scale, 0.0, 1.0)?;
        ConfigError::ensure_positive("backdrop_fade_distance", self.backdrop_fade_distance)?;
        ConfigError::ensure_positive("deceleration", self.deceleration)?;
        ConfigError::ensure_within("deceleration", self.deceleration, 0.0, 1.0)?;
        ConfigError::ensure_within("slide_min_velocity_y", self.slide_min_velocity_y, 0.0, f64::MAX)?;
        ConfigError::ensure_within("slide_max_velocity_x", self.slide_max_velocity_x, 0.0, f64::MAX)?;
        Ok(())
    }

    /// Returns a copy with the scale limits normalized.
    ///
    /// The limits are swapped if inverted, then widened so that `1.0` is
    /// always reachable.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.min_scale > self.max_scale {
            core::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        if !(f64::MIN_POSITIVE..=1.0).contains(&self.min_scale) {
            self.min_scale = Self::DEFAULT.min_scale;
        }
        if self.max_scale.is_nan() || self.max_scale < 1.0 {
            self.max_scale = 1.0;
        }
        self
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use tactile_gesture::ConfigError;

    use super::ZoomConfig;

    #[test]
    fn default_is_valid() {
        assert_eq!(ZoomConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_limits_are_rejected_then_sanitized() {
        let cfg = ZoomConfig {
            min_scale: 0.5,
            max_scale: 0.2,
            ..ZoomConfig::DEFAULT
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange {
                field: "max_scale",
                ..
            })
        ));

        let fixed = cfg.sanitized();
        assert_eq!(fixed.min_scale, 0.2);
        assert_eq!(fixed.max_scale, 1.0);
        assert_eq!(fixed.clamp_scale(3.0), 1.0);
    }

    #[test]
    fn threshold_must_be_positive() {
        let cfg = ZoomConfig {
            dismiss_threshold: 0.0,
            ..ZoomConfig::DEFAULT
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                field: "dismiss_threshold",
                value: 0.0
            })
        );
    }
}
