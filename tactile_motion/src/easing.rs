// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Easing curve mapping normalized time `t ∈ [0, 1]` to progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Accelerating quadratic.
    InQuad,
    /// Decelerating quadratic.
    OutQuad,
    /// Quadratic ease in, then ease out. This is the default for timing animations.
    #[default]
    InOutQuad,
    /// Decelerating cubic.
    OutCubic,
}

impl Easing {
    /// Progress at normalized time `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Self::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }

    /// Derivative of [`Easing::apply`] with respect to `t`.
    #[must_use]
    pub fn slope(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => 1.0,
            Self::InQuad => 2.0 * t,
            Self::OutQuad => 2.0 - 2.0 * t,
            Self::InOutQuad => {
                if t < 0.5 {
                    4.0 * t
                } else {
                    4.0 * (1.0 - t)
                }
            }
            Self::OutCubic => {
                let u = 1.0 - t;
                3.0 * u * u
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::OutCubic,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for e in ALL {
            assert!(e.apply(0.0).abs() < 1e-12, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for e in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = e.apply(f64::from(i) / 100.0);
                assert!(v + 1e-12 >= prev, "{e:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_of_range_time_is_clamped() {
        assert_eq!(Easing::InOutQuad.apply(-1.0), 0.0);
        assert_eq!(Easing::InOutQuad.apply(3.0), 1.0);
    }

    #[test]
    fn in_out_quad_is_symmetric() {
        let e = Easing::InOutQuad;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-12);
    }
}
