// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Piecewise-linear mapping of `x` through `(input[i], output[i])` stops.
///
/// Inputs must be ascending. Outside the first/last stop the output is
/// clamped to the first/last output value. Mismatched or empty stop lists
/// return `x` unchanged.
///
/// ```
/// use tactile_motion::interpolate;
///
/// // Fade from 1 to 0 over the first 240px of travel.
/// assert_eq!(interpolate(120.0, &[0.0, 240.0], &[1.0, 0.0]), 0.5);
/// assert_eq!(interpolate(-50.0, &[0.0, 240.0], &[1.0, 0.0]), 1.0);
/// assert_eq!(interpolate(900.0, &[0.0, 240.0], &[1.0, 0.0]), 0.0);
/// ```
#[must_use]
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    if input.is_empty() || input.len() != output.len() {
        return x;
    }
    let last = input.len() - 1;
    if x <= input[0] {
        return output[0];
    }
    if x >= input[last] {
        return output[last];
    }
    for i in 0..last {
        let (x0, x1) = (input[i], input[i + 1]);
        if x <= x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return output[i + 1];
            }
            let t = (x - x0) / span;
            return output[i] + (output[i + 1] - output[i]) * t;
        }
    }
    output[last]
}

#[cfg(test)]
mod tests {
    use super::interpolate;

    #[test]
    fn maps_through_multiple_segments() {
        let input = [0.0, 0.1, 0.5, 6.0];
        let output = [0.45, 0.45, 0.5, 6.0];
        assert_eq!(interpolate(0.05, &input, &output), 0.45);
        assert!((interpolate(0.3, &input, &output) - 0.475).abs() < 1e-12);
        assert_eq!(interpolate(6.0, &input, &output), 6.0);
        assert!((interpolate(3.25, &input, &output) - 3.25).abs() < 1e-12);
    }

    #[test]
    fn clamps_outside_stops() {
        let input = [-220.0, -100.0, -20.0];
        let output = [-120.0, -100.0, 0.0];
        assert_eq!(interpolate(-1_000.0, &input, &output), -120.0);
        assert_eq!(interpolate(50.0, &input, &output), 0.0);
    }

    #[test]
    fn degenerate_stops_pass_through() {
        assert_eq!(interpolate(3.0, &[], &[]), 3.0);
        assert_eq!(interpolate(3.0, &[0.0, 1.0], &[0.0]), 3.0);
    }

    #[test]
    fn duplicate_stop_resolves_to_first_segment() {
        assert_eq!(interpolate(1.0, &[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 5.0, 6.0]), 1.0);
    }
}
