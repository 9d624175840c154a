// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when an engine configuration is unusable.
///
/// Engines never fail at runtime; out-of-range gesture input is clamped. Only
/// configuration is validated, so hosts can reject bad settings up front.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ConfigError {
    /// A field that must be strictly positive was not.
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// A field fell outside its allowed closed interval.
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied.
        value: f64,
        /// Smallest allowed value.
        min: f64,
        /// Largest allowed value.
        max: f64,
    },
    /// A lower limit exceeded its matching upper limit.
    Inverted {
        /// Name of the lower-limit field.
        low: &'static str,
        /// Name of the upper-limit field.
        high: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "`{field}` must be positive, got {value}")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "`{field}` must be within [{min}, {max}], got {value}"),
            Self::Inverted { low, high } => {
                write!(f, "`{low}` must not exceed `{high}`")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

impl ConfigError {
    /// Checks `value > 0` (NaN fails).
    pub fn ensure_positive(field: &'static str, value: f64) -> Result<(), Self> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(Self::NonPositive { field, value })
        }
    }

    /// Checks `min <= value <= max` (NaN fails).
    pub fn ensure_within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }

    /// Checks `low <= high`.
    pub fn ensure_ordered(
        low: (&'static str, f64),
        high: (&'static str, f64),
    ) -> Result<(), Self> {
        if low.1 <= high.1 {
            Ok(())
        } else {
            Err(Self::Inverted {
                low: low.0,
                high: high.0,
            })
        }
    }
}
