//! Conversion utilities for es-digi
//!
//! Turns a real-valued front-end signal into an ADC word:
//! - rounding half away from zero
//! - saturation clipping to the configured ADC range
//!
//! The rounding rule is part of the numeric model and must not be replaced by
//! `f64::round_ties_even` or a plain cast.

use serde::{Deserialize, Serialize};

use crate::config::constants::adc;
use crate::utils::validation::{validate_adc_bounds, ValidationResult};

/// Closed saturation range of the ADC word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdcBounds {
    pub min: i16,
    pub max: i16,
}

impl AdcBounds {
    /// Create validated bounds
    pub fn new(min: i16, max: i16) -> ValidationResult<Self> {
        validate_adc_bounds(min, max)?;
        Ok(Self { min, max })
    }

    /// Check the invariant `min < max`
    pub fn validate(&self) -> ValidationResult<()> {
        validate_adc_bounds(self.min, self.max)
    }

    /// Clip an integer count into `[min, max]`
    pub fn clip(&self, count: i64) -> i16 {
        // min/max are i16 so the clamped value always fits
        count.clamp(self.min as i64, self.max as i64) as i16
    }

    pub fn contains(&self, count: i64) -> bool {
        count >= self.min as i64 && count <= self.max as i64
    }
}

impl Default for AdcBounds {
    fn default() -> Self {
        Self {
            min: adc::MIN_ADC,
            max: adc::MAX_ADC,
        }
    }
}

/// Round half away from zero, then truncate toward zero.
///
/// `2.5 -> 3`, `-2.5 -> -3`, `0.0 -> 0`. Values outside `i64` saturate, NaN
/// maps to 0.
pub fn round_half_away_from_zero(signal: f64) -> i64 {
    let shifted = if signal > 0.0 {
        signal + 0.5
    } else if signal < 0.0 {
        signal - 0.5
    } else {
        signal
    };
    shifted.trunc() as i64
}
