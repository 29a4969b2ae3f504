//! Common utility functions for es-digi
//!
//! - ADC rounding and saturation clipping
//! - Configuration validation helpers
//!
//! Numeric constants come from [`crate::config::constants`].

pub mod conversion;
pub mod validation;

pub use conversion::{round_half_away_from_zero, AdcBounds};

pub use validation::{
    validate_adc_bounds, validate_positive, validate_range, validate_sigma, ValidationError,
    ValidationResult,
};
