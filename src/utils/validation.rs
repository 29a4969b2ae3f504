//! Validation utilities for es-digi
//!
//! Range and consistency checks applied to configuration before an
//! [`crate::ElectronicsSim`] is built from it.

use thiserror::Error;

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of valid range
    #[error("Field '{field}' value '{value}' is out of range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    /// Value is NaN or infinite
    #[error("Field '{field}' must be finite, got '{value}'")]
    NotFinite { field: String, value: String },

    /// Enum code that maps to no variant
    #[error("Field '{field}' value '{value}' is invalid, valid values: [{}]", .valid_values.join(", "))]
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },

    /// Cross-field validation failure
    #[error("Constraint violation for fields [{}]: {message}", .fields.join(", "))]
    ConstraintViolation { fields: Vec<String>, message: String },
}

/// Validate numeric range
pub fn validate_range<T>(value: T, min: T, max: T, field: &str) -> ValidationResult<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

/// Validate that a real value is finite and strictly positive
pub fn validate_positive(value: f64, field: &str) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            min: "0 (exclusive)".to_string(),
            max: f64::MAX.to_string(),
        });
    }
    Ok(())
}

/// Validate a Gaussian width: finite and not negative
pub fn validate_sigma(value: f64, field: &str) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    validate_range(value, 0.0, f64::MAX, field)
}

/// Saturation bounds must leave at least one representable count
pub fn validate_adc_bounds(min: i16, max: i16) -> ValidationResult<()> {
    if min >= max {
        return Err(ValidationError::ConstraintViolation {
            fields: vec!["adc_bounds.min".to_string(), "adc_bounds.max".to_string()],
            message: format!("min ({}) must be below max ({})", min, max),
        });
    }
    Ok(())
}
