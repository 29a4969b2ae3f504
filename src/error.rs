// src/error.rs
//! Unified error handling for es-digi
//!
//! Every fallible operation returns [`DigiResult`]. Failures are fatal for the
//! call that raised them: encode either produces a full frame or nothing.

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::electronics::ChannelId;
use crate::utils::validation::ValidationError;

/// Unified error type for digitization
#[derive(Debug, Error)]
pub enum DigiError {
    /// Missing capability or unusable setup
    #[error("[CONFIG] Configuration error in {component}: {reason}")]
    Configuration { component: String, reason: String },

    /// No pedestal entry for a processed channel
    #[error("[LOOKUP] No pedestal entry for channel {channel}")]
    MissingPedestal { channel: ChannelId },

    /// No intercalibration constant for a processed channel
    #[error("[LOOKUP] No intercalibration constant for channel {channel}")]
    MissingIntercalib { channel: ChannelId },

    /// Configuration value rejected by validation
    #[error("[VALIDATION] {0}")]
    Validation(#[from] ValidationError),

    /// Configuration file could not be loaded
    #[error("[CONFIG] {0}")]
    Config(#[from] ConfigError),
}

impl DigiError {
    /// Build a configuration error
    pub fn configuration(component: &str, reason: impl Into<String>) -> Self {
        DigiError::Configuration {
            component: component.to_string(),
            reason: reason.into(),
        }
    }

    /// True for missing calibration entries
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            DigiError::MissingPedestal { .. } | DigiError::MissingIntercalib { .. }
        )
    }

    /// True for setup problems, including rejected configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DigiError::Configuration { .. } | DigiError::Validation(_) | DigiError::Config(_)
        )
    }

    /// Channel the error refers to, if any
    pub fn channel(&self) -> Option<ChannelId> {
        match self {
            DigiError::MissingPedestal { channel } | DigiError::MissingIntercalib { channel } => {
                Some(*channel)
            }
            _ => None,
        }
    }
}

/// Result type alias for digitization operations
pub type DigiResult<T> = Result<T, DigiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_builder() {
        let err = DigiError::configuration("electronics_sim", "random source missing");

        match &err {
            DigiError::Configuration { component, reason } => {
                assert_eq!(component, "electronics_sim");
                assert_eq!(reason, "random source missing");
            }
            _ => panic!("Expected configuration error"),
        }
        assert!(err.is_configuration());
        assert!(!err.is_lookup());
    }

    #[test]
    fn test_lookup_error_display() {
        let err = DigiError::MissingPedestal { channel: ChannelId(0x12) };
        let display = format!("{}", err);
        assert!(display.contains("pedestal"));
        assert!(display.contains("0x00000012"));
        assert!(err.is_lookup());
        assert_eq!(err.channel(), Some(ChannelId(0x12)));
    }

    #[test]
    fn test_validation_conversion() {
        let validation = ValidationError::NotFinite {
            field: "mip_kev".to_string(),
            value: "NaN".to_string(),
        };
        let err: DigiError = validation.into();

        assert!(matches!(err, DigiError::Validation(_)));
        assert!(err.is_configuration());
        assert_eq!(err.channel(), None);
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DigiError>();
    }
}
