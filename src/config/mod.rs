// src/config/mod.rs
//! Digitization configuration

pub mod constants;
pub mod loader;

pub use constants::*;
pub use loader::{ConfigError, ConfigLoader};

use serde::{Deserialize, Serialize};

use crate::calibration::UniformCalibration;
use crate::digitizer::EventDigitizer;
use crate::electronics::{ElectronicsConfig, ElectronicsSim};
use crate::error::DigiResult;
use crate::random::RandomStreams;
use crate::utils::validation::{validate_positive, validate_sigma, ValidationResult};

/// Complete run configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct DigitizerConfig {
    #[serde(default)]
    pub electronics: ElectronicsConfig,

    #[serde(default)]
    pub random: RandomConfig,

    /// Fallback calibration for runs without per-channel conditions
    #[serde(default)]
    pub calibration: UniformCalibration,
}

/// Random stream settings
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RandomConfig {
    #[serde(default = "defaults::seed")]
    pub seed: u64,
}

mod defaults {
    use crate::config::constants::random;

    pub fn seed() -> u64 { random::DEFAULT_SEED }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            seed: defaults::seed(),
        }
    }
}

impl DigitizerConfig {
    /// Validate every section
    pub fn validate(&self) -> ValidationResult<()> {
        self.electronics.validate()?;
        validate_sigma(self.calibration.pedestal_rms, "calibration.pedestal_rms")?;
        validate_positive(self.calibration.adc_per_mip, "calibration.adc_per_mip")?;
        Ok(())
    }

    pub fn electronics_sim(&self) -> DigiResult<ElectronicsSim> {
        ElectronicsSim::new(self.electronics.clone())
    }

    pub fn random_streams(&self) -> RandomStreams {
        RandomStreams::new(self.random.seed)
    }

    /// Event digitizer wired from this configuration
    pub fn event_digitizer(&self) -> DigiResult<EventDigitizer<ElectronicsSim>> {
        Ok(EventDigitizer::new(self.electronics_sim()?, self.random_streams()))
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "gain={} noise={} mip_kev={} adc=[{}, {}] seed={}",
            self.electronics.gain,
            self.electronics.noise_enabled,
            self.electronics.mip_kev,
            self.electronics.adc_bounds.min,
            self.electronics.adc_bounds.max,
            self.random.seed
        )
    }
}
