//! Preshower front-end electronics model
//!
//! Converts a channel's energy deposits into ADC words:
//!
//! ```text
//! raw:        signal = E * ENERGY_SCALE                 + noise + baseline
//! low / high: signal = E * ENERGY_SCALE * adc_per_kev   + noise + baseline
//! adc         = clip(round_half_away_from_zero(signal), min, max)
//! ```
//!
//! where `adc_per_kev = intercalib / mip_kev` (intercalib in ADC per MIP,
//! `mip_kev` the MIP deposit in keV), `baseline` is the rounded pedestal mean
//! and `noise ~ N(0, pedestal.rms)` is drawn once per time slice when noise is
//! enabled.
//!
//! The inverse is not modelled yet: [`ElectronicsSim::decode`] returns a fixed
//! placeholder for every sample.

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calibration::Calibration;
use crate::config::constants::{decode, mip, units};
use crate::electronics::traits::Electronics;
use crate::electronics::types::{AnalogSamples, ChannelId, EsDataFrame, EsSample, GainMode};
use crate::error::{DigiError, DigiResult};
use crate::utils::conversion::{round_half_away_from_zero, AdcBounds};
use crate::utils::validation::{validate_positive, validate_sigma, ValidationResult};

const COMPONENT: &str = "electronics_sim";

/// Run-level electronics configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ElectronicsConfig {
    #[serde(default = "defaults::noise_enabled")]
    pub noise_enabled: bool,

    #[serde(default)]
    pub gain: GainMode,

    /// Most probable MIP deposit, keV
    #[serde(default = "defaults::mip_kev")]
    pub mip_kev: f64,

    #[serde(default)]
    pub adc_bounds: AdcBounds,
}

mod defaults {
    use crate::config::constants::mip;

    pub fn noise_enabled() -> bool { true }
    pub fn mip_kev() -> f64 { mip::DEFAULT_MIP_KEV }
}

impl Default for ElectronicsConfig {
    fn default() -> Self {
        Self {
            noise_enabled: defaults::noise_enabled(),
            gain: GainMode::default(),
            mip_kev: mip::DEFAULT_MIP_KEV,
            adc_bounds: AdcBounds::default(),
        }
    }
}

impl ElectronicsConfig {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive(self.mip_kev, "electronics.mip_kev")?;
        self.adc_bounds.validate()
    }
}

/// Single-channel preshower electronics simulation
#[derive(Debug, Clone)]
pub struct ElectronicsSim {
    config: ElectronicsConfig,
}

impl ElectronicsSim {
    /// Create a simulation with validated configuration
    pub fn new(config: ElectronicsConfig) -> DigiResult<Self> {
        config.validate()?;

        debug!(
            gain = %config.gain,
            noise = config.noise_enabled,
            mip_kev = config.mip_kev,
            adc_min = config.adc_bounds.min,
            adc_max = config.adc_bounds.max,
            "electronics simulation configured"
        );

        Ok(Self { config })
    }

    /// Default configuration with noise switched on or off
    pub fn with_noise(noise_enabled: bool) -> Self {
        Self {
            config: ElectronicsConfig {
                noise_enabled,
                ..ElectronicsConfig::default()
            },
        }
    }

    pub fn config(&self) -> &ElectronicsConfig {
        &self.config
    }

    pub fn gain(&self) -> GainMode {
        self.config.gain
    }

    pub fn noise_enabled(&self) -> bool {
        self.config.noise_enabled
    }

    pub fn mip_kev(&self) -> f64 {
        self.config.mip_kev
    }

    pub fn adc_bounds(&self) -> AdcBounds {
        self.config.adc_bounds
    }

    pub fn set_gain(&mut self, gain: GainMode) {
        self.config.gain = gain;
    }

    pub fn set_noise_enabled(&mut self, noise_enabled: bool) {
        self.config.noise_enabled = noise_enabled;
    }

    pub fn set_mip_kev(&mut self, mip_kev: f64) -> DigiResult<()> {
        validate_positive(mip_kev, "electronics.mip_kev")?;
        self.config.mip_kev = mip_kev;
        Ok(())
    }

    /// Digitize `analog` into `out`; `out` is untouched on error
    pub fn analog_to_digital(
        &self,
        analog: &AnalogSamples,
        calibration: &Calibration<'_>,
        rng: Option<&mut dyn RngCore>,
        out: &mut EsDataFrame,
    ) -> DigiResult<()> {
        let samples = self.encode(analog, calibration, rng)?;
        out.assign(analog.id(), samples);
        Ok(())
    }

    /// Fill `out` with the decoded estimate of every digital sample
    pub fn digital_to_analog(&self, digital: &EsDataFrame, out: &mut AnalogSamples) {
        out.set_id(digital.id());
        out.resize(digital.size(), decode::PLACEHOLDER_ANALOG);
        for (value, sample) in out.iter_mut().zip(digital.samples()) {
            *value = self.decode(*sample, digital.id());
        }
    }

    /// Encode one channel frame into ADC words.
    ///
    /// The random source is required only when noise is enabled. Both
    /// calibration entries must exist for the channel regardless of gain.
    pub fn encode(
        &self,
        analog: &AnalogSamples,
        calibration: &Calibration<'_>,
        rng: Option<&mut dyn RngCore>,
    ) -> DigiResult<Vec<EsSample>> {
        let rng = match (self.config.noise_enabled, rng) {
            (true, None) => {
                return Err(DigiError::configuration(
                    COMPONENT,
                    "noise is enabled but no random number source was supplied",
                ))
            }
            (true, Some(rng)) => Some(rng),
            (false, _) => None,
        };

        let id = analog.id();
        let pedestal = calibration
            .pedestals
            .pedestal(id)
            .ok_or(DigiError::MissingPedestal { channel: id })?;
        let mip_adc = calibration
            .intercalib
            .intercalib(id)
            .ok_or(DigiError::MissingIntercalib { channel: id })?;

        let baseline = round_half_away_from_zero(pedestal.mean) as f64;
        let sigma = pedestal.rms;
        let adc_per_kev = mip_adc / self.config.mip_kev;
        let gain_scale = if self.config.gain.is_calibrated() {
            adc_per_kev
        } else {
            1.0
        };

        let mut noise = match rng {
            Some(rng) => Some((gaussian(id, sigma)?, rng)),
            None => None,
        };

        let bounds = self.config.adc_bounds;
        let mut saturated = 0usize;
        let mut results = Vec::with_capacity(analog.len());

        for &energy in analog.iter() {
            let noi = match noise.as_mut() {
                Some((dist, rng)) => dist.sample(&mut **rng),
                None => 0.0,
            };

            let signal = energy * units::ENERGY_SCALE * gain_scale + noi + baseline;

            let count = round_half_away_from_zero(signal);
            if !bounds.contains(count) {
                saturated += 1;
            }
            results.push(EsSample::new(bounds.clip(count)));
        }

        if saturated > 0 {
            debug!(channel = %id, saturated, samples = analog.len(), "ADC saturated");
        }
        trace!(channel = %id, baseline, sigma, adc_per_kev, "channel encoded");

        Ok(results)
    }

    /// Analog estimate of one digital sample.
    ///
    /// Placeholder: always [`decode::PLACEHOLDER_ANALOG`]. No physical inverse
    /// of the encode path is implemented.
    pub fn decode(&self, _sample: EsSample, _id: ChannelId) -> f64 {
        decode::PLACEHOLDER_ANALOG
    }
}

impl Default for ElectronicsSim {
    fn default() -> Self {
        Self {
            config: ElectronicsConfig::default(),
        }
    }
}

impl Electronics for ElectronicsSim {
    fn analog_to_digital(
        &self,
        analog: &AnalogSamples,
        calibration: &Calibration<'_>,
        rng: Option<&mut dyn RngCore>,
        out: &mut EsDataFrame,
    ) -> DigiResult<()> {
        ElectronicsSim::analog_to_digital(self, analog, calibration, rng, out)
    }

    fn digital_to_analog(&self, digital: &EsDataFrame, out: &mut AnalogSamples) {
        ElectronicsSim::digital_to_analog(self, digital, out)
    }
}

fn gaussian(id: ChannelId, sigma: f64) -> DigiResult<Normal<f64>> {
    validate_sigma(sigma, "pedestal.rms").map_err(|e| {
        DigiError::configuration(COMPONENT, format!("channel {}: {}", id, e))
    })?;
    Normal::new(0.0, sigma).map_err(|e| {
        DigiError::configuration(COMPONENT, format!("channel {}: {}", id, e))
    })
}
