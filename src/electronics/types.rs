// src/electronics/types.rs
//! Core sample and configuration types for the preshower front-end

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::validation::ValidationError;

/// Opaque key of a detector element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub u32);

impl ChannelId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ES:{:#010x}", self.0)
    }
}

impl From<u32> for ChannelId {
    fn from(raw: u32) -> Self {
        ChannelId(raw)
    }
}

/// Time-ordered energy deposits for one channel, in GeV
#[derive(Debug, Clone, PartialEq)]
pub struct AnalogSamples {
    id: ChannelId,
    samples: Vec<f64>,
}

impl AnalogSamples {
    pub fn new(id: ChannelId, samples: Vec<f64>) -> Self {
        Self { id, samples }
    }

    /// Zero-filled frame of `size` time slices
    pub fn zeroed(id: ChannelId, size: usize) -> Self {
        Self {
            id,
            samples: vec![0.0; size],
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn set_id(&mut self, id: ChannelId) {
        self.id = id;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Resize to `size`, new slots filled with `value`
    pub fn resize(&mut self, size: usize, value: f64) {
        self.samples.resize(size, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.samples.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.samples.iter_mut()
    }
}

impl std::ops::Index<usize> for AnalogSamples {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

/// One digitized ADC word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EsSample(i16);

impl EsSample {
    pub fn new(adc: i16) -> Self {
        EsSample(adc)
    }

    pub fn adc(self) -> i16 {
        self.0
    }
}

impl From<i16> for EsSample {
    fn from(adc: i16) -> Self {
        EsSample(adc)
    }
}

/// Digitized frame for one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsDataFrame {
    id: ChannelId,
    samples: Vec<EsSample>,
}

impl EsDataFrame {
    /// Empty frame, sized later by `analog_to_digital`
    pub fn new(id: ChannelId) -> Self {
        Self {
            id,
            samples: Vec::new(),
        }
    }

    pub fn from_samples(id: ChannelId, samples: Vec<EsSample>) -> Self {
        Self { id, samples }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn size(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[EsSample] {
        &self.samples
    }

    /// ADC counts in time order
    pub fn adc_counts(&self) -> Vec<i16> {
        self.samples.iter().map(|s| s.adc()).collect()
    }

    /// Replace id and contents in one step
    pub(crate) fn assign(&mut self, id: ChannelId, samples: Vec<EsSample>) {
        self.id = id;
        self.samples = samples;
    }
}

impl std::ops::Index<usize> for EsDataFrame {
    type Output = EsSample;

    fn index(&self, index: usize) -> &EsSample {
        &self.samples[index]
    }
}

/// Scaling law from deposited energy to ADC counts
///
/// `Low` is the data-taking gain, `High` the calibration and low-energy gain.
/// Both currently share the same calibrated formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GainMode {
    Raw,
    Low,
    High,
}

impl GainMode {
    /// Integer code used by run configuration
    pub fn code(self) -> u8 {
        match self {
            GainMode::Raw => 0,
            GainMode::Low => 1,
            GainMode::High => 2,
        }
    }

    /// Whether the intercalibration constant enters the scale
    pub fn is_calibrated(self) -> bool {
        !matches!(self, GainMode::Raw)
    }
}

impl Default for GainMode {
    fn default() -> Self {
        GainMode::Low
    }
}

impl TryFrom<u8> for GainMode {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GainMode::Raw),
            1 => Ok(GainMode::Low),
            2 => Ok(GainMode::High),
            other => Err(ValidationError::InvalidEnumValue {
                field: "gain".to_string(),
                value: other.to_string(),
                valid_values: vec!["0".to_string(), "1".to_string(), "2".to_string()],
            }),
        }
    }
}

impl fmt::Display for GainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GainMode::Raw => write!(f, "raw"),
            GainMode::Low => write!(f, "low"),
            GainMode::High => write!(f, "high"),
        }
    }
}
