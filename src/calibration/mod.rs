// src/calibration/mod.rs
//! Calibration lookups consumed by the electronics model
//!
//! The digitizer never owns calibration data. It borrows a [`Calibration`]
//! bundle for the duration of a call and resolves each channel through the
//! lookup traits below. Where the data comes from (conditions database, file,
//! test fixture) is the caller's business.

pub mod maps;

pub use maps::{IntercalibMap, PedestalMap, UniformCalibration};

use serde::{Deserialize, Serialize};

use crate::electronics::ChannelId;

/// Baseline offset and noise width of a channel, in ADC counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PedestalEntry {
    pub mean: f64,
    pub rms: f64,
}

impl PedestalEntry {
    pub fn new(mean: f64, rms: f64) -> Self {
        Self { mean, rms }
    }
}

/// ADC counts per MIP for one channel
pub type IntercalibConstant = f64;

/// Channel-keyed pedestal lookup
pub trait PedestalLookup: Send + Sync {
    fn pedestal(&self, id: ChannelId) -> Option<PedestalEntry>;
}

/// Channel-keyed intercalibration lookup
pub trait IntercalibLookup: Send + Sync {
    fn intercalib(&self, id: ChannelId) -> Option<IntercalibConstant>;
}

/// Read-only view over both calibration sources
#[derive(Clone, Copy)]
pub struct Calibration<'a> {
    pub pedestals: &'a dyn PedestalLookup,
    pub intercalib: &'a dyn IntercalibLookup,
}

impl<'a> Calibration<'a> {
    pub fn new(pedestals: &'a dyn PedestalLookup, intercalib: &'a dyn IntercalibLookup) -> Self {
        Self {
            pedestals,
            intercalib,
        }
    }
}

impl std::fmt::Debug for Calibration<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calibration").finish_non_exhaustive()
    }
}
