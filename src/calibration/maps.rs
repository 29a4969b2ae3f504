// src/calibration/maps.rs
//! In-memory calibration sources

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{IntercalibConstant, IntercalibLookup, PedestalEntry, PedestalLookup};
use crate::config::constants::calibration;
use crate::electronics::ChannelId;

/// Pedestals keyed by channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PedestalMap {
    entries: HashMap<ChannelId, PedestalEntry>,
}

impl PedestalMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ChannelId, entry: PedestalEntry) -> Option<PedestalEntry> {
        self.entries.insert(id, entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ChannelId, PedestalEntry)> for PedestalMap {
    fn from_iter<I: IntoIterator<Item = (ChannelId, PedestalEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl PedestalLookup for PedestalMap {
    fn pedestal(&self, id: ChannelId) -> Option<PedestalEntry> {
        self.entries.get(&id).copied()
    }
}

/// Intercalibration constants keyed by channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntercalibMap {
    constants: HashMap<ChannelId, IntercalibConstant>,
}

impl IntercalibMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ChannelId, adc_per_mip: IntercalibConstant) -> Option<IntercalibConstant> {
        self.constants.insert(id, adc_per_mip)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

impl FromIterator<(ChannelId, IntercalibConstant)> for IntercalibMap {
    fn from_iter<I: IntoIterator<Item = (ChannelId, IntercalibConstant)>>(iter: I) -> Self {
        Self {
            constants: iter.into_iter().collect(),
        }
    }
}

impl IntercalibLookup for IntercalibMap {
    fn intercalib(&self, id: ChannelId) -> Option<IntercalibConstant> {
        self.constants.get(&id).copied()
    }
}

/// Same pedestal and intercalibration for every channel
///
/// Used for standalone runs where no per-channel conditions are available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UniformCalibration {
    pub pedestal_mean: f64,
    pub pedestal_rms: f64,
    pub adc_per_mip: f64,
}

impl Default for UniformCalibration {
    fn default() -> Self {
        Self {
            pedestal_mean: calibration::DEFAULT_PEDESTAL_MEAN,
            pedestal_rms: calibration::DEFAULT_PEDESTAL_RMS,
            adc_per_mip: calibration::DEFAULT_INTERCALIB_ADC_PER_MIP,
        }
    }
}

impl PedestalLookup for UniformCalibration {
    fn pedestal(&self, _id: ChannelId) -> Option<PedestalEntry> {
        Some(PedestalEntry::new(self.pedestal_mean, self.pedestal_rms))
    }
}

impl IntercalibLookup for UniformCalibration {
    fn intercalib(&self, _id: ChannelId) -> Option<IntercalibConstant> {
        Some(self.adc_per_mip)
    }
}
