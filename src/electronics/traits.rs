// src/electronics/traits.rs
//! Front-end abstraction shared by the single-channel model and the event digitizer

use rand::RngCore;

use crate::calibration::Calibration;
use crate::electronics::types::{AnalogSamples, EsDataFrame};
use crate::error::DigiResult;

/// Analog ↔ digital conversion for one channel frame
pub trait Electronics: Send + Sync {
    /// Digitize `analog` into `out`.
    ///
    /// `out` is resized to the analog length and takes its channel. On error
    /// `out` is left as it was.
    fn analog_to_digital(
        &self,
        analog: &AnalogSamples,
        calibration: &Calibration<'_>,
        rng: Option<&mut dyn RngCore>,
        out: &mut EsDataFrame,
    ) -> DigiResult<()>;

    /// Estimate the analog frame behind `digital`
    fn digital_to_analog(&self, digital: &EsDataFrame, out: &mut AnalogSamples);
}
