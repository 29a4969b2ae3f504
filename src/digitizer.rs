// src/digitizer.rs
//! Event-level digitization across channels
//!
//! Channels are independent, so an event's frames are encoded in parallel.
//! Each channel draws noise from its own stream in [`RandomStreams`], which
//! keeps the output identical to a sequential run with the same seed.

use rayon::prelude::*;
use tracing::debug;

use crate::calibration::Calibration;
use crate::electronics::{AnalogSamples, Electronics, EsDataFrame};
use crate::error::DigiResult;
use crate::random::RandomStreams;

/// Digitizes every channel of an event
#[derive(Debug, Clone)]
pub struct EventDigitizer<E: Electronics> {
    electronics: E,
    streams: RandomStreams,
}

impl<E: Electronics> EventDigitizer<E> {
    pub fn new(electronics: E, streams: RandomStreams) -> Self {
        Self {
            electronics,
            streams,
        }
    }

    pub fn electronics(&self) -> &E {
        &self.electronics
    }

    pub fn streams(&self) -> RandomStreams {
        self.streams
    }

    /// Encode all frames of `event`.
    ///
    /// Output order follows input order. Any channel failure fails the event
    /// and no frames are returned.
    pub fn digitize(
        &self,
        event: u64,
        frames: &[AnalogSamples],
        calibration: &Calibration<'_>,
    ) -> DigiResult<Vec<EsDataFrame>> {
        let digis = frames
            .par_iter()
            .map(|analog| self.digitize_channel(event, analog, calibration))
            .collect::<DigiResult<Vec<_>>>()?;

        debug!(event, channels = digis.len(), "event digitized");
        Ok(digis)
    }

    /// Encode one frame with the channel's own stream for `event`
    pub fn digitize_channel(
        &self,
        event: u64,
        analog: &AnalogSamples,
        calibration: &Calibration<'_>,
    ) -> DigiResult<EsDataFrame> {
        let mut rng = self.streams.engine(event, analog.id());
        let mut digi = EsDataFrame::new(analog.id());
        self.electronics
            .analog_to_digital(analog, calibration, Some(&mut rng), &mut digi)?;
        Ok(digi)
    }

    /// Decode all frames
    pub fn reconstruct(&self, digis: &[EsDataFrame]) -> Vec<AnalogSamples> {
        digis
            .par_iter()
            .map(|digi| {
                let mut analog = AnalogSamples::zeroed(digi.id(), 0);
                self.electronics.digital_to_analog(digi, &mut analog);
                analog
            })
            .collect()
    }
}
