//! es-digi: preshower front-end electronics simulation
//!
//! Converts simulated analog pulses (energy deposits per time slice) into
//! 12-bit ADC words the way the preshower readout does:
//!
//! - Pedestal baseline offset per channel
//! - Raw or intercalibrated gain scaling
//! - Optional Gaussian electronic noise with the pedestal RMS
//! - Half-away-from-zero rounding and saturation clipping
//!
//! Calibration and random numbers are injected capabilities, never globals.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use es_digi::calibration::{Calibration, UniformCalibration};
//! use es_digi::electronics::{AnalogSamples, ChannelId, ElectronicsSim, EsDataFrame};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sim = ElectronicsSim::with_noise(true);
//!     let conditions = UniformCalibration::default();
//!     let calibration = Calibration::new(&conditions, &conditions);
//!     let mut rng = StdRng::seed_from_u64(42);
//!
//!     let analog = AnalogSamples::new(ChannelId(1), vec![0.0, 1.2e-4, 4.0e-5]);
//!     let mut digi = EsDataFrame::new(ChannelId(1));
//!     sim.analog_to_digital(&analog, &calibration, Some(&mut rng), &mut digi)?;
//!
//!     println!("ADC: {:?}", digi.adc_counts());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod calibration;
pub mod config;
pub mod digitizer;
pub mod electronics;
pub mod error;
pub mod random;
pub mod utils;

pub use calibration::{Calibration, IntercalibLookup, PedestalEntry, PedestalLookup};
pub use digitizer::EventDigitizer;
pub use electronics::{
    AnalogSamples, ChannelId, Electronics, ElectronicsConfig, ElectronicsSim, EsDataFrame,
    EsSample, GainMode,
};
pub use error::{DigiError, DigiResult};
pub use random::{RandomStreams, StreamRng};
pub use utils::AdcBounds;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: "Preshower front-end electronics simulation".to_string(),
    }
}

/// Library version information
#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
