// src/config/constants.rs
//! Digitization constants

/// ADC word constants for the preshower front-end
pub mod adc {
    /// Width of the ES ADC word
    pub const ADC_BITS: u32 = 12;
    /// Upper saturation bound, `2^12 - 1`
    pub const MAX_ADC: i16 = 4095;
    /// Lower saturation bound; the word is unsigned
    pub const MIN_ADC: i16 = 0;
}

/// Energy unit conversion
pub mod units {
    /// Scale applied to every analog sample before gain is applied.
    ///
    /// Converts GeV to keV. The encode formula depends on this exact value.
    pub const ENERGY_SCALE: f64 = 1_000_000.0;
}

/// Silicon sensor response, in the keV units produced by [`super::units::ENERGY_SCALE`]
pub mod mip {
    /// Most probable MIP deposit in 300 um silicon
    pub const MIP_300UM_KEV: f64 = 78.47;
    /// Most probable MIP deposit in 310 um silicon
    pub const MIP_310UM_KEV: f64 = 81.08;
    /// Most probable MIP deposit in 320 um silicon
    pub const MIP_320UM_KEV: f64 = 83.7;

    pub const DEFAULT_MIP_KEV: f64 = MIP_310UM_KEV;
}

/// Calibration fallbacks used by [`crate::calibration`] uniform maps
pub mod calibration {
    pub const DEFAULT_PEDESTAL_MEAN: f64 = 1000.0;
    pub const DEFAULT_PEDESTAL_RMS: f64 = 6.0;
    /// ADC counts per MIP in low gain
    pub const DEFAULT_INTERCALIB_ADC_PER_MIP: f64 = 55.0;
}

/// Random stream seeding
pub mod random {
    pub const DEFAULT_SEED: u64 = 12345;
}

/// Decode placeholder
pub mod decode {
    /// Value returned for every digital sample until a physical inverse exists
    pub const PLACEHOLDER_ANALOG: f64 = 0.0;
}

/// Configuration file locations
pub mod paths {
    pub const SYSTEM_CONFIG_PATH: &str = "/etc/es-digi/config.toml";
    pub const USER_CONFIG_DIR: &str = ".config/es-digi";
    pub const DEFAULT_CONFIG_FILE: &str = "config/default.toml";
    pub const LOCAL_CONFIG_FILE: &str = "es-digi.toml";

    /// Prefix for environment overrides, e.g. `ESDIGI_ELECTRONICS_GAIN=high`
    pub const ENV_PREFIX: &str = "ESDIGI_";
}
