// tests/error_propagation_tests.rs
//! Error propagation across the configuration, electronics and event layers
//!
//! Checks that:
//! - Each failure surfaces as the right `DigiError` variant
//! - Checks run in a fixed order (random source, pedestal, intercalibration)
//! - A failed encode leaves the caller's output untouched
//! - Error messages carry the channel and component

use es_digi::calibration::{Calibration, IntercalibMap, PedestalEntry, PedestalMap};
use es_digi::config::{ConfigError, ConfigLoader};
use es_digi::electronics::{
    AnalogSamples, ChannelId, ElectronicsConfig, ElectronicsSim, EsDataFrame, EsSample, GainMode,
};
use es_digi::utils::{AdcBounds, ValidationError};
use es_digi::{DigiError, DigiResult, EventDigitizer, RandomStreams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use tempfile::NamedTempFile;

fn empty_calibration() -> (PedestalMap, IntercalibMap) {
    (PedestalMap::new(), IntercalibMap::new())
}

/// Encoding with noise and no random source is a configuration error
#[test]
fn test_missing_rng_reported_before_lookups() {
    let (peds, mips) = empty_calibration();
    let calibration = Calibration::new(&peds, &mips);
    let sim = ElectronicsSim::with_noise(true);

    let err = sim
        .encode(&AnalogSamples::zeroed(ChannelId(5), 3), &calibration, None)
        .unwrap_err();

    match &err {
        DigiError::Configuration { component, reason } => {
            assert_eq!(component, "electronics_sim");
            assert!(reason.contains("random"));
        }
        other => panic!("Expected Configuration error, got: {:?}", other),
    }
    assert!(err.is_configuration());
    assert!(!err.is_lookup());
    assert_eq!(err.channel(), None);
}

/// A channel with neither entry reports the pedestal first
#[test]
fn test_pedestal_checked_before_intercalib() {
    let (peds, mips) = empty_calibration();
    let calibration = Calibration::new(&peds, &mips);
    let mut rng = StdRng::seed_from_u64(0);

    for gain in [GainMode::Raw, GainMode::Low, GainMode::High] {
        let mut sim = ElectronicsSim::with_noise(true);
        sim.set_gain(gain);

        let err = sim
            .encode(&AnalogSamples::zeroed(ChannelId(8), 2), &calibration, Some(&mut rng))
            .unwrap_err();
        assert!(matches!(err, DigiError::MissingPedestal { channel } if channel == ChannelId(8)));
    }
}

#[test]
fn test_lookup_error_message_names_channel() {
    let peds: PedestalMap = std::iter::once((ChannelId(0x1234), PedestalEntry::new(1000.0, 5.0)))
        .collect();
    let mips = IntercalibMap::new();
    let calibration = Calibration::new(&peds, &mips);

    let err = ElectronicsSim::with_noise(false)
        .encode(&AnalogSamples::zeroed(ChannelId(0x1234), 1), &calibration, None)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("LOOKUP"));
    assert!(message.contains("intercalibration"));
    assert!(message.contains("0x00001234"));
    assert_eq!(err.channel(), Some(ChannelId(0x1234)));
}

#[test]
fn test_failed_encode_leaves_output_untouched() {
    let (peds, mips) = empty_calibration();
    let calibration = Calibration::new(&peds, &mips);
    let sim = ElectronicsSim::with_noise(false);

    let previous = EsDataFrame::from_samples(ChannelId(99), vec![EsSample::new(7); 4]);
    let mut out = previous.clone();
    let result = sim.analog_to_digital(
        &AnalogSamples::zeroed(ChannelId(1), 3),
        &calibration,
        None,
        &mut out,
    );

    assert!(result.is_err());
    assert_eq!(out, previous);
}

#[test]
fn test_invalid_pedestal_rms_is_configuration_error() {
    let peds: PedestalMap = std::iter::once((ChannelId(4), PedestalEntry::new(1000.0, f64::NAN)))
        .collect();
    let mips: IntercalibMap = std::iter::once((ChannelId(4), 55.0)).collect();
    let calibration = Calibration::new(&peds, &mips);
    let mut rng = StdRng::seed_from_u64(1);

    let err = ElectronicsSim::with_noise(true)
        .encode(&AnalogSamples::zeroed(ChannelId(4), 2), &calibration, Some(&mut rng))
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("ES:0x00000004"));
}

#[test]
fn test_validation_error_conversion() {
    let config = ElectronicsConfig {
        mip_kev: -1.0,
        ..ElectronicsConfig::default()
    };

    let err = ElectronicsSim::new(config).unwrap_err();
    assert!(matches!(err, DigiError::Validation(_)));
    assert!(err.to_string().starts_with("[VALIDATION]"));

    let bounds_err = AdcBounds::new(10, -10).unwrap_err();
    assert!(matches!(bounds_err, ValidationError::ConstraintViolation { .. }));
}

#[test]
fn test_config_error_conversion() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[electronics]\nmip_kev = \"not a number\"")?;

    let mut loader = ConfigLoader::with_paths(vec![file.path().to_path_buf()]);
    let load_err = loader.load().unwrap_err();
    assert!(matches!(load_err, ConfigError::ParseError(_)));

    let err: DigiError = load_err.into();
    assert!(err.is_configuration());
    assert!(err.to_string().starts_with("[CONFIG]"));
    Ok(())
}

#[test]
fn test_event_error_propagates_from_channel() {
    let peds: PedestalMap = (0..4u32)
        .filter(|&i| i != 2)
        .map(|i| (ChannelId(i), PedestalEntry::new(1000.0, 5.0)))
        .collect();
    let mips: IntercalibMap = (0..4u32).map(|i| (ChannelId(i), 55.0)).collect();
    let calibration = Calibration::new(&peds, &mips);
    let digitizer = EventDigitizer::new(ElectronicsSim::with_noise(true), RandomStreams::new(3));

    let frames: Vec<_> = (0..4u32)
        .map(|i| AnalogSamples::zeroed(ChannelId(i), 3))
        .collect();
    let result: DigiResult<_> = digitizer.digitize(0, &frames, &calibration);

    let err = result.unwrap_err();
    assert!(matches!(err, DigiError::MissingPedestal { .. }));
    assert_eq!(err.channel(), Some(ChannelId(2)));
}

#[test]
fn test_errors_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<DigiError>();
    assert_send_sync::<ConfigError>();
}
