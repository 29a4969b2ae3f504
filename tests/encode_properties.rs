// tests/encode_properties.rs
//! Property tests for the single-channel encode path

use es_digi::calibration::{Calibration, PedestalEntry, PedestalMap, IntercalibMap};
use es_digi::electronics::{AnalogSamples, ChannelId, ElectronicsConfig, ElectronicsSim, GainMode};
use es_digi::utils::{round_half_away_from_zero, AdcBounds};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn conditions(id: ChannelId, mean: f64, rms: f64, adc_per_mip: f64) -> (PedestalMap, IntercalibMap) {
    let peds: PedestalMap = std::iter::once((id, PedestalEntry::new(mean, rms))).collect();
    let mips: IntercalibMap = std::iter::once((id, adc_per_mip)).collect();
    (peds, mips)
}

fn sim(gain: GainMode, noise_enabled: bool) -> ElectronicsSim {
    ElectronicsSim::new(ElectronicsConfig {
        gain,
        noise_enabled,
        ..ElectronicsConfig::default()
    })
    .unwrap()
}

fn gain_strategy() -> impl Strategy<Value = GainMode> {
    prop_oneof![Just(GainMode::Raw), Just(GainMode::Low), Just(GainMode::High)]
}

proptest! {
    #[test]
    fn prop_frame_shape_follows_input(
        raw_id in any::<u32>(),
        energies in prop::collection::vec(-1.0e-3f64..1.0e-3, 0..16),
        gain in gain_strategy(),
        seed in any::<u64>(),
    ) {
        let id = ChannelId(raw_id);
        let (peds, mips) = conditions(id, 1000.0, 6.0, 55.0);
        let calibration = Calibration::new(&peds, &mips);
        let mut rng = StdRng::seed_from_u64(seed);

        let samples = sim(gain, true)
            .encode(&AnalogSamples::new(id, energies.clone()), &calibration, Some(&mut rng))
            .unwrap();

        prop_assert_eq!(samples.len(), energies.len());
    }

    #[test]
    fn prop_raw_noiseless_matches_formula(
        energies in prop::collection::vec(-5.0e-3f64..5.0e-3, 1..12),
        mean in -500.0f64..2000.0,
    ) {
        let id = ChannelId(7);
        let (peds, mips) = conditions(id, mean, 6.0, 55.0);
        let calibration = Calibration::new(&peds, &mips);

        let samples = sim(GainMode::Raw, false)
            .encode(&AnalogSamples::new(id, energies.clone()), &calibration, None)
            .unwrap();

        let baseline = round_half_away_from_zero(mean) as f64;
        let bounds = AdcBounds::default();
        for (sample, energy) in samples.iter().zip(&energies) {
            let expected = bounds.clip(round_half_away_from_zero(energy * 1.0e6 + baseline));
            prop_assert_eq!(sample.adc(), expected);
        }
    }

    #[test]
    fn prop_output_within_bounds(
        energies in prop::collection::vec(-1.0f64..1.0, 1..12),
        gain in gain_strategy(),
        min in -4095i16..0,
        max in 1i16..4096,
        seed in any::<u64>(),
    ) {
        let id = ChannelId(3);
        let (peds, mips) = conditions(id, 1000.0, 20.0, 55.0);
        let calibration = Calibration::new(&peds, &mips);
        let sim = ElectronicsSim::new(ElectronicsConfig {
            gain,
            noise_enabled: true,
            adc_bounds: AdcBounds::new(min, max).unwrap(),
            ..ElectronicsConfig::default()
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        let samples = sim
            .encode(&AnalogSamples::new(id, energies), &calibration, Some(&mut rng))
            .unwrap();

        for sample in samples {
            prop_assert!(sample.adc() >= min && sample.adc() <= max);
        }
    }

    #[test]
    fn prop_low_and_high_gain_agree(
        energies in prop::collection::vec(-1.0e-3f64..1.0e-3, 1..12),
        adc_per_mip in 1.0f64..200.0,
        seed in any::<u64>(),
    ) {
        let id = ChannelId(11);
        let (peds, mips) = conditions(id, 1000.0, 4.0, adc_per_mip);
        let calibration = Calibration::new(&peds, &mips);
        let analog = AnalogSamples::new(id, energies);

        let mut low_rng = StdRng::seed_from_u64(seed);
        let mut high_rng = StdRng::seed_from_u64(seed);
        let low = sim(GainMode::Low, true)
            .encode(&analog, &calibration, Some(&mut low_rng))
            .unwrap();
        let high = sim(GainMode::High, true)
            .encode(&analog, &calibration, Some(&mut high_rng))
            .unwrap();

        prop_assert_eq!(low, high);
    }

    #[test]
    fn prop_zero_energy_gives_baseline(
        len in 1usize..32,
        mean in -1000.0f64..3000.0,
        gain in gain_strategy(),
    ) {
        let id = ChannelId(1);
        let (peds, mips) = conditions(id, mean, 6.0, 55.0);
        let calibration = Calibration::new(&peds, &mips);

        let samples = sim(gain, false)
            .encode(&AnalogSamples::zeroed(id, len), &calibration, None)
            .unwrap();

        let expected = AdcBounds::default().clip(round_half_away_from_zero(mean));
        prop_assert!(samples.iter().all(|s| s.adc() == expected));
    }
}
