// demos/basic_usage.rs
//! Basic usage example for es-digi

use es_digi::calibration::{Calibration, IntercalibMap, PedestalEntry, PedestalMap};
use es_digi::config::ConfigLoader;
use es_digi::electronics::{AnalogSamples, ChannelId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("es-digi Basic Usage Example");
    println!("===========================");

    // Load configuration
    println!("Loading configuration...");
    let mut config_loader = ConfigLoader::new();
    let config = config_loader.load()?;
    println!("Configuration loaded successfully");
    println!("  - Gain: {}", config.electronics.gain);
    println!("  - Noise: {}", config.electronics.noise_enabled);
    println!("  - MIP deposit: {} keV", config.electronics.mip_kev);
    println!("  - Seed: {}", config.random.seed);

    // Per-channel conditions for a small ladder of strips
    let channels = 8u32;
    let pedestals: PedestalMap = (0..channels)
        .map(|i| (ChannelId(i), PedestalEntry::new(1000.0 + i as f64, 5.0)))
        .collect();
    let intercalib: IntercalibMap = (0..channels)
        .map(|i| (ChannelId(i), 52.0 + i as f64))
        .collect();
    let calibration = Calibration::new(&pedestals, &intercalib);

    // One MIP-like pulse in every strip, three time slices
    let mip_gev = config.electronics.mip_kev * 1.0e-6;
    let frames: Vec<_> = (0..channels)
        .map(|i| {
            let scale = 1.0 + 0.25 * i as f64;
            AnalogSamples::new(
                ChannelId(i),
                vec![0.2 * mip_gev * scale, mip_gev * scale, 0.6 * mip_gev * scale],
            )
        })
        .collect();

    println!("\nDigitizing {} channels...", frames.len());
    let digitizer = config.event_digitizer()?;
    let digis = digitizer.digitize(1, &frames, &calibration)?;

    for digi in &digis {
        println!("  {}: {:?}", digi.id(), digi.adc_counts());
    }

    println!("\nDecoding...");
    let decoded = digitizer.reconstruct(&digis);
    println!("  {}: {:?}", decoded[0].id(), decoded[0].as_slice());

    println!("\nDone");
    Ok(())
}
