//! Example: Measure a synthetic buffer and print the report as JSON

use pcm_level::{analyze_levels, LevelConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    // Quarter second of a decaying 440 Hz tone
    let bytes: Vec<u8> = (0..11025)
        .map(|i| {
            let t = i as f32 / 44100.0;
            let envelope = (-t * 8.0).exp();
            ((t * 440.0 * 2.0 * std::f32::consts::PI).sin() * envelope * 32000.0) as i16
        })
        .flat_map(|s| s.to_le_bytes())
        .collect();

    let report = analyze_levels(&bytes, LevelConfig::default())?;

    println!("Level Report:");
    println!("  Samples: {}", report.sample_count);
    println!("  Range: max {} / min {}", report.range.max, report.range.min);
    println!("  Level: {}", report.level);
    println!("  Decibel summary: {:.4}", report.decibel_summary);

    let mut preview = report.clone();
    preview.decibels.truncate(8);
    println!("{}", serde_json::to_string_pretty(&preview)?);

    Ok(())
}
