//! Bounded pseudo-decibel metric
//!
//! Not a calibrated dBFS figure. An amplitude is expressed as a percentage of
//! full scale, inverted (`100 / pct`), capped at 100, then mapped through
//! `(1 - x) / π`. Full scale maps to `0.0`, silence to `-99 / π`.

use std::f64::consts::PI;

use crate::config::{DecibelIteration, LevelConfig, MAX_AMPLITUDE, RESIZE_MULTIPLIER};
use crate::error::LevelError;
use crate::io::pcm::{decode_amplitudes, decode_amplitudes_with};

use super::amplitude::amplitude_level;

/// Cap on the inverted percentage
const DECIBEL_CEILING: f64 = 100.0;

/// Lowest value [`decibel_from_amplitude`] can return (`-99 / π`)
pub const DECIBEL_FLOOR: f64 = (1.0 - DECIBEL_CEILING) / PI;

/// Pseudo-decibel value of one amplitude, against the 16-bit full scale
///
/// # Example
///
/// ```
/// use pcm_level::analysis::decibel::{decibel_from_amplitude, DECIBEL_FLOOR};
///
/// assert_eq!(decibel_from_amplitude(32767), 0.0);
/// assert_eq!(decibel_from_amplitude(0), DECIBEL_FLOOR);
/// ```
pub fn decibel_from_amplitude(amplitude: i32) -> f64 {
    decibel_with_full_scale(amplitude, MAX_AMPLITUDE)
}

/// Pseudo-decibel value of one amplitude against `full_scale`
pub fn decibel_with_full_scale(amplitude: i32, full_scale: f64) -> f64 {
    let magnitude = f64::from(amplitude.unsigned_abs());
    let mut amp_pct = (magnitude / full_scale) * 100.0;
    if amp_pct == 0.0 {
        amp_pct = 1.0;
    }

    // sqrt then square keeps rounding identical to the legacy meter
    let mut decibel = (100.0 / amp_pct).sqrt();
    decibel *= decibel;

    if decibel > DECIBEL_CEILING {
        decibel = DECIBEL_CEILING;
    }

    ((-1.0 * decibel) + 1.0) / PI
}

/// Truncate toward zero to one decimal place
///
/// `resize(1.2345) == 1.2`, `resize(-1.2345) == -1.2`.
pub fn resize(value: f64) -> f64 {
    resize_with(value, RESIZE_MULTIPLIER)
}

/// Truncate toward zero to the precision implied by `multiplier`
pub fn resize_with(value: f64, multiplier: f64) -> f64 {
    (value * multiplier).trunc() / multiplier
}

/// Truncated pseudo-decibel value for every decoded amplitude
pub fn decibel_array(bytes: &[u8]) -> Result<Vec<f64>, LevelError> {
    let amplitudes = decode_amplitudes(bytes)?;
    decibel_values(&amplitudes, bytes.len(), &LevelConfig::default())
}

/// Decode with `config` and compute per-sample decibels
pub fn decibel_array_with(bytes: &[u8], config: &LevelConfig) -> Result<Vec<f64>, LevelError> {
    let amplitudes = decode_amplitudes_with(bytes, config.trailing_byte)?;
    decibel_values(&amplitudes, bytes.len(), config)
}

/// Map already-decoded amplitudes to truncated pseudo-decibel values
///
/// # Arguments
///
/// * `amplitudes` - Decoded samples
/// * `byte_len` - Length of the source buffer, used by the legacy per-byte mode
/// * `config` - Full scale, truncation and iteration settings
///
/// # Errors
///
/// Under [`DecibelIteration::PerByteLegacy`], returns
/// [`LevelError::IndexOutOfRange`] at the first byte index with no
/// matching amplitude.
pub fn decibel_values(
    amplitudes: &[i32],
    byte_len: usize,
    config: &LevelConfig,
) -> Result<Vec<f64>, LevelError> {
    let to_db = |amp: i32| {
        resize_with(
            decibel_with_full_scale(amp, config.max_amplitude),
            config.resize_multiplier,
        )
    };

    match config.decibel_iteration {
        DecibelIteration::PerAmplitude => Ok(amplitudes.iter().map(|&a| to_db(a)).collect()),
        DecibelIteration::PerByteLegacy => (0..byte_len)
            .map(|index| {
                amplitudes
                    .get(index)
                    .map(|&a| to_db(a))
                    .ok_or(LevelError::IndexOutOfRange {
                        index,
                        len: amplitudes.len(),
                    })
            })
            .collect(),
    }
}

/// Pseudo-decibel value of the buffer's peak level
///
/// # Example
///
/// ```
/// use pcm_level::analysis::decibel::decibel_summary;
///
/// let db = decibel_summary(&[0x34, 0x12, 0xCD, 0xAB])?;
/// assert!(db < 0.0 && db > -31.51);
/// # Ok::<(), pcm_level::LevelError>(())
/// ```
pub fn decibel_summary(bytes: &[u8]) -> Result<f64, LevelError> {
    let level = amplitude_level(bytes)?;
    log::debug!("Peak level {} over {} bytes", level, bytes.len());
    Ok(decibel_from_amplitude(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_full_scale_is_zero() {
        assert!(decibel_from_amplitude(32767).abs() < EPS);
        assert!(decibel_from_amplitude(-32767).abs() < EPS);
    }

    #[test]
    fn test_silence_hits_floor() {
        let db = decibel_from_amplitude(0);
        assert!((db - (-99.0 / PI)).abs() < EPS);
        assert!((db + 31.5126).abs() < 1e-3);
        assert_eq!(db, DECIBEL_FLOOR);
    }

    #[test]
    fn test_small_amplitudes_clamp() {
        // Anything at or below 1% of full scale saturates the ceiling
        assert_eq!(decibel_from_amplitude(1), DECIBEL_FLOOR);
        assert_eq!(decibel_from_amplitude(-300), DECIBEL_FLOOR);
        assert!(decibel_from_amplitude(1000) > DECIBEL_FLOOR);
    }

    #[test]
    fn test_output_bounds() {
        let upper = 1.0 / PI;
        for amp in (-32768..=32767).step_by(97) {
            let db = decibel_from_amplitude(amp);
            assert!(db >= DECIBEL_FLOOR - EPS && db < upper, "amp {} gave {}", amp, db);
        }
        assert!(decibel_from_amplitude(i32::MIN).is_finite());
    }

    #[test]
    fn test_monotonic_in_magnitude() {
        let a = decibel_from_amplitude(4000);
        let b = decibel_from_amplitude(16000);
        let c = decibel_from_amplitude(32000);
        assert!(a < b && b < c);
        assert_eq!(decibel_from_amplitude(-16000), b);
    }

    #[test]
    fn test_resize_truncates() {
        assert_eq!(resize(1.2345), 1.2);
        assert_eq!(resize(-1.2345), -1.2);
        assert_eq!(resize(0.09), 0.0);
        assert_eq!(resize(-31.5126), -31.5);
    }

    #[test]
    fn test_resize_idempotent() {
        for value in [1.2345, -1.2345, 0.3, -31.51, 7.0, 0.0] {
            assert_eq!(resize(resize(value)), resize(value));
        }
    }

    #[test]
    fn test_decibel_array_per_amplitude() {
        let bytes = [0xFF, 0x7F, 0x00, 0x00, 0x00, 0x80];
        let dbs = decibel_array(&bytes).unwrap();
        assert_eq!(dbs.len(), 3);
        assert_eq!(dbs[0], 0.0);
        assert_eq!(dbs[1], -31.5);
        // -32768 sits just past full scale
        assert_eq!(dbs[2], 0.0);
    }

    #[test]
    fn test_decibel_array_legacy_overruns() {
        let config = LevelConfig {
            decibel_iteration: DecibelIteration::PerByteLegacy,
            ..LevelConfig::default()
        };
        let result = decibel_array_with(&[0xFF, 0x7F, 0x00, 0x00], &config);
        assert_eq!(result, Err(LevelError::IndexOutOfRange { index: 2, len: 2 }));

        assert!(decibel_array_with(&[], &config).unwrap().is_empty());
    }

    #[test]
    fn test_custom_full_scale() {
        let config = LevelConfig {
            max_amplitude: 1000.0,
            ..LevelConfig::default()
        };
        let dbs = decibel_values(&[1000, 0], 4, &config).unwrap();
        assert_eq!(dbs, vec![0.0, -31.5]);
    }

    #[test]
    fn test_summary_scenario() {
        let db = decibel_summary(&[0x34, 0x12, 0xCD, 0xAB]).unwrap();
        let expected = decibel_from_amplitude(21555);
        assert_eq!(db, expected);
        assert!(db.is_finite() && db <= 0.0 && db >= -31.51);
    }

    #[test]
    fn test_summary_of_silence() {
        assert_eq!(decibel_summary(&[0, 0, 0, 0]).unwrap(), DECIBEL_FLOOR);
        assert_eq!(decibel_summary(&[]).unwrap(), DECIBEL_FLOOR);
    }
}
