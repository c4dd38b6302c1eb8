//! # pcm-level
//!
//! Amplitude and bounded pseudo-decibel measurements for raw 16-bit signed
//! little-endian mono PCM buffers.
//!
//! ## Features
//!
//! - **Decoding**: low/high byte pairs to signed amplitudes
//! - **Range and level**: zero-seeded max/min and peak deviation
//! - **Pseudo-decibels**: a bounded heuristic in `[-99/π, 1/π)`, per sample
//!   (truncated to one decimal) or for the whole buffer
//!
//! The decibel figure is not dBFS. Full scale maps to `0.0` and anything at or
//! below 1% of full scale maps to `-99/π ≈ -31.51`.
//!
//! ## Quick Start
//!
//! ```
//! use pcm_level::{analyze_levels, LevelConfig};
//!
//! let bytes = [0x34, 0x12, 0xCD, 0xAB]; // 4660, -21555
//! let report = analyze_levels(&bytes, LevelConfig::default())?;
//!
//! assert_eq!(report.level, 21555);
//! println!("summary: {:.3}", report.decibel_summary);
//! # Ok::<(), pcm_level::LevelError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bytes → io::pcm (amplitudes) → analysis::amplitude (range, level)
//!                              → analysis::decibel (per-sample, summary)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod sample_decoder;

// Re-export main types
pub use analysis::amplitude::{amplitude_level, amplitude_range, AmplitudeRange};
pub use analysis::decibel::{decibel_array, decibel_from_amplitude, decibel_summary, resize};
pub use analysis::result::{LevelMetadata, LevelReport};
pub use config::{DecibelIteration, LevelConfig, TrailingBytePolicy};
pub use error::LevelError;
pub use io::pcm::decode_amplitudes;
pub use sample_decoder::SampleDecoder;

/// Result type for level operations
pub type Result<T> = std::result::Result<T, LevelError>;

/// Measure every level figure of a PCM buffer
///
/// # Arguments
///
/// * `bytes` - 16-bit signed little-endian mono samples
/// * `config` - Measurement configuration
///
/// # Returns
///
/// `LevelReport` with range, level, summary and per-sample decibels
///
/// # Errors
///
/// Returns `LevelError` for an invalid configuration, an odd-length buffer
/// under [`TrailingBytePolicy::Reject`], or an overrun under
/// [`DecibelIteration::PerByteLegacy`].
pub fn analyze_levels(bytes: &[u8], config: LevelConfig) -> Result<LevelReport> {
    SampleDecoder::new(config)?.report(bytes)
}
