//! Configured entry point for all level operations

use crate::analysis::amplitude::AmplitudeRange;
use crate::analysis::decibel::{decibel_values, decibel_with_full_scale, resize_with};
use crate::analysis::result::{LevelMetadata, LevelReport};
use crate::config::{LevelConfig, BYTES_PER_SAMPLE};
use crate::error::LevelError;
use crate::io::pcm::decode_amplitudes_with;

/// Decodes 16-bit PCM buffers and measures their levels
///
/// Holds only a validated [`LevelConfig`]; every method is a pure function
/// of its input, so one decoder can be shared freely across threads.
///
/// # Example
///
/// ```
/// use pcm_level::SampleDecoder;
///
/// let decoder = SampleDecoder::default();
/// let bytes = [0x34, 0x12, 0xCD, 0xAB];
///
/// assert_eq!(decoder.decode_amplitudes(&bytes)?, vec![4660, -21555]);
/// assert_eq!(decoder.amplitude_level(&bytes)?, 21555);
/// # Ok::<(), pcm_level::LevelError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SampleDecoder {
    config: LevelConfig,
}

impl SampleDecoder {
    /// Create a decoder with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::InvalidConfig`] if the configuration fails validation.
    pub fn new(config: LevelConfig) -> Result<Self, LevelError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Decode bytes into amplitudes, one per low/high byte pair
    pub fn decode_amplitudes(&self, bytes: &[u8]) -> Result<Vec<i32>, LevelError> {
        decode_amplitudes_with(bytes, self.config.trailing_byte)
    }

    /// Zero-seeded `(max, min)` amplitudes
    pub fn amplitude_range(&self, bytes: &[u8]) -> Result<AmplitudeRange, LevelError> {
        let amplitudes = self.decode_amplitudes(bytes)?;
        Ok(AmplitudeRange::from_amplitudes(&amplitudes))
    }

    /// `max(max, -min)` of [`amplitude_range`](Self::amplitude_range)
    pub fn amplitude_level(&self, bytes: &[u8]) -> Result<i32, LevelError> {
        Ok(self.amplitude_range(bytes)?.level())
    }

    /// Pseudo-decibel value of a single amplitude
    pub fn decibel_from_amplitude(&self, amplitude: i32) -> f64 {
        decibel_with_full_scale(amplitude, self.config.max_amplitude)
    }

    /// Truncate a value to the configured decimal precision
    pub fn resize(&self, value: f64) -> f64 {
        resize_with(value, self.config.resize_multiplier)
    }

    /// Truncated pseudo-decibel values, iterated per the configured mode
    pub fn decibel_array(&self, bytes: &[u8]) -> Result<Vec<f64>, LevelError> {
        let amplitudes = self.decode_amplitudes(bytes)?;
        decibel_values(&amplitudes, bytes.len(), &self.config)
    }

    /// Pseudo-decibel value of the buffer's peak level
    pub fn decibel_summary(&self, bytes: &[u8]) -> Result<f64, LevelError> {
        let level = self.amplitude_level(bytes)?;
        Ok(self.decibel_from_amplitude(level))
    }

    /// Run every measurement over `bytes` with a single decode
    pub fn report(&self, bytes: &[u8]) -> Result<LevelReport, LevelError> {
        log::debug!("Measuring levels over {} bytes", bytes.len());

        let amplitudes = self.decode_amplitudes(bytes)?;
        let range = AmplitudeRange::from_amplitudes(&amplitudes);
        let level = range.level();
        let decibels = decibel_values(&amplitudes, bytes.len(), &self.config)?;

        Ok(LevelReport {
            sample_count: amplitudes.len(),
            range,
            level,
            decibel_summary: self.decibel_from_amplitude(level),
            decibels,
            metadata: LevelMetadata {
                dropped_trailing_byte: bytes.len() % BYTES_PER_SAMPLE != 0,
                ..LevelMetadata::default()
            },
        })
    }
}
