//! Configuration parameters for level measurement

use crate::error::LevelError;

/// Full-scale positive amplitude of a 16-bit sample
pub const MAX_AMPLITUDE: f64 = 32767.0;

/// Multiplier used when truncating decibel values to one decimal place
pub const RESIZE_MULTIPLIER: f64 = 10.0;

/// Bytes per 16-bit mono sample
pub const BYTES_PER_SAMPLE: usize = 2;

/// What to do with a trailing byte that does not complete a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytePolicy {
    /// Fail with [`LevelError::InvalidInput`]
    #[default]
    Reject,
    /// Drop the byte and decode the complete pairs
    Ignore,
}

/// How [`decibel_array`](crate::analysis::decibel::decibel_array) walks the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecibelIteration {
    /// One value per decoded amplitude
    #[default]
    PerAmplitude,
    /// One value per input byte, as older callers expected.
    /// Reading past the decoded amplitudes yields [`LevelError::IndexOutOfRange`].
    PerByteLegacy,
}

/// Level measurement configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    /// Amplitude treated as 100% (default: 32767.0)
    pub max_amplitude: f64,

    /// Decimal truncation multiplier for per-sample decibels (default: 10.0)
    pub resize_multiplier: f64,

    /// Handling of odd-length buffers (default: Reject)
    pub trailing_byte: TrailingBytePolicy,

    /// Decibel array iteration mode (default: PerAmplitude)
    pub decibel_iteration: DecibelIteration,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            max_amplitude: MAX_AMPLITUDE,
            resize_multiplier: RESIZE_MULTIPLIER,
            trailing_byte: TrailingBytePolicy::Reject,
            decibel_iteration: DecibelIteration::PerAmplitude,
        }
    }
}

impl LevelConfig {
    /// Check that the numeric parameters are usable
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::InvalidConfig`] if `max_amplitude` or
    /// `resize_multiplier` is not a finite positive number.
    pub fn validate(&self) -> Result<(), LevelError> {
        if !self.max_amplitude.is_finite() || self.max_amplitude <= 0.0 {
            return Err(LevelError::InvalidConfig(format!(
                "max_amplitude must be finite and positive, got {}",
                self.max_amplitude
            )));
        }
        if !self.resize_multiplier.is_finite() || self.resize_multiplier <= 0.0 {
            return Err(LevelError::InvalidConfig(format!(
                "resize_multiplier must be finite and positive, got {}",
                self.resize_multiplier
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LevelConfig::default();
        assert_eq!(config.max_amplitude, 32767.0);
        assert_eq!(config.resize_multiplier, 10.0);
        assert_eq!(config.trailing_byte, TrailingBytePolicy::Reject);
        assert_eq!(config.decibel_iteration, DecibelIteration::PerAmplitude);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = LevelConfig {
            max_amplitude: 0.0,
            ..LevelConfig::default()
        };
        assert!(matches!(config.validate(), Err(LevelError::InvalidConfig(_))));

        let config = LevelConfig {
            resize_multiplier: f64::NAN,
            ..LevelConfig::default()
        };
        assert!(matches!(config.validate(), Err(LevelError::InvalidConfig(_))));
    }
}
