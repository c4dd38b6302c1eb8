//! Error types for PCM level measurement

use std::fmt;

/// Errors that can occur while measuring PCM levels
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// Input buffer is not a whole number of 16-bit samples
    InvalidInput(String),

    /// An amplitude index past the end of the decoded samples was read
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of decoded amplitudes
        len: usize,
    },

    /// Configuration parameter out of range
    InvalidConfig(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            LevelError::IndexOutOfRange { index, len } => write!(
                f,
                "Index out of range: amplitude {} requested but only {} decoded",
                index, len
            ),
            LevelError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for LevelError {}
