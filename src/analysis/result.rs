//! Level report types

use serde::{Deserialize, Serialize};

use super::amplitude::AmplitudeRange;

/// Complete level measurement of one buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelReport {
    /// Number of decoded amplitudes
    pub sample_count: usize,

    /// Zero-seeded maximum and minimum amplitude
    pub range: AmplitudeRange,

    /// Larger deviation from zero
    pub level: i32,

    /// Pseudo-decibel value of `level` (not truncated)
    pub decibel_summary: f64,

    /// Truncated pseudo-decibel value per sample
    pub decibels: Vec<f64>,

    /// Measurement metadata
    pub metadata: LevelMetadata,
}

/// Report metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelMetadata {
    /// Crate version that produced the report
    pub algorithm_version: String,

    /// Whether an unpaired trailing byte was skipped
    #[serde(default)]
    pub dropped_trailing_byte: bool,
}

impl Default for LevelMetadata {
    fn default() -> Self {
        Self {
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            dropped_trailing_byte: false,
        }
    }
}
