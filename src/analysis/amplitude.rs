//! Amplitude range and level
//!
//! The min/max scan includes an implicit zero: both accumulators start at 0
//! rather than at the first sample, so a buffer that never crosses zero
//! reports 0 on the side it never reaches.

use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::io::pcm::decode_amplitudes;

/// Largest and smallest amplitude seen, each seeded at zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmplitudeRange {
    /// Highest amplitude, never below 0
    pub max: i32,
    /// Lowest amplitude, never above 0
    pub min: i32,
}

impl AmplitudeRange {
    /// Scan amplitudes for the zero-seeded maximum and minimum
    pub fn from_amplitudes(amplitudes: &[i32]) -> Self {
        amplitudes
            .iter()
            .fold(Self::default(), |range, &amp| Self {
                max: range.max.max(amp),
                min: range.min.min(amp),
            })
    }

    /// Larger deviation from zero: `max(max, -min)`
    pub fn level(&self) -> i32 {
        // min >= i16::MIN for decoded input; saturate for hand-built ranges
        self.max.max(self.min.saturating_neg())
    }
}

impl From<AmplitudeRange> for (i32, i32) {
    fn from(range: AmplitudeRange) -> Self {
        (range.max, range.min)
    }
}

/// Decode `bytes` and return the zero-seeded `(max, min)` amplitudes
///
/// # Example
///
/// ```
/// use pcm_level::analysis::amplitude::amplitude_range;
///
/// let range = amplitude_range(&[0x34, 0x12, 0xCD, 0xAB])?;
/// assert_eq!((range.max, range.min), (4660, -21555));
/// # Ok::<(), pcm_level::LevelError>(())
/// ```
pub fn amplitude_range(bytes: &[u8]) -> Result<AmplitudeRange, LevelError> {
    let amplitudes = decode_amplitudes(bytes)?;
    Ok(AmplitudeRange::from_amplitudes(&amplitudes))
}

/// Decode `bytes` and return the larger-magnitude deviation from zero
pub fn amplitude_level(bytes: &[u8]) -> Result<i32, LevelError> {
    Ok(amplitude_range(bytes)?.level())
}
