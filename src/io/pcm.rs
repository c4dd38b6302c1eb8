//! 16-bit signed little-endian PCM decoding
//!
//! # Example
//!
//! ```
//! use pcm_level::io::pcm::decode_amplitudes;
//!
//! let amps = decode_amplitudes(&[0x34, 0x12, 0xCD, 0xAB])?;
//! assert_eq!(amps, vec![4660, -21555]);
//! # Ok::<(), pcm_level::LevelError>(())
//! ```

use crate::config::{TrailingBytePolicy, BYTES_PER_SAMPLE};
use crate::error::LevelError;

/// Decode a byte buffer into signed 16-bit amplitudes, rejecting odd lengths
///
/// Byte pair `(bytes[i], bytes[i + 1])` is read as low/high byte and lands at
/// output index `i / 2`.
///
/// # Errors
///
/// Returns [`LevelError::InvalidInput`] if `bytes.len()` is odd.
pub fn decode_amplitudes(bytes: &[u8]) -> Result<Vec<i32>, LevelError> {
    decode_amplitudes_with(bytes, TrailingBytePolicy::Reject)
}

/// Decode a byte buffer into signed 16-bit amplitudes
///
/// # Arguments
///
/// * `bytes` - Interleaved low/high byte pairs
/// * `policy` - What to do with an unpaired trailing byte
///
/// # Returns
///
/// One amplitude per complete byte pair, widened to `i32`
pub fn decode_amplitudes_with(
    bytes: &[u8],
    policy: TrailingBytePolicy,
) -> Result<Vec<i32>, LevelError> {
    let remainder = bytes.len() % BYTES_PER_SAMPLE;
    if remainder != 0 {
        match policy {
            TrailingBytePolicy::Reject => {
                return Err(LevelError::InvalidInput(format!(
                    "buffer length {} is not a multiple of {}",
                    bytes.len(),
                    BYTES_PER_SAMPLE
                )));
            }
            TrailingBytePolicy::Ignore => {
                log::warn!(
                    "Dropping {} trailing byte(s) from {}-byte buffer",
                    remainder,
                    bytes.len()
                );
            }
        }
    }

    let amplitudes: Vec<i32> = bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|pair| i32::from(i16::from_le_bytes([pair[0], pair[1]])))
        .collect();

    log::debug!(
        "Decoded {} amplitudes from {} bytes",
        amplitudes.len(),
        bytes.len()
    );

    Ok(amplitudes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_extremes() {
        assert_eq!(decode_amplitudes(&[0x00, 0x80]).unwrap(), vec![-32768]);
        assert_eq!(decode_amplitudes(&[0xFF, 0x7F]).unwrap(), vec![32767]);
        assert_eq!(decode_amplitudes(&[0x00, 0x00]).unwrap(), vec![0]);
        assert_eq!(decode_amplitudes(&[0xFF, 0xFF]).unwrap(), vec![-1]);
    }

    #[test]
    fn test_decode_preserves_order() {
        let data = [
            0x00, 0x04, // 1024
            0x00, 0x08, // 2048
            0x01, 0x00, // 1
        ];
        assert_eq!(decode_amplitudes(&data).unwrap(), vec![1024, 2048, 1]);
    }

    #[test]
    fn test_length_is_half_of_bytes() {
        for len in (0..64).step_by(2) {
            let data: Vec<u8> = (0..len).map(|i| (i * 37) as u8).collect();
            assert_eq!(decode_amplitudes(&data).unwrap().len(), len / 2);
        }
    }

    #[test]
    fn test_empty_buffer() {
        assert!(decode_amplitudes(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_odd_length_rejected() {
        let result = decode_amplitudes(&[0x00, 0x10, 0x7F]);
        assert!(matches!(result, Err(LevelError::InvalidInput(_))));
    }

    #[test]
    fn test_odd_length_ignored() {
        let amps = decode_amplitudes_with(&[0x00, 0x10, 0x7F], TrailingBytePolicy::Ignore).unwrap();
        assert_eq!(amps, vec![4096]);

        let amps = decode_amplitudes_with(&[0x7F], TrailingBytePolicy::Ignore).unwrap();
        assert!(amps.is_empty());
    }
}
