//! PCM byte decoding
//!
//! Turns raw 16-bit little-endian mono buffers into amplitude arrays.

pub mod pcm;

pub use pcm::{decode_amplitudes, decode_amplitudes_with};
