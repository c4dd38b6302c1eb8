//! Level analysis
//!
//! - Amplitude range and level
//! - Pseudo-decibel metric and truncation
//! - Report types

pub mod amplitude;
pub mod decibel;
pub mod result;
