//! Utility functions module
//!
//! Contains helper functions for clock formatting and secret masking.

pub mod units;

// Re-export commonly used functions
pub use units::{format_clock, mask};
