//! Logging utilities
//!
//! This module provides subscriber setup and small helpers for log output.

pub mod logging;

// Re-export commonly used functions
pub use logging::*;
