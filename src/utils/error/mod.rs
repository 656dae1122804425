//! Error handling utilities
//!
//! This module provides the error type shared by the client, configuration and binaries.

pub mod error;

// Re-export commonly used types
pub use error::*;
