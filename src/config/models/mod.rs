//! Configuration data models
//!
//! This module defines all configuration structures used by the client, the local server and logging.

#![allow(missing_docs)]

pub mod agent;
pub mod logging;
pub mod server;

// Re-export all configuration types
pub use agent::*;
pub use logging::*;
pub use server::*;

/// Default AWS region
pub fn default_region() -> String {
    "us-east-1".to_string()
}

/// Default host for the local server
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default local server port
pub fn default_port() -> u16 {
    3000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024 // 256KB
}

/// Default log level directive
pub fn default_log_level() -> String {
    "info".to_string()
}
