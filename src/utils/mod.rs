//! Utility modules
//!
//! - **error**: Error type and result alias
//! - **logging**: Subscriber setup and log helpers

pub mod error; // Error handling
pub mod logging; // Logging

pub use error::{AgentError, Result};
pub use logging::{init_tracing, truncate_for_log};
