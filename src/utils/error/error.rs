//! Error handling for the agent client
//!
//! This module defines the error types propagated by the invocation client,
//! configuration loading and the binaries. Action group validation failures
//! have their own type and never surface here.

use thiserror::Error;

/// Result type alias for the agent client
pub type Result<T> = std::result::Result<T, AgentError>;

/// Main error type for the agent client
#[derive(Error, Debug)]
pub enum AgentError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or malformed AWS credentials
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Request signing failures
    #[error("Signing error: {0}")]
    Signing(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform rejected the request as malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credentials lack permission for the agent or alias
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Agent, alias or session not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request throttled by the platform
    #[error("Throttled: {0}")]
    Throttled(String),

    /// Any other non-success answer from the platform
    #[error("API error ({status}) {error_type}: {message}")]
    Api {
        status: u16,
        error_type: String,
        message: String,
    },

    /// Malformed event stream or an exception frame inside it
    #[error("Stream error: {0}")]
    Stream(String),

    /// The platform answered without any completion events
    #[error("No completion received from agent")]
    NoCompletion,

    /// Session id does not satisfy the platform constraints
    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),
}

impl AgentError {
    /// Whether the failure came from the remote platform rather than local setup
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AgentError::HttpClient(_)
                | AgentError::Validation(_)
                | AgentError::AccessDenied(_)
                | AgentError::NotFound(_)
                | AgentError::Throttled(_)
                | AgentError::Api { .. }
                | AgentError::Stream(_)
                | AgentError::NoCompletion
        )
    }
}
