//! Configuration loading utilities
//!
//! This module loads configuration sections from environment variables.

use super::models::*;
use crate::utils::error::{AgentError, Result};
use std::env;
use tracing::debug;

/// Read an environment variable, treating empty values as unset
fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl AgentConfig {
    /// Load agent configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Loading agent configuration from environment variables");

        let mut config = Self::default();

        if let Some(agent_id) = var("BEDROCK_AGENT_ID") {
            config.agent_id = agent_id;
        }
        if let Some(alias_id) = var("BEDROCK_AGENT_ALIAS_ID") {
            config.agent_alias_id = alias_id;
        }
        if let Some(region) = var("AWS_REGION").or_else(|| var("AWS_DEFAULT_REGION")) {
            config.region = region;
        }
        config.endpoint = var("BEDROCK_AGENT_ENDPOINT");
        if let Some(timeout) = var("BEDROCK_AGENT_TIMEOUT") {
            config.timeout_seconds = timeout
                .parse()
                .map_err(|e| AgentError::Config(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(trace) = var("BEDROCK_AGENT_ENABLE_TRACE") {
            config.enable_trace = trace
                .parse()
                .map_err(|e| AgentError::Config(format!("Invalid trace flag: {}", e)))?;
        }

        Ok(config)
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = var("SERVER_HOST") {
            config.host = host;
        }
        if let Some(port) = var("SERVER_PORT") {
            config.port = port
                .parse()
                .map_err(|e| AgentError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = var("SERVER_WORKERS") {
            config.workers = Some(
                workers
                    .parse()
                    .map_err(|e| AgentError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }

        Ok(config)
    }
}

impl LoggingConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(level) = var("LOG_LEVEL") {
            config.level = level.to_lowercase();
        }
        if let Some(format) = var("LOG_FORMAT") {
            config.format = format.parse().map_err(AgentError::Config)?;
        }
        if let Some(ansi) = var("LOG_ANSI") {
            config.ansi = ansi
                .parse()
                .map_err(|e| AgentError::Config(format!("Invalid ansi flag: {}", e)))?;
        }

        Ok(config)
    }
}
