//! Configuration management
//!
//! This module handles loading, validation, and management of the agent, server and
//! logging configuration.

pub mod loader;
pub mod models;
pub mod stack_outputs;
pub mod validation;

pub use models::*;
pub use stack_outputs::{DEFAULT_STACK_NAME, StackOutputs};
pub use validation::Validate;

use crate::utils::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote agent identifiers and transport settings
    #[serde(default)]
    pub agent: AgentConfig,
    /// Local action group server
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// The file is not validated here: which sections must be complete depends on
    /// the command being run.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AgentError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AgentError::Config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        Ok(Self {
            agent: AgentConfig::from_env()?,
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Overlay identifiers exported by a deployed stack
    pub fn apply_stack_outputs(&mut self, outputs: &StackOutputs) {
        self.agent.agent_id = outputs.agent_id.clone();
        self.agent.agent_alias_id = outputs.agent_alias_id.clone();
        if let Some(region) = outputs.region() {
            self.agent.region = region.to_string();
        }
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(AgentError::Config)
    }
}
