//! Agent configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifiers and transport settings for the remote agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent ID produced by the stack
    #[serde(default)]
    pub agent_id: String,
    /// Agent alias ID produced by the stack
    #[serde(default)]
    pub agent_alias_id: String,
    /// AWS region the agent lives in
    #[serde(default = "default_region")]
    pub region: String,
    /// Override for the agent runtime endpoint (VPC endpoints, local mocks)
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Ask the platform to emit trace events alongside the completion
    #[serde(default)]
    pub enable_trace: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_id: String::new(),
            agent_alias_id: String::new(),
            region: default_region(),
            endpoint: None,
            timeout_seconds: default_timeout(),
            enable_trace: false,
        }
    }
}

impl AgentConfig {
    /// Create a configuration for the given agent and alias
    pub fn new(
        agent_id: impl Into<String>,
        agent_alias_id: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            agent_alias_id: agent_alias_id.into(),
            region: region.into(),
            ..Default::default()
        }
    }

    /// Set an endpoint override
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Base URL of the agent runtime service
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-agent-runtime.{}.amazonaws.com", self.region),
        }
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
