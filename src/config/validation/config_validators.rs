//! Core configuration validators
//!
//! Validation implementations for the agent, server and logging sections.

use super::trait_def::Validate;
use crate::config::Config;
use crate::config::models::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// AWS regions where Bedrock Agents are offered
pub const AGENT_REGIONS: &[&str] = &[
    // US regions
    "us-east-1",
    "us-west-2",
    "us-gov-west-1",
    // EU regions
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-central-1",
    "eu-central-2",
    // Asia Pacific regions
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    // Other regions
    "ca-central-1",
    "sa-east-1",
];

/// Check whether a region hosts the agent runtime
pub fn is_agent_region(region: &str) -> bool {
    AGENT_REGIONS.contains(&region)
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating configuration");

        self.agent.validate()?;
        self.server.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for AgentConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating agent configuration");

        if self.agent_id.trim().is_empty() {
            return Err("Agent ID is required".to_string());
        }
        if self.agent_alias_id.trim().is_empty() {
            return Err("Agent alias ID is required".to_string());
        }
        if self.region.is_empty() {
            return Err("AWS region is required".to_string());
        }
        // Only the public endpoint is region-checked
        if self.endpoint.is_none() && !is_agent_region(&self.region) {
            return Err(format!(
                "Region {} does not support Bedrock Agents",
                self.region
            ));
        }
        if let Some(endpoint) = &self.endpoint {
            let url = url::Url::parse(endpoint)
                .map_err(|e| format!("Invalid agent endpoint {}: {}", endpoint, e))?;
            if url.scheme() != "https" && url.scheme() != "http" {
                return Err(format!(
                    "Agent endpoint must use http or https, got {}",
                    url.scheme()
                ));
            }
        }
        if self.timeout_seconds == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
        }
        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level {}: {}", self.level, e))
    }
}
