//! Deployed stack outputs
//!
//! `cdk deploy --outputs-file` writes a JSON document keyed by stack name.
//! The agent stack exports the identifiers the invocation client needs.

use crate::utils::error::{AgentError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Default stack name of the sample deployment
pub const DEFAULT_STACK_NAME: &str = "BedrockAgentStack";

/// Outputs exported by the agent stack
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackOutputs {
    /// ID of the created agent
    pub agent_id: String,
    /// ID of the agent alias
    pub agent_alias_id: String,
    /// ARN of the agent
    #[serde(default)]
    pub agent_arn: Option<String>,
    /// ARN of the action group Lambda function
    #[serde(default)]
    pub action_group_lambda_arn: Option<String>,
}

impl StackOutputs {
    /// Load the outputs of `stack_name` from a CDK outputs file
    pub async fn from_file<P: AsRef<Path>>(path: P, stack_name: &str) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading stack outputs from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AgentError::Config(format!("Failed to read outputs file: {}", e)))?;

        Self::from_json(&content, stack_name)
    }

    /// Parse the outputs of `stack_name` from a CDK outputs document
    pub fn from_json(content: &str, stack_name: &str) -> Result<Self> {
        let mut stacks: HashMap<String, serde_json::Value> = serde_json::from_str(content)?;

        let stack = stacks.remove(stack_name).ok_or_else(|| {
            AgentError::Config(format!("Stack {} not found in outputs file", stack_name))
        })?;

        let outputs: StackOutputs = serde_json::from_value(stack).map_err(|e| {
            AgentError::Config(format!("Invalid outputs for stack {}: {}", stack_name, e))
        })?;

        debug!(
            agent_id = %outputs.agent_id,
            agent_alias_id = %outputs.agent_alias_id,
            "Stack outputs loaded"
        );
        Ok(outputs)
    }

    /// Region parsed from the agent ARN (`arn:aws:bedrock:<region>:<account>:agent/<id>`)
    pub fn region(&self) -> Option<&str> {
        self.agent_arn
            .as_deref()
            .and_then(|arn| arn.split(':').nth(3))
            .filter(|region| !region.is_empty())
    }
}
