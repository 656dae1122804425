//! # bedrock-agents-rs
//!
//! Amazon Bedrock Agent sample with a pluggable action group backend.
//!
//! Two independent flows are joined by the agent platform:
//!
//! - the **action group dispatcher** ([`action_group`]) that the platform calls
//!   back into for `/get-current-time` and `/process-text`, deployable as a
//!   Lambda function (`action-handler` binary) or served locally
//!   ([`server`]);
//! - the **invocation client** ([`agent`]) that calls the agent's streaming
//!   `InvokeAgent` API and concatenates the completion.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bedrock_agents::{AgentHandler, AwsCredentials, BedrockAgentClient, Config, TextOperation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = BedrockAgentClient::new(config.agent, AwsCredentials::from_env()?)?;
//!     let handler = AgentHandler::new(client);
//!
//!     let answer = handler
//!         .process_text("Hello world test message", TextOperation::CountWords, None)
//!         .await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod action_group;
pub mod agent;
pub mod config;
pub mod server;
pub mod utils;

pub use action_group::{
    ActionDispatcher, ActionError, ActionGroupEvent, ActionGroupResponse, ActionRequest,
    TextOperation, action_group_schema,
};
pub use agent::{
    AgentHandler, AgentInvoker, AwsCredentials, BedrockAgentClient, CompletionEvent,
    InvokeAgentRequest, generate_session_id,
};
pub use config::{Config, StackOutputs};
pub use server::ActionServer;
pub use utils::error::{AgentError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Unix timestamp of the build
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
