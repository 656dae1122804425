//! Prompt-level helpers on top of the invocation client

use async_trait::async_trait;

use super::client::BedrockAgentClient;
use super::session::resolve_session_id;
use super::types::InvokeAgentRequest;
use crate::action_group::{GET_CURRENT_TIME_PATH, PROCESS_TEXT_PATH, TextOperation};
use crate::utils::error::Result;

/// Anything that can run an agent turn and return its completion
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    async fn invoke_agent(&self, request: &InvokeAgentRequest) -> Result<String>;
}

#[async_trait]
impl AgentInvoker for BedrockAgentClient {
    async fn invoke_agent(&self, request: &InvokeAgentRequest) -> Result<String> {
        BedrockAgentClient::invoke_agent(self, request).await
    }
}

/// Prompt for a text processing request
pub fn process_text_prompt(text: &str, operation: TextOperation) -> String {
    format!(
        "Please process the following text with the operation \"{}\": \"{}\". Use the {} action to perform this operation.",
        operation,
        text,
        PROCESS_TEXT_PATH.trim_start_matches('/')
    )
}

/// Prompt for a current time request
pub fn current_time_prompt() -> String {
    format!(
        "What is the current time? Please use the {} action to retrieve this information.",
        GET_CURRENT_TIME_PATH.trim_start_matches('/')
    )
}

/// Convenience wrapper exposing the three interaction shapes
pub struct AgentHandler<I> {
    invoker: I,
}

impl<I: AgentInvoker> AgentHandler<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Send a free-form question
    pub async fn ask_question(&self, question: &str, session_id: Option<&str>) -> Result<String> {
        self.send(question.to_string(), session_id).await
    }

    /// Ask the agent to run a text operation through its action group
    pub async fn process_text(
        &self,
        text: &str,
        operation: TextOperation,
        session_id: Option<&str>,
    ) -> Result<String> {
        self.send(process_text_prompt(text, operation), session_id)
            .await
    }

    /// Ask the agent for the current time through its action group
    pub async fn get_current_time(&self, session_id: Option<&str>) -> Result<String> {
        self.send(current_time_prompt(), session_id).await
    }

    async fn send(&self, input_text: String, session_id: Option<&str>) -> Result<String> {
        let session_id = resolve_session_id(session_id)?;
        self.invoker
            .invoke_agent(&InvokeAgentRequest::new(input_text, session_id))
            .await
    }
}
