//! InvokeAgent request and completion event types

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::error::{AgentError, Result};

/// Agent invocation request
///
/// `session_id` goes into the request path, the remaining fields form the
/// JSON body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvokeAgentRequest {
    #[serde(skip)]
    pub session_id: String,
    pub input_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_state: Option<SessionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_trace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_session: Option<bool>,
}

impl InvokeAgentRequest {
    pub fn new(input_text: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            input_text: input_text.into(),
            session_state: None,
            enable_trace: None,
            end_session: None,
        }
    }

    pub fn with_session_state(mut self, session_state: SessionState) -> Self {
        self.session_state = Some(session_state);
        self
    }

    pub fn with_trace(mut self, enable_trace: bool) -> Self {
        self.enable_trace = Some(enable_trace);
        self
    }

    /// Ask the platform to close the session after this turn
    pub fn end_session(mut self) -> Self {
        self.end_session = Some(true);
        self
    }
}

/// Session state sent along with an invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_session_attributes: Option<Value>,
}

/// Payload of a `chunk` event
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PayloadPart {
    /// Base64 encoded completion bytes
    #[serde(default)]
    pub bytes: Option<String>,
    #[serde(default)]
    pub attribution: Option<Value>,
}

impl PayloadPart {
    /// Decoded completion bytes
    pub fn decode(&self) -> Result<Vec<u8>> {
        match &self.bytes {
            Some(encoded) => STANDARD
                .decode(encoded)
                .map_err(|e| AgentError::Stream(format!("invalid chunk bytes: {}", e))),
            None => Ok(Vec::new()),
        }
    }
}

/// Event received on the completion stream
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionEvent {
    Chunk(PayloadPart),
    Trace(Value),
    ReturnControl(Value),
    Other { event_type: String, payload: Value },
}

impl CompletionEvent {
    pub fn event_type(&self) -> &str {
        match self {
            CompletionEvent::Chunk(_) => "chunk",
            CompletionEvent::Trace(_) => "trace",
            CompletionEvent::ReturnControl(_) => "returnControl",
            CompletionEvent::Other { event_type, .. } => event_type,
        }
    }
}
