//! Action group dispatcher
//!
//! Resolves a platform event into an [`ActionRequest`], runs it, and wraps the
//! outcome in the response envelope. Validation failures never escape: they are
//! turned into a 400 envelope carrying `{ "error": <message> }`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{error, info};

use super::operations::{TextOperation, TextProcessingResult};
use super::types::{ActionGroupEvent, ActionGroupResponse};

/// Path of the current time query
pub const GET_CURRENT_TIME_PATH: &str = "/get-current-time";
/// Path of the text processing operation
pub const PROCESS_TEXT_PATH: &str = "/process-text";

/// Status code of a successful call
pub const STATUS_OK: u16 = 200;
/// Status code of any validation failure
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Local validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Unsupported API path: {0}")]
    UnsupportedPath(String),

    #[error("Unsupported method {method} for {path}")]
    UnsupportedMethod { method: String, path: String },

    #[error("Missing required parameters: text and operation")]
    MissingParameters,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// A resolved capability call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    GetCurrentTime,
    ProcessText {
        text: String,
        operation: TextOperation,
    },
}

impl ActionRequest {
    /// Resolve the (path, method) pair and body of `event`
    pub fn from_event(event: &ActionGroupEvent) -> Result<Self, ActionError> {
        let path = event.api_path.as_str();
        let method = event.http_method.as_str();

        match path {
            GET_CURRENT_TIME_PATH => {
                require_method(method, "GET", path)?;
                Ok(ActionRequest::GetCurrentTime)
            }
            PROCESS_TEXT_PATH => {
                require_method(method, "POST", path)?;

                let text = event.field("text").filter(|t| !t.is_empty());
                let operation = event.field("operation").filter(|o| !o.is_empty());
                let (Some(text), Some(operation)) = (text, operation) else {
                    return Err(ActionError::MissingParameters);
                };

                Ok(ActionRequest::ProcessText {
                    text: text.to_string(),
                    operation: operation.parse()?,
                })
            }
            _ => Err(ActionError::UnsupportedPath(path.to_string())),
        }
    }
}

fn require_method(method: &str, expected: &str, path: &str) -> Result<(), ActionError> {
    if method == expected {
        Ok(())
    } else {
        Err(ActionError::UnsupportedMethod {
            method: method.to_string(),
            path: path.to_string(),
        })
    }
}

/// Stateless dispatcher for action group events
#[derive(Debug, Clone, Copy)]
pub struct ActionDispatcher {
    clock: fn() -> DateTime<Utc>,
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionDispatcher {
    /// Dispatcher reading the system clock
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    /// Dispatcher reading time from `clock`
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock }
    }

    /// Handle one event; always produces a well-formed envelope
    pub fn dispatch(&self, event: &ActionGroupEvent) -> ActionGroupResponse {
        info!(
            action_group = %event.action_group,
            api_path = %event.api_path,
            http_method = %event.http_method,
            session_id = %event.session_id,
            event = %serde_json::to_string(event).unwrap_or_default(),
            "Received event"
        );

        let (status, payload) = match ActionRequest::from_event(event) {
            Ok(request) => (STATUS_OK, self.execute(request)),
            Err(e) => {
                error!(error = %e, api_path = %event.api_path, "Error processing request");
                (STATUS_BAD_REQUEST, json!({ "error": e.to_string() }))
            }
        };

        let response = ActionGroupResponse::for_event(event, status, &payload);
        info!(
            status = response.status(),
            response = %serde_json::to_string(&response).unwrap_or_default(),
            "Sending response"
        );
        response
    }

    /// Run a resolved request and produce its success payload
    pub fn execute(&self, request: ActionRequest) -> Value {
        match request {
            ActionRequest::GetCurrentTime => json!({
                "currentTime": (self.clock)().to_rfc3339_opts(SecondsFormat::Millis, true),
            }),
            ActionRequest::ProcessText { text, operation } => {
                let result = TextProcessingResult::compute(&text, operation);
                json!({
                    "result": result.result,
                    "originalText": result.original_text,
                    "operation": result.operation.as_str(),
                })
            }
        }
    }
}
