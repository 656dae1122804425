//! Test fixtures and data factories
//!
//! Builders for action group events and InvokeAgent event stream bodies.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bedrock_agents::action_group::{ActionGroupEvent, AgentInfo, Parameter};
use bedrock_agents::agent::event_stream::EventStreamMessage;
use serde_json::{Value, json};

/// Factory for action group events
pub struct EventFactory;

impl EventFactory {
    /// Event with the agent metadata the platform fills in
    pub fn create(api_path: &str, http_method: &str) -> ActionGroupEvent {
        let mut event = ActionGroupEvent::new(api_path, http_method).with_action_group("sample-actions");
        event.agent = AgentInfo {
            name: "sample-agent".to_string(),
            id: "AGENT123".to_string(),
            alias: "ALIAS456".to_string(),
            version: "1".to_string(),
        };
        event.session_id = "session-1700000000000-abc123def".to_string();
        event
    }

    pub fn current_time() -> ActionGroupEvent {
        Self::create("/get-current-time", "GET")
    }

    /// `/process-text` with a flat JSON body
    pub fn process_text(text: &str, operation: &str) -> ActionGroupEvent {
        Self::create("/process-text", "POST")
            .with_json_body(json!({ "text": text, "operation": operation }))
    }

    /// `/process-text` with the `properties` body the platform sends
    pub fn process_text_properties(text: &str, operation: &str) -> ActionGroupEvent {
        Self::create("/process-text", "POST").with_json_body(json!({
            "properties": [
                { "name": "text", "type": "string", "value": text },
                { "name": "operation", "type": "string", "value": operation }
            ]
        }))
    }

    /// `/process-text` with the values as top-level parameters
    pub fn process_text_parameters(text: &str, operation: &str) -> ActionGroupEvent {
        let mut event = Self::create("/process-text", "POST");
        event.parameters = vec![
            Parameter {
                name: "text".to_string(),
                param_type: "string".to_string(),
                value: Value::String(text.to_string()),
            },
            Parameter {
                name: "operation".to_string(),
                param_type: "string".to_string(),
                value: Value::String(operation.to_string()),
            },
        ];
        event
    }
}

/// Factory for InvokeAgent response bodies
pub struct StreamFactory;

impl StreamFactory {
    /// `chunk` event carrying `bytes`
    pub fn chunk(bytes: &[u8]) -> Vec<u8> {
        let payload = json!({ "bytes": STANDARD.encode(bytes) }).to_string();
        Self::event("chunk", &payload)
    }

    /// Any event frame
    pub fn event(event_type: &str, payload: &str) -> Vec<u8> {
        EventStreamMessage::new(
            &[
                (":message-type", "event"),
                (":event-type", event_type),
                (":content-type", "application/json"),
            ],
            payload.as_bytes().to_vec(),
        )
        .encode()
    }

    pub fn trace() -> Vec<u8> {
        Self::event(
            "trace",
            r#"{"agentId":"AGENT123","trace":{"orchestrationTrace":{"rationale":{"text":"use the action"}}}}"#,
        )
    }

    pub fn exception(exception_type: &str, message: &str) -> Vec<u8> {
        EventStreamMessage::new(
            &[
                (":message-type", "exception"),
                (":exception-type", exception_type),
                (":content-type", "application/json"),
            ],
            json!({ "message": message }).to_string().into_bytes(),
        )
        .encode()
    }

    /// Concatenate frames into one response body
    pub fn body(frames: &[Vec<u8>]) -> Vec<u8> {
        frames.concat()
    }
}
