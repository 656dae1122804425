//! Action group wire types
//!
//! Event and response shapes exchanged between the Bedrock agent platform and the
//! action group Lambda function (message version 1.0).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Content type used for request and response bodies
pub const APPLICATION_JSON: &str = "application/json";

/// Agent metadata carried by every event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub version: String,
}

/// A named, typed value as sent by the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: String,
    pub value: Value,
}

/// Request body keyed by content type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub content: HashMap<String, Value>,
}

/// Event the agent platform sends when it invokes the action group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGroupEvent {
    #[serde(default = "default_message_version")]
    pub message_version: String,
    #[serde(default)]
    pub agent: AgentInfo,
    #[serde(default)]
    pub input_text: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub action_group: String,
    #[serde(default)]
    pub api_path: String,
    #[serde(default)]
    pub http_method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub session_attributes: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub prompt_session_attributes: HashMap<String, String>,
}

fn default_message_version() -> String {
    "1.0".to_string()
}

impl ActionGroupEvent {
    /// Create an event for a path and method with no body
    pub fn new(api_path: impl Into<String>, http_method: impl Into<String>) -> Self {
        Self {
            message_version: default_message_version(),
            api_path: api_path.into(),
            http_method: http_method.into(),
            ..Default::default()
        }
    }

    /// Attach a flat JSON body under `application/json`
    pub fn with_json_body(mut self, body: Value) -> Self {
        let mut content = HashMap::new();
        content.insert(APPLICATION_JSON.to_string(), body);
        self.request_body = Some(RequestBody { content });
        self
    }

    /// Set the action group name
    pub fn with_action_group(mut self, action_group: impl Into<String>) -> Self {
        self.action_group = action_group.into();
        self
    }

    /// Look up a named string field of the request
    ///
    /// The JSON body is searched first, either as a flat object or as the
    /// `properties` list the platform emits, then the top-level parameters.
    /// Non-string values are treated as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.body_field(name).or_else(|| {
            self.parameters
                .iter()
                .find(|p| p.name == name)
                .and_then(|p| p.value.as_str())
        })
    }

    fn body_field(&self, name: &str) -> Option<&str> {
        let body = self.request_body.as_ref()?.content.get(APPLICATION_JSON)?;

        if let Some(value) = body.get(name) {
            return value.as_str();
        }

        body.get("properties")?
            .as_array()?
            .iter()
            .find(|p| p.get("name").and_then(Value::as_str) == Some(name))
            .and_then(|p| p.get("value"))
            .and_then(Value::as_str)
    }
}

/// Serialized response body for one content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseContent {
    /// JSON-encoded payload
    pub body: String,
}

/// Response section of the envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub action_group: String,
    pub api_path: String,
    pub http_method: String,
    pub http_status_code: u16,
    pub response_body: HashMap<String, ResponseContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_session_attributes: Option<HashMap<String, String>>,
}

/// Envelope returned to the agent platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGroupResponse {
    pub message_version: String,
    pub response: ActionResponse,
}

impl ActionGroupResponse {
    /// Build a response for `event` carrying `payload` as the JSON body
    pub fn for_event(event: &ActionGroupEvent, status: u16, payload: &Value) -> Self {
        let mut response_body = HashMap::new();
        response_body.insert(
            APPLICATION_JSON.to_string(),
            ResponseContent {
                body: payload.to_string(),
            },
        );

        Self {
            message_version: event.message_version.clone(),
            response: ActionResponse {
                action_group: event.action_group.clone(),
                api_path: event.api_path.clone(),
                http_method: event.http_method.clone(),
                http_status_code: status,
                response_body,
                session_attributes: non_empty(&event.session_attributes),
                prompt_session_attributes: non_empty(&event.prompt_session_attributes),
            },
        }
    }

    /// HTTP-style status code
    pub fn status(&self) -> u16 {
        self.response.http_status_code
    }

    /// Whether the status signals success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Decode the JSON body
    pub fn json_body(&self) -> Option<Value> {
        self.response
            .response_body
            .get(APPLICATION_JSON)
            .and_then(|content| serde_json::from_str(&content.body).ok())
    }
}

fn non_empty(attributes: &HashMap<String, String>) -> Option<HashMap<String, String>> {
    if attributes.is_empty() {
        None
    } else {
        Some(attributes.clone())
    }
}
