//! Mapping of agent runtime failures to [`AgentError`]
//!
//! The runtime reports failures in two places: the HTTP status of the
//! response (with `x-amzn-ErrorType` and a JSON `message`), and exception
//! frames inside an already-open event stream.

use serde_json::Value;

use crate::utils::error::AgentError;

/// Header carrying the AWS error type on failed responses
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Error mapper for the agent runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentErrorMapper;

impl AgentErrorMapper {
    /// Map a non-success HTTP response
    ///
    /// `error_type` is the raw `x-amzn-ErrorType` header value, which may carry
    /// a `:`-separated suffix.
    pub fn map_http_error(
        &self,
        status_code: u16,
        error_type: Option<&str>,
        response_body: &str,
    ) -> AgentError {
        let error_type = error_type
            .and_then(|t| t.split(':').next())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| json_field(response_body, "__type"))
            .unwrap_or_else(|| "UnknownError".to_string());
        let message = json_field(response_body, "message")
            .or_else(|| json_field(response_body, "Message"))
            .unwrap_or_else(|| response_body.trim().to_string());

        match status_code {
            400 => AgentError::Validation(format!("{}: {}", error_type, message)),
            401 | 403 => AgentError::AccessDenied(message),
            404 => AgentError::NotFound(message),
            429 => AgentError::Throttled(message),
            _ => AgentError::Api {
                status: status_code,
                error_type,
                message,
            },
        }
    }

    /// Map an `exception` frame received mid-stream
    pub fn map_stream_exception(&self, exception_type: &str, payload: &[u8]) -> AgentError {
        let body = String::from_utf8_lossy(payload);
        let message = json_field(&body, "message").unwrap_or_else(|| body.trim().to_string());

        match exception_type {
            "validationException" => AgentError::Validation(message),
            "accessDeniedException" => AgentError::AccessDenied(message),
            "resourceNotFoundException" => AgentError::NotFound(message),
            "throttlingException" | "serviceQuotaExceededException" => {
                AgentError::Throttled(message)
            }
            other => AgentError::Stream(format!("{}: {}", other, message)),
        }
    }
}

fn json_field(body: &str, field: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get(field)?
        .as_str()
        .map(str::to_string)
}
