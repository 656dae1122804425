//! Agent runtime HTTP client
//!
//! Sends SigV4-signed `InvokeAgent` requests and consumes the event stream
//! response.

use chrono::Utc;
use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;
use tracing::{debug, error, info};

use super::credentials::AwsCredentials;
use super::errors::{AgentErrorMapper, ERROR_TYPE_HEADER};
use super::session::validate_session_id;
use super::sigv4::{SigV4Signer, uri_encode};
use super::stream::CompletionStream;
use super::types::{CompletionEvent, InvokeAgentRequest};
use crate::config::models::agent::AgentConfig;
use crate::utils::error::{AgentError, Result};
use crate::utils::logging::truncate_for_log;

const EVENT_STREAM_CONTENT_TYPE: &str = "application/vnd.amazon.eventstream";

/// Client for a single agent alias
#[derive(Debug, Clone)]
pub struct BedrockAgentClient {
    http: Client,
    config: AgentConfig,
    signer: SigV4Signer,
    error_mapper: AgentErrorMapper,
}

impl BedrockAgentClient {
    /// Create a new client
    pub fn new(config: AgentConfig, credentials: AwsCredentials) -> Result<Self> {
        credentials.validate()?;

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AgentError::Config(format!("Failed to build HTTP client: {}", e)))?;
        let signer = SigV4Signer::new(credentials, config.region.clone());

        Ok(Self {
            http,
            config,
            signer,
            error_mapper: AgentErrorMapper,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// URL of the InvokeAgent operation for a session
    pub fn build_url(&self, session_id: &str) -> String {
        format!(
            "{}/agents/{}/agentAliases/{}/sessions/{}/text",
            self.config.endpoint_url(),
            uri_encode(&self.config.agent_id),
            uri_encode(&self.config.agent_alias_id),
            uri_encode(session_id)
        )
    }

    fn signed_headers(&self, url: &str, body: &[u8]) -> Result<HeaderMap> {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("accept".to_string(), EVENT_STREAM_CONTENT_TYPE.to_string());

        let signed = self
            .signer
            .sign_request("POST", url, &headers, body, Utc::now())
            .map_err(AgentError::Signing)?;

        let mut header_map = HeaderMap::new();
        for (key, value) in signed {
            // reqwest derives Host from the URL
            if key == "host" {
                continue;
            }
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| AgentError::Signing(format!("invalid header {}: {}", key, e)))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| AgentError::Signing(format!("invalid value for {}: {}", key, e)))?;
            header_map.insert(name, value);
        }
        Ok(header_map)
    }

    /// Start an invocation and return the ordered completion events
    pub async fn invoke_agent_stream(
        &self,
        request: &InvokeAgentRequest,
    ) -> Result<CompletionStream> {
        validate_session_id(&request.session_id)?;

        let mut request = request.clone();
        if request.enable_trace.is_none() && self.config.enable_trace {
            request.enable_trace = Some(true);
        }

        let url = self.build_url(&request.session_id);
        let body = serde_json::to_vec(&request)?;
        let headers = self.signed_headers(&url, &body)?;

        info!(
            agent_id = %self.config.agent_id,
            agent_alias_id = %self.config.agent_alias_id,
            session_id = %request.session_id,
            input = %truncate_for_log(&request.input_text, 200),
            "Invoking agent"
        );

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_type = response
                .headers()
                .get(ERROR_TYPE_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let error_body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                error_type = error_type.as_deref().unwrap_or("-"),
                "Agent invocation failed: {}",
                truncate_for_log(&error_body, 500)
            );
            return Err(self.error_mapper.map_http_error(
                status.as_u16(),
                error_type.as_deref(),
                &error_body,
            ));
        }

        Ok(CompletionStream::new(response.bytes_stream()))
    }

    /// Invoke the agent and return the full completion text
    ///
    /// Chunk bytes are concatenated in arrival order and decoded once, so
    /// multi-byte characters may span chunks.
    pub async fn invoke_agent(&self, request: &InvokeAgentRequest) -> Result<String> {
        let mut stream = self.invoke_agent_stream(request).await?;
        let mut completion = Vec::new();
        let mut events = 0usize;

        while let Some(event) = stream.next().await {
            events += 1;
            match event? {
                CompletionEvent::Chunk(part) => completion.extend(part.decode()?),
                CompletionEvent::Trace(trace) => debug!(trace = %trace, "Agent trace"),
                other => debug!(event_type = other.event_type(), "Ignoring completion event"),
            }
        }

        if events == 0 {
            return Err(AgentError::NoCompletion);
        }

        let text = String::from_utf8_lossy(&completion).into_owned();
        info!(
            session_id = %request.session_id,
            events,
            completion_len = text.len(),
            "Agent invocation completed"
        );
        Ok(text)
    }
}
