//! AWS credentials
//!
//! Static credentials read from the standard environment variables.

use crate::utils::error::{AgentError, Result};
use std::env;
use std::fmt;

/// AWS authentication credentials
#[derive(Clone)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl AwsCredentials {
    /// Create credentials from explicit values
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    /// Read `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
    pub fn from_env() -> Result<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").map_err(|_| {
            AgentError::Credentials("AWS_ACCESS_KEY_ID environment variable not found".to_string())
        })?;

        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").map_err(|_| {
            AgentError::Credentials(
                "AWS_SECRET_ACCESS_KEY environment variable not found".to_string(),
            )
        })?;

        let session_token = env::var("AWS_SESSION_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let credentials = Self::new(access_key_id, secret_access_key, session_token);
        credentials.validate()?;
        Ok(credentials)
    }

    /// Whether these are temporary (STS) credentials
    pub fn is_temporary(&self) -> bool {
        self.session_token.is_some()
    }

    /// Validate credentials format
    pub fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(AgentError::Credentials(
                "AWS access key ID cannot be empty".to_string(),
            ));
        }

        if self.secret_access_key.is_empty() {
            return Err(AgentError::Credentials(
                "AWS secret access key cannot be empty".to_string(),
            ));
        }

        // Long-term keys start with AKIA, temporary ones with ASIA
        if !self.access_key_id.starts_with("AKIA") && !self.access_key_id.starts_with("ASIA") {
            return Err(AgentError::Credentials(
                "Invalid AWS access key format".to_string(),
            ));
        }

        Ok(())
    }
}
