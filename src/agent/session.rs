//! Session identifiers

use chrono::Utc;
use rand::Rng;

use crate::utils::error::{AgentError, Result};

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh session id: `session-<unix millis>-<9 base36 chars>`
pub fn generate_session_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("session-{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Check a caller supplied session id against the platform constraints
pub fn validate_session_id(session_id: &str) -> Result<()> {
    let len = session_id.chars().count();
    if !(2..=100).contains(&len) {
        return Err(AgentError::InvalidSessionId(format!(
            "'{}' must be between 2 and 100 characters",
            session_id
        )));
    }

    if let Some(c) = session_id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | ':' | '-')))
    {
        return Err(AgentError::InvalidSessionId(format!(
            "'{}' contains invalid character '{}'",
            session_id, c
        )));
    }

    Ok(())
}

/// Use the given session id after validation, or generate one
pub fn resolve_session_id(session_id: Option<&str>) -> Result<String> {
    match session_id {
        Some(id) => {
            validate_session_id(id)?;
            Ok(id.to_string())
        }
        None => Ok(generate_session_id()),
    }
}
