//! Text operations offered by the `/process-text` action

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dispatcher::ActionError;

/// One of the fixed text operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOperation {
    CountWords,
    CountCharacters,
    ToUppercase,
    ToLowercase,
}

impl TextOperation {
    /// Every supported operation, in schema order
    pub const ALL: [TextOperation; 4] = [
        TextOperation::CountWords,
        TextOperation::CountCharacters,
        TextOperation::ToUppercase,
        TextOperation::ToLowercase,
    ];

    /// Wire name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            TextOperation::CountWords => "count_words",
            TextOperation::CountCharacters => "count_characters",
            TextOperation::ToUppercase => "to_uppercase",
            TextOperation::ToLowercase => "to_lowercase",
        }
    }

    /// Apply the operation and format the human-readable result
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextOperation::CountWords => format!("Word count: {}", count_words(text)),
            TextOperation::CountCharacters => {
                format!("Character count: {}", count_characters(text))
            }
            TextOperation::ToUppercase => text.to_uppercase(),
            TextOperation::ToLowercase => text.to_lowercase(),
        }
    }
}

impl fmt::Display for TextOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextOperation {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextOperation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ActionError::UnsupportedOperation(s.to_string()))
    }
}

/// Number of maximal non-whitespace runs
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Literal length in characters, whitespace included
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Payload returned by a successful `/process-text` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProcessingResult {
    pub result: String,
    pub original_text: String,
    pub operation: TextOperation,
}

impl TextProcessingResult {
    /// Run `operation` over `text`
    pub fn compute(text: &str, operation: TextOperation) -> Self {
        Self {
            result: operation.apply(text),
            original_text: text.to_string(),
            operation,
        }
    }
}
