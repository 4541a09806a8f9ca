use serde::Serialize;

use crate::domain::DomainError;

/// Outcome of one generation call: exactly one variant is populated.
///
/// Failures carry the fixed user-presentable message; callers render it
/// verbatim and never inspect the underlying error kind. Serialize-only: the
/// untagged representation is for display surfaces, and round-tripping two
/// one-string-field variants through it would be ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Success { content: String },
    Failure { message: String },
}

impl GenerationResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self::Success {
            content: content.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Success { content } => Some(content),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}

impl From<Result<String, DomainError>> for GenerationResult {
    fn from(outcome: Result<String, DomainError>) -> Self {
        match outcome {
            Ok(content) => Self::Success { content },
            Err(error) => Self::Failure {
                message: error.user_message(),
            },
        }
    }
}
