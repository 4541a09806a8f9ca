use std::time::Duration;

use crate::domain::DomainError;

/// Sentinel value shipped in place of a real API key. Requests carrying it are
/// guaranteed to be rejected by the remote service, so they are rejected here
/// instead, before any network I/O.
pub const PLACEHOLDER_API_KEY: &str = "[GEMINI_API_KEY]";

/// Default deadline for one generation request.
pub const DEFAULT_TIMEOUT_MILLIS: u64 = 35_000;

/// One generative-text request: a composed prompt, the credential authorizing
/// it, and the deadline for the round trip.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub credential: String,
    pub timeout: Duration,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            credential: credential.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MILLIS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_millis(self, millis: u64) -> Self {
        self.with_timeout(Duration::from_millis(millis))
    }

    /// Validate the request before spending a network round trip.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.prompt.trim().is_empty() {
            return Err(DomainError::validation(
                "Invalid prompt: must be a non-empty string",
            ));
        }

        if self.credential.is_empty() || self.credential == PLACEHOLDER_API_KEY {
            return Err(DomainError::credential(
                "Please configure your Gemini API key in settings",
            ));
        }

        Ok(())
    }
}
