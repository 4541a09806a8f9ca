use thiserror::Error;

/// Core domain errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Rate limited by the API")]
    RateLimited,

    #[error("Authentication rejected by the API")]
    Auth,

    #[error("API error: status {status}")]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Response contained no generated text")]
    EmptyResponse,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: Option<String>) -> Self {
        Self::Api { status, message }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The fixed, user-presentable message for this error.
    ///
    /// Callers display this string verbatim; they never branch on the variant
    /// to render an outcome.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Credential { message }
            | Self::Storage { message }
            | Self::Configuration { message } => message.clone(),
            Self::Timeout { seconds } => format!(
                "Request timed out after {} seconds. Please try again.",
                seconds
            ),
            Self::Network { .. } => {
                "Network error. Please check your connection and try again.".to_string()
            }
            Self::RateLimited => {
                "Too many requests. Please try again in a few minutes.".to_string()
            }
            Self::Auth => {
                "Authentication error. Please check your API key in settings.".to_string()
            }
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Api { status, .. } => format!("API request failed with status {}", status),
            Self::EmptyResponse => "No response generated. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let error = DomainError::timeout(35);
        assert_eq!(
            error.user_message(),
            "Request timed out after 35 seconds. Please try again."
        );
    }

    #[test]
    fn test_rate_limited_message() {
        assert_eq!(
            DomainError::RateLimited.user_message(),
            "Too many requests. Please try again in a few minutes."
        );
    }

    #[test]
    fn test_auth_message() {
        assert_eq!(
            DomainError::Auth.user_message(),
            "Authentication error. Please check your API key in settings."
        );
    }

    #[test]
    fn test_api_error_prefers_server_message() {
        let error = DomainError::api(400, Some("API key not valid".to_string()));
        assert_eq!(error.user_message(), "API key not valid");

        let error = DomainError::api(500, None);
        assert_eq!(error.user_message(), "API request failed with status 500");
    }

    #[test]
    fn test_validation_message_passthrough() {
        let error = DomainError::validation("Invalid prompt: must be a non-empty string");
        assert_eq!(
            error.user_message(),
            "Invalid prompt: must be a non-empty string"
        );
    }
}
