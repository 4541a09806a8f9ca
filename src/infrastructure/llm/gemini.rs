//! Gemini `generateContent` adapter
//!
//! Performs exactly one generative-text request per invocation and classifies
//! the outcome. Validation happens before any network I/O; the HTTP call races
//! the request deadline, and the loser of that race is dropped.

use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::{HttpClientTrait, HttpResponse};
use crate::domain::{DomainError, GenerationRequest, GenerativeProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Safety filter sent with every request. Fixed policy, not caller-configurable.
const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

const TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Gemini API provider
#[derive(Debug)]
pub struct GeminiProvider<C: HttpClientTrait> {
    client: C,
    model: String,
    base_url: String,
}

impl<C: HttpClientTrait> GeminiProvider<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn generate_url(&self, credential: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, credential
        )
    }

    fn build_request(&self, prompt: &str) -> serde_json::Value {
        let safety_settings: Vec<serde_json::Value> = SAFETY_CATEGORIES
            .iter()
            .map(|category| {
                serde_json::json!({
                    "category": category,
                    "threshold": SAFETY_THRESHOLD,
                })
            })
            .collect();

        serde_json::json!({
            "contents": [{
                "parts": [{
                    "text": prompt
                }]
            }],
            "safetySettings": safety_settings,
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            }
        })
    }

    fn classify_error(&self, response: &HttpResponse) -> DomainError {
        match response.status {
            429 => DomainError::RateLimited,
            401 | 403 => DomainError::Auth,
            status => {
                let message = response.body["error"]["message"]
                    .as_str()
                    .map(|m| m.to_string());
                DomainError::api(status, message)
            }
        }
    }

    fn extract_text(&self, body: serde_json::Value) -> Result<String, DomainError> {
        let response: GeminiResponse =
            serde_json::from_value(body).map_err(|_| DomainError::EmptyResponse)?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or(DomainError::EmptyResponse)
    }
}

#[async_trait]
impl<C: HttpClientTrait> GenerativeProvider for GeminiProvider<C> {
    async fn generate(&self, request: GenerationRequest) -> Result<String, DomainError> {
        request.validate()?;

        let url = self.generate_url(&request.credential);
        let body = self.build_request(&request.prompt);
        let headers = vec![("Content-Type", "application/json")];

        // First of {response, deadline} wins; the losing future is dropped,
        // which cancels the in-flight request.
        let response = tokio::time::timeout(
            request.timeout,
            self.client.post_json(&url, headers, &body),
        )
        .await
        .map_err(|_| DomainError::timeout(request.timeout.as_secs()))??;

        tracing::debug!(status = response.status, body = %response.body, "Gemini API response");

        if !response.is_success() {
            return Err(self.classify_error(&response));
        }

        self.extract_text(response.body)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

// Gemini API response types

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
