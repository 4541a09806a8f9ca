use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// One settled HTTP exchange: status plus the parsed JSON body.
///
/// Non-2xx statuses are returned as values so the adapter owns classification;
/// only transport-level failures surface as errors. An unparsable body is
/// `Value::Null` - classification treats it as "no error message field".
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .json()
            .await
            .unwrap_or(serde_json::Value::Null);

        Ok(HttpResponse { status, body })
    }
}
