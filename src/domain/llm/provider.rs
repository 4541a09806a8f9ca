use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::generation::GenerationRequest;

/// Trait for generative-text providers.
///
/// One invocation performs exactly one outbound request: no retries, no
/// caching, no state shared between calls. Concurrent invocations are fully
/// isolated; any serialization is the caller's concern.
#[async_trait]
pub trait GenerativeProvider: Send + Sync + Debug {
    /// Send one generation request and return the generated text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
