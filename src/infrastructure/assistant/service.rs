//! Assistant service
//!
//! The caller-facing surface: resolves the stored CV and API key, composes the
//! prompt for the requested operation, invokes the generative provider once,
//! and folds every outcome into a `GenerationResult`. Stateless; concurrent
//! calls are fully isolated and no serialization is imposed.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::generation::DEFAULT_TIMEOUT_MILLIS;
use crate::domain::prompt::{cover_letter_prompt, optimize_cv_prompt};
use crate::domain::settings::{API_KEY, USER_CV};
use crate::domain::{
    DomainError, GenerationRequest, GenerationResult, GenerativeProvider, SettingsStore,
};

const MISSING_COVER_LETTER_FIELDS: &str =
    "Missing required fields: job description, CV, and API key are required.";
const MISSING_CV_OPTIMIZATION_FIELDS: &str =
    "Missing required fields: target job description, CV, and API key are required.";

/// Service coordinating one assistant operation per call.
#[derive(Debug)]
pub struct AssistantService<P: GenerativeProvider, S: SettingsStore> {
    provider: Arc<P>,
    settings: Arc<S>,
    timeout: Duration,
    api_key_override: Option<String>,
}

impl<P: GenerativeProvider, S: SettingsStore> AssistantService<P, S> {
    pub fn new(provider: Arc<P>, settings: Arc<S>) -> Self {
        Self {
            provider,
            settings,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MILLIS),
            api_key_override: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use this API key instead of the stored one.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key_override = Some(api_key.into());
        self
    }

    /// Generate a cover letter for a job description.
    ///
    /// The CV comes from `cv_override` when given, otherwise from the settings
    /// store. Every outcome, including storage failures, is folded into the
    /// returned result.
    pub async fn generate_cover_letter(
        &self,
        job_description: &str,
        cv_override: Option<&str>,
    ) -> GenerationResult {
        tracing::info!(
            job_len = job_description.len(),
            "Generating cover letter"
        );

        self.run(
            job_description,
            cv_override,
            MISSING_COVER_LETTER_FIELDS,
            cover_letter_prompt,
        )
        .await
    }

    /// Optimize the stored (or given) CV for a target job description.
    pub async fn optimize_cv(
        &self,
        target_job: &str,
        cv_override: Option<&str>,
    ) -> GenerationResult {
        tracing::info!(job_len = target_job.len(), "Optimizing CV");

        self.run(
            target_job,
            cv_override,
            MISSING_CV_OPTIMIZATION_FIELDS,
            optimize_cv_prompt,
        )
        .await
    }

    async fn run(
        &self,
        job_description: &str,
        cv_override: Option<&str>,
        missing_fields_message: &str,
        compose: fn(&str, &str) -> Result<String, crate::domain::TemplateError>,
    ) -> GenerationResult {
        self.try_run(job_description, cv_override, missing_fields_message, compose)
            .await
            .into()
    }

    async fn try_run(
        &self,
        job_description: &str,
        cv_override: Option<&str>,
        missing_fields_message: &str,
        compose: fn(&str, &str) -> Result<String, crate::domain::TemplateError>,
    ) -> Result<String, DomainError> {
        if job_description.trim().is_empty() {
            return Err(DomainError::validation(missing_fields_message));
        }

        let cv = match cv_override {
            Some(cv) => Some(cv.to_string()),
            None => self.settings.get_one(USER_CV).await?,
        };
        let cv = cv
            .filter(|cv| !cv.trim().is_empty())
            .ok_or_else(|| DomainError::validation(missing_fields_message))?;

        let credential = match self.api_key_override.clone() {
            Some(key) => key,
            None => self.settings.get_one(API_KEY).await?.unwrap_or_default(),
        };

        let prompt = compose(job_description, &cv)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        tracing::debug!(prompt_len = prompt.len(), "Prompt composed");

        let request =
            GenerationRequest::new(prompt, credential).with_timeout(self.timeout);

        self.provider.generate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::mock::MockProvider;
    use crate::domain::settings::mock::MockSettingsStore;

    fn service(
        provider: MockProvider,
        settings: MockSettingsStore,
    ) -> AssistantService<MockProvider, MockSettingsStore> {
        AssistantService::new(Arc::new(provider), Arc::new(settings))
    }

    fn configured_settings() -> MockSettingsStore {
        MockSettingsStore::new()
            .with_entry(API_KEY, "test-key")
            .with_entry(USER_CV, "Ten years of Rust experience")
    }

    #[tokio::test]
    async fn test_cover_letter_uses_stored_cv() {
        let service = service(
            MockProvider::new().with_response("Dear hiring manager,"),
            configured_settings(),
        );

        let result = service.generate_cover_letter("Rust engineer", None).await;
        assert_eq!(result.content(), Some("Dear hiring manager,"));
    }

    #[tokio::test]
    async fn test_cv_override_wins_over_stored_cv() {
        let settings = MockSettingsStore::new().with_entry(API_KEY, "test-key");
        let service = service(MockProvider::new().with_response("letter"), settings);

        let result = service
            .generate_cover_letter("Rust engineer", Some("Override CV"))
            .await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_missing_job_description() {
        let service = service(
            MockProvider::new().with_response("unused"),
            configured_settings(),
        );

        let result = service.generate_cover_letter("", None).await;
        assert_eq!(
            result.message(),
            Some("Missing required fields: job description, CV, and API key are required.")
        );
    }

    #[tokio::test]
    async fn test_missing_cv() {
        let settings = MockSettingsStore::new().with_entry(API_KEY, "test-key");
        let service = service(MockProvider::new().with_response("unused"), settings);

        let result = service.optimize_cv("Rust engineer", None).await;
        assert_eq!(
            result.message(),
            Some("Missing required fields: target job description, CV, and API key are required.")
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_fast() {
        let settings = MockSettingsStore::new().with_entry(USER_CV, "my cv");
        let service = service(MockProvider::new().with_response("unused"), settings);

        let result = service.generate_cover_letter("Rust engineer", None).await;
        assert_eq!(
            result.message(),
            Some("Please configure your Gemini API key in settings")
        );
    }

    #[tokio::test]
    async fn test_api_key_override() {
        let settings = MockSettingsStore::new().with_entry(USER_CV, "my cv");
        let service = service(MockProvider::new().with_response("letter"), settings)
            .with_api_key("override-key");

        let result = service.generate_cover_letter("Rust engineer", None).await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_provider_error_message_passthrough() {
        let service = service(
            MockProvider::new().with_error(DomainError::RateLimited),
            configured_settings(),
        );

        let result = service.optimize_cv("Rust engineer", None).await;
        assert_eq!(
            result.message(),
            Some("Too many requests. Please try again in a few minutes.")
        );
    }

    #[tokio::test]
    async fn test_storage_error_becomes_failure() {
        let service = service(
            MockProvider::new().with_response("unused"),
            MockSettingsStore::new().with_error("disk unavailable"),
        );

        let result = service.generate_cover_letter("Rust engineer", None).await;
        assert_eq!(result.message(), Some("disk unavailable"));
    }
}
