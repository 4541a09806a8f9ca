//! Domain layer - Core types and seams

pub mod error;
pub mod generation;
pub mod llm;
pub mod prompt;
pub mod settings;

pub use error::DomainError;
pub use generation::{GenerationRequest, GenerationResult, PLACEHOLDER_API_KEY};
pub use llm::GenerativeProvider;
pub use prompt::{PromptTemplate, TemplateError};
pub use settings::SettingsStore;
