//! Applymate
//!
//! Job application assistant built around one generative request at a time:
//! - composes cover-letter and CV-optimization prompts from a job description
//!   and the user's CV
//! - sends a single Gemini `generateContent` request with a deadline
//! - classifies every outcome into a user-presentable success or failure
//!
//! The library exposes the provider and settings seams for embedding; the
//! binary fronts them with a small CLI.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, GenerationRequest, GenerationResult, GenerativeProvider};
pub use infrastructure::assistant::AssistantService;
pub use infrastructure::llm::{GeminiProvider, HttpClient};
