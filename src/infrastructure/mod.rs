//! Infrastructure layer - External service implementations

pub mod assistant;
pub mod llm;
pub mod logging;
pub mod settings;
