//! Prompt composition for the assistant's two operations

mod template;
mod templates;

pub use template::{PromptTemplate, PromptVariable, TemplateError};
pub use templates::{cover_letter_prompt, optimize_cv_prompt};
