//! Generation request/result data model

mod request;
mod result;

pub use request::{GenerationRequest, DEFAULT_TIMEOUT_MILLIS, PLACEHOLDER_API_KEY};
pub use result::GenerationResult;
