//! User settings - key-value collaborator for the credential and stored CV

mod store;

pub use store::SettingsStore;

#[cfg(test)]
pub use store::mock;

/// Storage key for the Gemini API key.
pub const API_KEY: &str = "gemini_api_key";

/// Storage key for the user's CV text.
pub const USER_CV: &str = "user_cv";
