mod app_config;

pub use app_config::{AppConfig, GeminiConfig, LogFormat, LoggingConfig};
