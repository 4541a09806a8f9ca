//! Application service routing assistant operations

mod service;

pub use service::AssistantService;
