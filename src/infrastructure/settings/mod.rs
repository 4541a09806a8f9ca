//! Settings store implementations

mod file;
mod in_memory;

pub use file::FileSettingsStore;
pub use in_memory::InMemorySettingsStore;
