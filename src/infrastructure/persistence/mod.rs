mod json_settings_store;
mod memory_settings_store;

pub use json_settings_store::JsonFileSettingsStore;
pub use memory_settings_store::InMemorySettingsStore;
