mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AssetSettings, AudioSettings, DEFAULT_ASSET_BASE_URL, DeviceSettings, DurationProbeBackend,
    FormantStoreSettings, InferenceProvider, InferenceSettings, LoggingSettings, ModelSettings,
    Settings,
};
