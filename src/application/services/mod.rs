mod asset_installer;
mod audio_normalizer;
mod config_deriver;
mod conversion_orchestrator;
mod model_resolver;

pub use asset_installer::AssetInstaller;
pub use audio_normalizer::{AudioNormalizer, IN_MEMORY_SAMPLE_RATE, MIN_DURATION_SECS};
pub use config_deriver::{ConfigDeriver, InvalidDeviceError};
pub use conversion_orchestrator::{ConversionError, ConversionOrchestrator};
pub use model_resolver::{ModelResolveError, ModelResolver};
