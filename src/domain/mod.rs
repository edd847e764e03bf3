mod asset_target;
mod audio_buffer;
mod audio_input;
mod conversion_params;
mod device_kind;
mod device_profile;
mod device_request;
mod formant_settings;
mod model_bundle;
mod output_format;
mod pitch_method;
mod precision;
mod window_config;

pub use asset_target::AssetTarget;
pub use audio_buffer::AudioBuffer;
pub use audio_input::{AudioInput, PcmInput, clean_input_path};
pub use conversion_params::{MixParams, PitchParams};
pub use device_kind::DeviceKind;
pub use device_profile::{DeviceProfile, is_low_precision_unfriendly, memory_gb_from_bytes};
pub use device_request::DeviceRequest;
pub use formant_settings::FormantSettings;
pub use model_bundle::ModelBundle;
pub use output_format::OutputFormat;
pub use pitch_method::PitchMethod;
pub use precision::Precision;
pub use window_config::InferenceWindowConfig;
