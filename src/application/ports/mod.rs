mod accelerator_probe;
mod asset_source;
mod audio_decoder;
mod audio_encoder;
mod audio_error;
mod audio_transcoder;
mod conversion_engine;
mod duration_probe;
mod formant_shifter;
mod settings_store;

pub use accelerator_probe::{AcceleratorInfo, AcceleratorProbe};
pub use asset_source::{AssetError, AssetSource};
pub use audio_decoder::AudioDecoder;
pub use audio_encoder::AudioEncoder;
pub use audio_error::AudioError;
pub use audio_transcoder::AudioTranscoder;
pub use conversion_engine::{
    ConversionEngineError, InferenceParams, ModelHandle, PitchCurve, VoiceConversionEngine,
};
pub use duration_probe::DurationProbe;
pub use formant_shifter::{FormantShiftOutcome, FormantShifter};
pub use settings_store::{FormantSettingsStore, SettingsStoreError};
