use std::path::Path;

use async_trait::async_trait;

use crate::domain::{
    AudioBuffer, DeviceKind, InferenceWindowConfig, MixParams, PitchMethod, PitchParams,
    Precision,
};

/// Opaque reference to a model loaded by the inference collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHandle(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct PitchCurve(pub Vec<f32>);

/// Everything the collaborator needs besides the waveform and pitch curve.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceParams {
    pub device: DeviceKind,
    pub precision: Precision,
    pub cpu_threads: usize,
    pub window: InferenceWindowConfig,
    pub pitch: PitchParams,
    pub mix: MixParams,
}

#[async_trait]
pub trait VoiceConversionEngine: Send + Sync {
    async fn load_model(&self, weights_path: &Path) -> Result<ModelHandle, ConversionEngineError>;

    async fn estimate_pitch(
        &self,
        waveform: &AudioBuffer,
        method: PitchMethod,
        hop_length: u32,
    ) -> Result<PitchCurve, ConversionEngineError>;

    async fn run_conversion(
        &self,
        model: &ModelHandle,
        waveform: &AudioBuffer,
        pitch: &PitchCurve,
        index_path: Option<&Path>,
        params: &InferenceParams,
    ) -> Result<AudioBuffer, ConversionEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionEngineError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("pitch estimation failed: {0}")]
    PitchEstimationFailed(String),
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
