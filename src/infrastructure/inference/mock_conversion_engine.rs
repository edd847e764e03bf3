use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{
    ConversionEngineError, InferenceParams, ModelHandle, PitchCurve, VoiceConversionEngine,
};
use crate::domain::{AudioBuffer, PitchMethod};

/// Echoes the normalized waveform back; used in scaffold mode and tests.
pub struct MockConversionEngine;

#[async_trait]
impl VoiceConversionEngine for MockConversionEngine {
    async fn load_model(&self, weights_path: &Path) -> Result<ModelHandle, ConversionEngineError> {
        Ok(ModelHandle(weights_path.to_string_lossy().into_owned()))
    }

    async fn estimate_pitch(
        &self,
        waveform: &AudioBuffer,
        _method: PitchMethod,
        hop_length: u32,
    ) -> Result<PitchCurve, ConversionEngineError> {
        let frames = waveform.len() / hop_length.max(1) as usize + 1;
        Ok(PitchCurve(vec![0.0; frames]))
    }

    async fn run_conversion(
        &self,
        _model: &ModelHandle,
        waveform: &AudioBuffer,
        _pitch: &PitchCurve,
        _index_path: Option<&Path>,
        _params: &InferenceParams,
    ) -> Result<AudioBuffer, ConversionEngineError> {
        Ok(waveform.clone())
    }
}
