use std::sync::Arc;

use crate::application::AppContext;
use crate::application::ports::{
    AudioError, ConversionEngineError, FormantSettingsStore, SettingsStoreError,
    VoiceConversionEngine,
};
use crate::domain::{AudioBuffer, AudioInput, FormantSettings, MixParams, PitchParams};

use super::audio_normalizer::AudioNormalizer;
use super::model_resolver::{ModelResolveError, ModelResolver};

/// Runs one conversion end to end: resolve, persist settings, normalize, infer.
pub struct ConversionOrchestrator {
    context: Arc<AppContext>,
    resolver: ModelResolver,
    normalizer: Arc<AudioNormalizer>,
    settings_store: Arc<dyn FormantSettingsStore>,
    engine: Arc<dyn VoiceConversionEngine>,
    target_sample_rate: u32,
}

impl ConversionOrchestrator {
    pub fn new(
        context: Arc<AppContext>,
        resolver: ModelResolver,
        normalizer: Arc<AudioNormalizer>,
        settings_store: Arc<dyn FormantSettingsStore>,
        engine: Arc<dyn VoiceConversionEngine>,
        target_sample_rate: u32,
    ) -> Self {
        Self {
            context,
            resolver,
            normalizer,
            settings_store,
            engine,
            target_sample_rate,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    #[tracing::instrument(
        skip(self, audio, pitch, mix, formant),
        fields(
            method = %pitch.method,
            shift = pitch.shift_semitones,
            formant = formant.enabled,
        )
    )]
    pub async fn convert(
        &self,
        model_name: &str,
        audio: &AudioInput,
        pitch: &PitchParams,
        mix: &MixParams,
        formant: &FormantSettings,
    ) -> Result<AudioBuffer, ConversionError> {
        pitch.validate().map_err(ConversionError::InvalidParams)?;
        mix.validate().map_err(ConversionError::InvalidParams)?;

        let bundle = self.resolver.resolve(model_name)?;
        let weights = bundle
            .weights()
            .ok_or_else(|| ConversionError::MissingWeights(model_name.to_string()))?;

        self.settings_store.save(&formant.snapshot()).await?;

        let waveform = self
            .normalizer
            .normalize(audio, self.target_sample_rate, formant)
            .await?;

        let model = self.engine.load_model(weights).await?;
        let pitch_curve = self
            .engine
            .estimate_pitch(&waveform, pitch.method, pitch.hop_length)
            .await?;

        let params = self.context.inference_params(pitch, mix);
        let converted = self
            .engine
            .run_conversion(&model, &waveform, &pitch_curve, bundle.index(), &params)
            .await?;

        tracing::info!(
            samples = converted.len(),
            sample_rate = converted.sample_rate,
            indexed = bundle.index().is_some(),
            "Conversion completed"
        );

        Ok(converted)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("validate: {0}")]
    InvalidParams(String),
    #[error("resolve: {0}")]
    Resolve(#[from] ModelResolveError),
    #[error("resolve: no weights file found for model {0}")]
    MissingWeights(String),
    #[error("persist: {0}")]
    Persist(#[from] SettingsStoreError),
    #[error("normalize: {0}")]
    Normalize(#[from] AudioError),
    #[error("infer: {0}")]
    Infer(#[from] ConversionEngineError),
}

impl ConversionError {
    pub fn stage(&self) -> &'static str {
        match self {
            ConversionError::InvalidParams(_) => "validate",
            ConversionError::Resolve(_) | ConversionError::MissingWeights(_) => "resolve",
            ConversionError::Persist(_) => "persist",
            ConversionError::Normalize(_) => "normalize",
            ConversionError::Infer(_) => "infer",
        }
    }
}
