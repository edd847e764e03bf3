use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::application::ports::{
    ConversionEngineError, InferenceParams, ModelHandle, PitchCurve, VoiceConversionEngine,
};
use crate::domain::{AudioBuffer, PitchMethod};

#[derive(Debug, Deserialize)]
struct LoadModelResponse {
    handle: String,
}

#[derive(Debug, Deserialize)]
struct PitchResponse {
    f0: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    sample_rate: u32,
    samples: Vec<f32>,
}

/// Client for an inference server exposing the voice-conversion model over JSON.
pub struct HttpConversionEngine {
    client: reqwest::Client,
    base_url: String,
}

impl HttpConversionEngine {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ConversionEngineError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConversionEngineError::ApiRequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &Value,
    ) -> Result<T, ConversionEngineError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ConversionEngineError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ConversionEngineError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ConversionEngineError::ApiRequestFailed(format!("body: {}", e)))
    }
}

#[async_trait]
impl VoiceConversionEngine for HttpConversionEngine {
    async fn load_model(&self, weights_path: &Path) -> Result<ModelHandle, ConversionEngineError> {
        let body = json!({ "weights_path": weights_path.to_string_lossy() });

        let response: LoadModelResponse = self
            .post("models/load", &body)
            .await
            .map_err(|e| ConversionEngineError::ModelLoadFailed(e.to_string()))?;

        tracing::debug!(handle = %response.handle, "Model loaded by inference server");
        Ok(ModelHandle(response.handle))
    }

    async fn estimate_pitch(
        &self,
        waveform: &AudioBuffer,
        method: PitchMethod,
        hop_length: u32,
    ) -> Result<PitchCurve, ConversionEngineError> {
        let body = json!({
            "sample_rate": waveform.sample_rate,
            "samples": waveform.samples,
            "method": method.as_str(),
            "hop_length": hop_length,
        });

        let response: PitchResponse = self
            .post("pitch", &body)
            .await
            .map_err(|e| ConversionEngineError::PitchEstimationFailed(e.to_string()))?;

        Ok(PitchCurve(response.f0))
    }

    async fn run_conversion(
        &self,
        model: &ModelHandle,
        waveform: &AudioBuffer,
        pitch: &PitchCurve,
        index_path: Option<&Path>,
        params: &InferenceParams,
    ) -> Result<AudioBuffer, ConversionEngineError> {
        let body = json!({
            "model": model.0,
            "sample_rate": waveform.sample_rate,
            "samples": waveform.samples,
            "f0": pitch.0,
            "index_path": index_path.map(|p| p.to_string_lossy().into_owned()).unwrap_or_default(),
            "device": params.device.as_str(),
            "is_half": params.precision.is_half(),
            "dtype": format!("{:?}", params.precision.dtype()),
            "n_cpu": params.cpu_threads,
            "x_pad": params.window.pad,
            "x_query": params.window.query,
            "x_center": params.window.center,
            "x_max": params.window.max,
            "pitch": params.pitch,
            "mix": params.mix,
        });

        let response: ConvertResponse = self
            .post("convert", &body)
            .await
            .map_err(|e| ConversionEngineError::ConversionFailed(e.to_string()))?;

        tracing::info!(
            samples = response.samples.len(),
            sample_rate = response.sample_rate,
            "Inference server returned converted audio"
        );

        Ok(AudioBuffer::new(response.sample_rate, response.samples))
    }
}
