use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ConversionEngineError, VoiceConversionEngine};
use crate::presentation::config::InferenceProvider;

use super::http_conversion_engine::HttpConversionEngine;
use super::mock_conversion_engine::MockConversionEngine;

pub struct ConversionEngineFactory;

impl ConversionEngineFactory {
    pub fn create(
        provider: InferenceProvider,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Arc<dyn VoiceConversionEngine>, ConversionEngineError> {
        match provider {
            InferenceProvider::Http => {
                tracing::info!(base_url, "Using HTTP inference server");
                Ok(Arc::new(HttpConversionEngine::new(base_url, timeout)?))
            }
            InferenceProvider::Mock => {
                tracing::warn!("Using mock inference engine, output equals normalized input");
                Ok(Arc::new(MockConversionEngine))
            }
        }
    }
}
