use std::path::Path;

use async_trait::async_trait;

use super::AudioError;
use crate::domain::{AudioBuffer, OutputFormat};

#[async_trait]
pub trait AudioEncoder: Send + Sync {
    async fn encode(
        &self,
        buffer: &AudioBuffer,
        destination: &Path,
        format: OutputFormat,
    ) -> Result<(), AudioError>;
}
