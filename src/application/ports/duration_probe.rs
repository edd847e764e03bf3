use std::path::Path;

use async_trait::async_trait;

use super::AudioError;

#[async_trait]
pub trait DurationProbe: Send + Sync {
    /// Duration in seconds of the first audio stream.
    async fn duration_secs(&self, path: &Path) -> Result<f64, AudioError>;
}
