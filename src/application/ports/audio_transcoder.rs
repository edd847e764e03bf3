use std::path::Path;

use async_trait::async_trait;

use super::AudioError;

/// Rewrites an arbitrary container/codec into an uncompressed WAV copy.
#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    async fn transcode_to_wav(&self, source: &Path, destination: &Path)
    -> Result<(), AudioError>;
}
