use std::io;
use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Streams `filename` from the remote store into `destination`, returning bytes written.
    async fn fetch(&self, filename: &str, destination: &Path) -> Result<u64, AssetError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("unexpected status {status} for {filename}")]
    HttpStatus { status: u16, filename: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
