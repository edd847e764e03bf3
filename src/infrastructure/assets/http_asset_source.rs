use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{AssetError, AssetSource};

/// Streams assets from `<base_url>/<filename>`. Downloads are not resumable.
pub struct HttpAssetSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssetSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AssetError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| AssetError::DownloadFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn fetch(&self, filename: &str, destination: &Path) -> Result<u64, AssetError> {
        let url = format!("{}/{}", self.base_url, filename);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AssetError::DownloadFailed(format!("request {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AssetError::HttpStatus {
                status: response.status().as_u16(),
                filename: filename.to_string(),
            });
        }

        let mut file = tokio::fs::File::create(destination).await?;
        let mut stream = response.bytes_stream();
        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes =
                chunk.map_err(|e| AssetError::DownloadFailed(format!("stream {}: {}", url, e)))?;
            file.write_all(&bytes).await?;
            total_bytes += bytes.len() as u64;
        }
        file.flush().await?;

        Ok(total_bytes)
    }
}
