use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{AudioError, DurationProbe};

use super::symphonia_decoder::open_format;

/// Computes duration from the frame count in the container header.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaDurationProbe;

impl SymphoniaDurationProbe {
    pub fn new() -> Self {
        Self
    }

    fn probe(path: &Path) -> Result<f64, String> {
        let format = open_format(path).map_err(|e| e.to_string())?;
        let track = format
            .default_track()
            .ok_or_else(|| "no audio track found".to_string())?;

        let params = &track.codec_params;
        let frames = params
            .n_frames
            .ok_or_else(|| "stream has no frame count".to_string())?;
        let sample_rate = params
            .sample_rate
            .filter(|rate| *rate > 0)
            .ok_or_else(|| "unknown sample rate".to_string())?;

        Ok(frames as f64 / sample_rate as f64)
    }
}

#[async_trait]
impl DurationProbe for SymphoniaDurationProbe {
    async fn duration_secs(&self, path: &Path) -> Result<f64, AudioError> {
        let owned = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::probe(&owned))
            .await
            .map_err(|e| format!("task join error: {}", e))
            .and_then(|r| r)
            .map_err(|reason| AudioError::DurationProbe {
                path: path.to_path_buf(),
                reason,
            })
    }
}
