use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioEncoder, AudioError, AudioTranscoder};
use crate::domain::{AudioBuffer, OutputFormat};

use super::process::{ToolError, run_tool, stderr_excerpt};

/// Shells out to `ffmpeg` for container conversion in both directions.
pub struct FfmpegTranscoder {
    binary: PathBuf,
    timeout: Duration,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    async fn convert(&self, source: &Path, destination: &Path, extra: &[&str]) -> Result<(), AudioError> {
        let mut command = Command::new(&self.binary);
        command
            .args(["-nostdin", "-y", "-hide_banner", "-loglevel", "error", "-i"])
            .arg(source)
            .args(extra)
            .arg(destination);

        let output = run_tool(command, self.timeout)
            .await
            .map_err(|e| match e {
                ToolError::TimedOut => AudioError::TranscodeTimeout {
                    path: source.to_path_buf(),
                    timeout_secs: self.timeout.as_secs(),
                },
                ToolError::Spawn(e) => {
                    AudioError::decode(source, format!("failed to run {}: {}", self.binary.display(), e))
                }
            })?;

        if !output.status.success() {
            return Err(AudioError::decode(source, format!("ffmpeg: {}", stderr_excerpt(&output))));
        }

        Ok(())
    }
}

#[async_trait]
impl AudioTranscoder for FfmpegTranscoder {
    async fn transcode_to_wav(&self, source: &Path, destination: &Path) -> Result<(), AudioError> {
        self.convert(source, destination, &[]).await
    }
}

#[async_trait]
impl AudioEncoder for FfmpegTranscoder {
    async fn encode(
        &self,
        buffer: &AudioBuffer,
        destination: &Path,
        format: OutputFormat,
    ) -> Result<(), AudioError> {
        if format == OutputFormat::Wav {
            let buffer = buffer.clone();
            let target = destination.to_path_buf();
            return tokio::task::spawn_blocking(move || write_wav(&buffer, &target))
                .await
                .map_err(|e| encode_error(destination, format!("task join error: {}", e)))?;
        }

        let staging = tempfile::Builder::new()
            .prefix("harmonify-export-")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| encode_error(destination, format!("temp file: {}", e)))?;

        let staged_buffer = buffer.clone();
        let staged_path = staging.path().to_path_buf();
        tokio::task::spawn_blocking(move || write_wav(&staged_buffer, &staged_path))
            .await
            .map_err(|e| encode_error(destination, format!("task join error: {}", e)))??;

        self.convert(
            staging.path(),
            destination,
            &["-f", format.container(), "-c:a", format.codec()],
        )
        .await
        .map_err(|e| encode_error(destination, e.to_string()))?;

        tracing::debug!(
            path = %destination.display(),
            format = %format,
            "Encoded converted audio"
        );

        Ok(())
    }
}

/// Writes the buffer as a 32-bit float mono WAV file.
pub fn write_wav(buffer: &AudioBuffer, path: &Path) -> Result<(), AudioError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer =
        hound::WavWriter::create(path, spec).map_err(|e| encode_error(path, e.to_string()))?;
    for &sample in &buffer.samples {
        writer
            .write_sample(sample)
            .map_err(|e| encode_error(path, e.to_string()))?;
    }
    writer
        .finalize()
        .map_err(|e| encode_error(path, e.to_string()))
}

fn encode_error(path: &Path, reason: String) -> AudioError {
    AudioError::Encode {
        path: path.to_path_buf(),
        reason,
    }
}

/// Fails when the configured ffmpeg binary cannot be executed.
pub fn check_ffmpeg_binary(binary: &Path) -> Result<(), AudioError> {
    let output = std::process::Command::new(binary)
        .arg("-version")
        .output()
        .map_err(|e| AudioError::decode(binary, format!("ffmpeg not runnable: {}", e)))?;

    if !output.status.success() {
        return Err(AudioError::decode(
            binary,
            format!("ffmpeg -version exited with {}", output.status),
        ));
    }

    Ok(())
}
