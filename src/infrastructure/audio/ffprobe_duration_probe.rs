use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::application::ports::{AudioError, DurationProbe};

use super::process::{ToolError, run_tool, stderr_excerpt};

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    duration: Option<String>,
}

/// Reads stream duration from container metadata via `ffprobe`.
pub struct FfprobeDurationProbe {
    binary: PathBuf,
    timeout: Duration,
}

impl FfprobeDurationProbe {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }
}

#[async_trait]
impl DurationProbe for FfprobeDurationProbe {
    async fn duration_secs(&self, path: &Path) -> Result<f64, AudioError> {
        let probe_error = |reason: String| AudioError::DurationProbe {
            path: path.to_path_buf(),
            reason,
        };

        let mut command = Command::new(&self.binary);
        command
            .args(["-v", "error", "-show_streams", "-of", "json"])
            .arg(path);

        let output = run_tool(command, self.timeout).await.map_err(|e| match e {
            ToolError::TimedOut => probe_error(format!(
                "ffprobe timed out after {}s",
                self.timeout.as_secs()
            )),
            ToolError::Spawn(e) => probe_error(format!("failed to run ffprobe: {}", e)),
        })?;

        if !output.status.success() {
            return Err(probe_error(stderr_excerpt(&output)));
        }

        let parsed: ProbeOutput = serde_json::from_slice(&output.stdout)
            .map_err(|e| probe_error(format!("invalid ffprobe output: {}", e)))?;

        parse_stream_duration(&parsed).map_err(probe_error)
    }
}

fn parse_stream_duration(output: &ProbeOutput) -> Result<f64, String> {
    let raw = output
        .streams
        .first()
        .ok_or_else(|| "no streams reported".to_string())?
        .duration
        .as_deref()
        .ok_or_else(|| "stream has no duration".to_string())?;

    raw.trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid duration {:?}: {}", raw, e))
}
