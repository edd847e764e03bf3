use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioError, FormantShiftOutcome, FormantShifter};

use super::process::{ToolError, run_tool, stderr_excerpt};

#[cfg(windows)]
pub const DEFAULT_STFT_BINARY: &str = "stftpitchshift.exe";
#[cfg(not(windows))]
pub const DEFAULT_STFT_BINARY: &str = "stftpitchshift";

/// Cepstral formant shifting through the `stftpitchshift` command line tool.
pub struct StftFormantShifter {
    binary: PathBuf,
    timeout: Duration,
}

impl StftFormantShifter {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }
}

#[async_trait]
impl FormantShifter for StftFormantShifter {
    async fn shift(
        &self,
        source: &Path,
        destination: &Path,
        quefrency: f64,
        timbre: f64,
    ) -> Result<FormantShiftOutcome, AudioError> {
        let mut command = Command::new(&self.binary);
        command
            .arg("-i")
            .arg(source)
            .arg("-q")
            .arg(quefrency.to_string())
            .arg("-t")
            .arg(timbre.to_string())
            .arg("-o")
            .arg(destination);

        let output = run_tool(command, self.timeout)
            .await
            .map_err(|e| match e {
                ToolError::TimedOut => AudioError::FormantTimeout {
                    path: source.to_path_buf(),
                    timeout_secs: self.timeout.as_secs(),
                },
                ToolError::Spawn(e) => AudioError::FormantFailed {
                    path: source.to_path_buf(),
                    reason: format!("failed to run {}: {}", self.binary.display(), e),
                },
            })?;

        if !output.status.success() {
            tracing::debug!(
                status = %output.status,
                stderr = %stderr_excerpt(&output),
                "stftpitchshift reported failure"
            );
        }

        Ok(FormantShiftOutcome {
            exit_code: output.status.code(),
        })
    }
}
