use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("audio decoding failed for {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("transcoding {} timed out after {timeout_secs}s", .path.display())]
    TranscodeTimeout { path: PathBuf, timeout_secs: u64 },
    #[error("formant shifting {} timed out after {timeout_secs}s", .path.display())]
    FormantTimeout { path: PathBuf, timeout_secs: u64 },
    #[error("formant shifting failed for {}: {reason}", .path.display())]
    FormantFailed { path: PathBuf, reason: String },
    #[error("duration probe failed for {}: {reason}", .path.display())]
    DurationProbe { path: PathBuf, reason: String },
    #[error("audio encoding failed for {}: {reason}", .path.display())]
    Encode { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl AudioError {
    pub fn decode(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
