use std::path::Path;

use async_trait::async_trait;

use super::AudioError;

/// Exit state of the external shifter; a non-zero exit is reported, not raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormantShiftOutcome {
    pub exit_code: Option<i32>,
}

impl FormantShiftOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[async_trait]
pub trait FormantShifter: Send + Sync {
    async fn shift(
        &self,
        source: &Path,
        destination: &Path,
        quefrency: f64,
        timbre: f64,
    ) -> Result<FormantShiftOutcome, AudioError>;
}
