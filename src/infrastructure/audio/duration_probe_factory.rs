use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::DurationProbe;
use crate::presentation::config::DurationProbeBackend;

use super::ffprobe_duration_probe::FfprobeDurationProbe;
use super::symphonia_duration_probe::SymphoniaDurationProbe;

pub struct DurationProbeFactory;

impl DurationProbeFactory {
    pub fn create(
        backend: DurationProbeBackend,
        ffprobe_binary: PathBuf,
        timeout: Duration,
    ) -> Arc<dyn DurationProbe> {
        match backend {
            DurationProbeBackend::Ffprobe => {
                tracing::debug!(binary = %ffprobe_binary.display(), "Using ffprobe duration probe");
                Arc::new(FfprobeDurationProbe::new(ffprobe_binary, timeout))
            }
            DurationProbeBackend::Symphonia => {
                tracing::debug!("Using in-process symphonia duration probe");
                Arc::new(SymphoniaDurationProbe::new())
            }
        }
    }
}
