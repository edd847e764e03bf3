use crate::application::ports::InferenceParams;
use crate::domain::{DeviceProfile, InferenceWindowConfig, MixParams, PitchParams, Precision};

/// Hardware-derived configuration, computed once at start and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct AppContext {
    pub device: DeviceProfile,
    pub precision: Precision,
    pub window: InferenceWindowConfig,
    pub cpu_threads: usize,
}

impl AppContext {
    pub fn inference_params(&self, pitch: &PitchParams, mix: &MixParams) -> InferenceParams {
        InferenceParams {
            device: self.device.kind,
            precision: self.precision,
            cpu_threads: self.cpu_threads,
            window: self.window,
            pitch: *pitch,
            mix: *mix,
        }
    }
}
