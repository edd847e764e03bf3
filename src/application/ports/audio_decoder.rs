use std::path::Path;

use super::AudioError;
use crate::domain::{AudioBuffer, PcmInput};

/// Blocking decoder producing canonical mono f32 buffers.
pub trait AudioDecoder: Send + Sync {
    fn decode_file(&self, path: &Path, target_sample_rate: u32) -> Result<AudioBuffer, AudioError>;

    fn decode_pcm(&self, pcm: &PcmInput, target_sample_rate: u32)
    -> Result<AudioBuffer, AudioError>;
}
