use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{
    AudioDecoder, AudioError, AudioTranscoder, DurationProbe, FormantShifter,
};
use crate::domain::{AudioBuffer, AudioInput, FormantSettings, PcmInput, clean_input_path};

/// Clips shorter than this are flagged as too short for conversion.
pub const MIN_DURATION_SECS: f64 = 0.76;

/// In-memory PCM is always brought to this rate, whatever the caller asks for.
pub const IN_MEMORY_SAMPLE_RATE: u32 = 16_000;

const CANONICAL_EXTENSION: &str = "wav";
const FORMANT_MARKER: &str = "_formanted";

pub struct AudioNormalizer {
    transcoder: Arc<dyn AudioTranscoder>,
    formant_shifter: Arc<dyn FormantShifter>,
    decoder: Arc<dyn AudioDecoder>,
    duration_probe: Arc<dyn DurationProbe>,
    scratch_dir: PathBuf,
    strict_formant_exit: bool,
}

impl AudioNormalizer {
    pub fn new(
        transcoder: Arc<dyn AudioTranscoder>,
        formant_shifter: Arc<dyn FormantShifter>,
        decoder: Arc<dyn AudioDecoder>,
        duration_probe: Arc<dyn DurationProbe>,
        scratch_dir: PathBuf,
    ) -> Self {
        Self {
            transcoder,
            formant_shifter,
            decoder,
            duration_probe,
            scratch_dir,
            strict_formant_exit: false,
        }
    }

    /// Fail the call when the formant shifter exits non-zero instead of
    /// continuing with whatever it wrote.
    pub fn with_strict_formant_exit(mut self, strict: bool) -> Self {
        self.strict_formant_exit = strict;
        self
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Produces a mono f32 buffer from a file or in-memory PCM.
    ///
    /// Files go through transcode (non-WAV only), formant shift (when enabled)
    /// and decode. Every intermediate file is removed before returning, on
    /// success and on failure.
    #[tracing::instrument(skip(self, input, formant), fields(formant = formant.enabled))]
    pub async fn normalize(
        &self,
        input: &AudioInput,
        target_sample_rate: u32,
        formant: &FormantSettings,
    ) -> Result<AudioBuffer, AudioError> {
        match input {
            AudioInput::Pcm(pcm) => self.normalize_pcm(pcm).await,
            AudioInput::Path(raw) => self.normalize_file(raw, target_sample_rate, formant).await,
        }
    }

    /// Returns `false` for clips under [`MIN_DURATION_SECS`]; probe failures are errors.
    pub async fn validate_duration(&self, raw_path: &str) -> Result<bool, AudioError> {
        let path = clean_input_path(raw_path);
        let duration = self.duration_probe.duration_secs(&path).await?;

        if duration < MIN_DURATION_SECS {
            tracing::warn!(
                path = %path.display(),
                duration_secs = duration,
                "Audio is too short, target at least 1-2s for best results"
            );
            return Ok(false);
        }

        Ok(true)
    }

    async fn normalize_pcm(&self, pcm: &PcmInput) -> Result<AudioBuffer, AudioError> {
        let decoder = Arc::clone(&self.decoder);
        let pcm = pcm.clone();

        tokio::task::spawn_blocking(move || decoder.decode_pcm(&pcm, IN_MEMORY_SAMPLE_RATE))
            .await
            .map_err(|e| AudioError::decode("<memory>", format!("task join error: {}", e)))?
    }

    async fn normalize_file(
        &self,
        raw_path: &str,
        target_sample_rate: u32,
        formant: &FormantSettings,
    ) -> Result<AudioBuffer, AudioError> {
        let source = clean_input_path(raw_path);
        if !source.is_file() {
            return Err(AudioError::NotFound(source));
        }

        let mut scratch = ScratchFiles::default();
        let result = self
            .run_stages(&source, target_sample_rate, formant, &mut scratch)
            .await;
        scratch.cleanup();

        result
    }

    async fn run_stages(
        &self,
        source: &Path,
        target_sample_rate: u32,
        formant: &FormantSettings,
        scratch: &mut ScratchFiles,
    ) -> Result<AudioBuffer, AudioError> {
        let stem = format!("{}-{}", file_stem(source), Uuid::new_v4().simple());
        let mut current = source.to_path_buf();

        if !is_canonical_container(&current) {
            tokio::fs::create_dir_all(&self.scratch_dir).await?;
            let transcoded = self
                .scratch_dir
                .join(format!("{}.{}", stem, CANONICAL_EXTENSION));
            scratch.track(transcoded.clone());

            self.transcoder
                .transcode_to_wav(&current, &transcoded)
                .await?;
            tracing::debug!(
                source = %current.display(),
                output = %transcoded.display(),
                "Transcoded source to wav"
            );
            current = transcoded;
        }

        if formant.enabled {
            tokio::fs::create_dir_all(&self.scratch_dir).await?;
            let shifted = self.scratch_dir.join(format!(
                "{}{}.{}",
                stem, FORMANT_MARKER, CANONICAL_EXTENSION
            ));
            scratch.track(shifted.clone());

            tracing::info!(
                quefrency = formant.quefrency,
                timbre = formant.timbre,
                "Starting formant shift"
            );
            let outcome = self
                .formant_shifter
                .shift(&current, &shifted, formant.quefrency, formant.timbre)
                .await?;

            if !outcome.success() {
                if self.strict_formant_exit {
                    return Err(AudioError::FormantFailed {
                        path: current,
                        reason: format!("exit code {:?}", outcome.exit_code),
                    });
                }
                tracing::warn!(
                    exit_code = ?outcome.exit_code,
                    "Formant shifter exited unsuccessfully, continuing with its output"
                );
            }
            current = shifted;
        }

        let decoder = Arc::clone(&self.decoder);
        let decode_path = current.clone();
        let buffer = tokio::task::spawn_blocking(move || {
            decoder.decode_file(&decode_path, target_sample_rate)
        })
        .await
        .map_err(|e| AudioError::decode(&current, format!("task join error: {}", e)))??;

        tracing::debug!(
            samples = buffer.len(),
            sample_rate = buffer.sample_rate,
            duration_secs = buffer.duration_secs(),
            "Audio normalized to mono f32"
        );

        Ok(buffer)
    }
}

fn is_canonical_container(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CANONICAL_EXTENSION))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string())
}

/// Intermediate files owned by one normalization call.
#[derive(Default)]
struct ScratchFiles {
    paths: Vec<PathBuf>,
}

impl ScratchFiles {
    fn track(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    fn cleanup(&mut self) {
        for path in self.paths.drain(..) {
            match std::fs::remove_file(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "Removed intermediate audio file"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "Failed to remove intermediate audio file"
                ),
            }
        }
    }
}

impl Drop for ScratchFiles {
    fn drop(&mut self) {
        self.cleanup();
    }
}
