use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use harmonify::application::ports::{
    AudioError, AudioTranscoder, DurationProbe, FormantShiftOutcome, FormantShifter,
};
use harmonify::application::services::{AudioNormalizer, IN_MEMORY_SAMPLE_RATE};
use harmonify::domain::{AudioInput, FormantSettings, PcmInput};
use harmonify::infrastructure::audio::SymphoniaAudioDecoder;

/// Stands in for ffmpeg: copies the source (already a WAV) or writes garbage.
#[derive(Default)]
struct FakeTranscoder {
    write_garbage: bool,
    destinations: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl AudioTranscoder for FakeTranscoder {
    async fn transcode_to_wav(&self, source: &Path, destination: &Path) -> Result<(), AudioError> {
        self.destinations.lock().unwrap().push(destination.to_path_buf());
        if self.write_garbage {
            tokio::fs::write(destination, vec![0xFFu8; 256]).await?;
        } else {
            tokio::fs::copy(source, destination).await?;
        }
        Ok(())
    }
}

struct CopyingShifter {
    exit_code: i32,
}

#[async_trait]
impl FormantShifter for CopyingShifter {
    async fn shift(
        &self,
        source: &Path,
        destination: &Path,
        _quefrency: f64,
        _timbre: f64,
    ) -> Result<FormantShiftOutcome, AudioError> {
        tokio::fs::copy(source, destination).await?;
        Ok(FormantShiftOutcome {
            exit_code: Some(self.exit_code),
        })
    }
}

struct FixedDuration(f64);

#[async_trait]
impl DurationProbe for FixedDuration {
    async fn duration_secs(&self, _path: &Path) -> Result<f64, AudioError> {
        Ok(self.0)
    }
}

fn write_tone(path: &Path, sample_rate: u32, frames: usize) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let value = (t * 440.0 * 2.0 * std::f32::consts::PI).sin() * 0.5;
        writer.write_sample((value * i16::MAX as f32) as i16).unwrap();
    }
    writer.finalize().unwrap();
}

fn normalizer(
    transcoder: Arc<FakeTranscoder>,
    shifter_exit_code: i32,
    duration: f64,
    scratch: &Path,
) -> AudioNormalizer {
    AudioNormalizer::new(
        transcoder,
        Arc::new(CopyingShifter {
            exit_code: shifter_exit_code,
        }),
        Arc::new(SymphoniaAudioDecoder::new()),
        Arc::new(FixedDuration(duration)),
        scratch.to_path_buf(),
    )
}

fn scratch_entries(scratch: &Path) -> usize {
    match std::fs::read_dir(scratch) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

#[tokio::test]
async fn given_wav_input_when_normalizing_then_decodes_without_transcoding() {
    let dir = tempfile::tempdir().unwrap();
    let scratch = dir.path().join("scratch");
    let source = dir.path().join("voice.wav");
    write_tone(&source, 16_000, 16_000);
    let transcoder = Arc::new(FakeTranscoder::default());

    let buffer = normalizer(Arc::clone(&transcoder), 0, 1.0, &scratch)
        .normalize(
            &AudioInput::path(source.to_string_lossy()),
            16_000,
            &FormantSettings::disabled(),
        )
        .await
        .unwrap();

    assert_eq!(buffer.sample_rate, 16_000);
    assert_eq!(buffer.len(), 16_000);
    assert!(transcoder.destinations.lock().unwrap().is_empty());
    assert!(source.exists());
}

#[tokio::test]
async fn given_quoted_non_wav_path_when_normalizing_then_transcodes_and_cleans_scratch() {
    let dir = tempfile::tempdir().unwrap();
    let scratch = dir.path().join("scratch");
    let source = dir.path().join("voice.mp3");
    write_tone(&source, 22_050, 22_050);
    let transcoder = Arc::new(FakeTranscoder::default());

    let buffer = normalizer(Arc::clone(&transcoder), 0, 1.0, &scratch)
        .normalize(
            &AudioInput::path(format!(" \"{}\" ", source.display())),
            16_000,
            &FormantSettings::disabled(),
        )
        .await
        .unwrap();

    assert_eq!(buffer.len(), 16_000);
    let destinations = transcoder.destinations.lock().unwrap().clone();
    assert_eq!(destinations.len(), 1);
    assert!(destinations[0].starts_with(&scratch));
    assert_eq!(destinations[0].extension().unwrap(), "wav");
    assert_eq!(scratch_entries(&scratch), 0);
}

#[tokio::test]
async fn given_transcoder_writes_garbage_when_normalizing_then_decode_fails_and_scratch_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let scratch = dir.path().join("scratch");
    let source = dir.path().join("broken.ogg");
    std::fs::write(&source, b"not audio").unwrap();
    let transcoder = Arc::new(FakeTranscoder {
        write_garbage: true,
        ..FakeTranscoder::default()
    });

    let result = normalizer(transcoder, 0, 1.0, &scratch)
        .normalize(
            &AudioInput::path(source.to_string_lossy()),
            16_000,
            &FormantSettings::disabled(),
        )
        .await;

    assert!(matches!(result, Err(AudioError::Decode { .. })));
    assert_eq!(scratch_entries(&scratch), 0);
}

#[tokio::test]
async fn given_formant_enabled_when_shifter_exits_non_zero_then_continues_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let scratch = dir.path().join("scratch");
    let source = dir.path().join("voice.flac");
    write_tone(&source, 16_000, 8_000);

    let buffer = normalizer(Arc::new(FakeTranscoder::default()), 1, 1.0, &scratch)
        .normalize(
            &AudioInput::path(source.to_string_lossy()),
            16_000,
            &FormantSettings::enabled(1.0, 1.2),
        )
        .await
        .unwrap();

    assert_eq!(buffer.len(), 8_000);
    assert_eq!(scratch_entries(&scratch), 0);
}

#[tokio::test]
async fn given_strict_formant_exit_when_shifter_exits_non_zero_then_fails_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let scratch = dir.path().join("scratch");
    let source = dir.path().join("voice.wav");
    write_tone(&source, 16_000, 8_000);

    let result = normalizer(Arc::new(FakeTranscoder::default()), 2, 1.0, &scratch)
        .with_strict_formant_exit(true)
        .normalize(
            &AudioInput::path(source.to_string_lossy()),
            16_000,
            &FormantSettings::enabled(1.0, 1.2),
        )
        .await;

    assert!(matches!(result, Err(AudioError::FormantFailed { .. })));
    assert_eq!(scratch_entries(&scratch), 0);
    assert!(source.exists());
}

#[tokio::test]
async fn given_missing_file_when_normalizing_then_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let scratch = dir.path().join("scratch");

    let result = normalizer(Arc::new(FakeTranscoder::default()), 0, 1.0, &scratch)
        .normalize(
            &AudioInput::path(dir.path().join("absent.wav").to_string_lossy()),
            16_000,
            &FormantSettings::disabled(),
        )
        .await;

    assert!(matches!(result, Err(AudioError::NotFound(_))));
}

#[tokio::test]
async fn given_stereo_pcm_at_44100_when_normalizing_then_returns_mono_16k_within_unit_range() {
    let dir = tempfile::tempdir().unwrap();
    let frames = 44_100;
    let samples: Vec<i16> = (0..frames)
        .flat_map(|i| {
            let left = if i % 2 == 0 { i16::MAX } else { i16::MIN };
            [left, i16::MIN]
        })
        .collect();

    let buffer = normalizer(Arc::new(FakeTranscoder::default()), 0, 1.0, dir.path())
        .normalize(
            &AudioInput::from(PcmInput::new(44_100, 2, samples)),
            48_000,
            &FormantSettings::disabled(),
        )
        .await
        .unwrap();

    assert_eq!(buffer.sample_rate, IN_MEMORY_SAMPLE_RATE);
    assert_eq!(buffer.len(), 16_000);
    assert!(buffer.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
}

#[tokio::test]
async fn given_concurrent_calls_on_same_source_when_transcoding_then_scratch_names_differ() {
    let dir = tempfile::tempdir().unwrap();
    let scratch = dir.path().join("scratch");
    let source = dir.path().join("shared.m4a");
    write_tone(&source, 16_000, 4_000);
    let transcoder = Arc::new(FakeTranscoder::default());
    let normalizer = normalizer(Arc::clone(&transcoder), 0, 1.0, &scratch);
    let input = AudioInput::path(source.to_string_lossy());
    let formant = FormantSettings::disabled();

    let (first, second) = tokio::join!(
        normalizer.normalize(&input, 16_000, &formant),
        normalizer.normalize(&input, 16_000, &formant)
    );

    assert!(first.is_ok());
    assert!(second.is_ok());
    let destinations = transcoder.destinations.lock().unwrap().clone();
    assert_eq!(destinations.len(), 2);
    assert_ne!(destinations[0], destinations[1]);
    assert_eq!(scratch_entries(&scratch), 0);
}

#[tokio::test]
async fn given_short_clip_when_validating_duration_then_returns_false() {
    let dir = tempfile::tempdir().unwrap();

    let valid = normalizer(Arc::new(FakeTranscoder::default()), 0, 0.5, dir.path())
        .validate_duration("clip.wav")
        .await
        .unwrap();

    assert!(!valid);
}

#[tokio::test]
async fn given_two_second_clip_when_validating_duration_then_returns_true() {
    let dir = tempfile::tempdir().unwrap();

    let valid = normalizer(Arc::new(FakeTranscoder::default()), 0, 2.0, dir.path())
        .validate_duration("clip.wav")
        .await
        .unwrap();

    assert!(valid);
}
