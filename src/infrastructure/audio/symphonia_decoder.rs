use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, AudioError};
use crate::domain::{AudioBuffer, PcmInput};

use super::resampler::resample;

const PCM_I16_SCALE: f32 = 32768.0;

/// In-process decoder: symphonia for containers, rubato for rate conversion.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaAudioDecoder;

impl SymphoniaAudioDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl AudioDecoder for SymphoniaAudioDecoder {
    fn decode_file(&self, path: &Path, target_sample_rate: u32) -> Result<AudioBuffer, AudioError> {
        let (source_rate, mono) = decode_to_mono(path)?;

        let samples = resample(&mono, source_rate, target_sample_rate)
            .map_err(|reason| AudioError::decode(path, reason))?;

        tracing::debug!(
            path = %path.display(),
            source_rate,
            target_sample_rate,
            samples = samples.len(),
            "Audio decoded to mono f32 PCM"
        );

        Ok(AudioBuffer::new(target_sample_rate, samples))
    }

    fn decode_pcm(
        &self,
        pcm: &PcmInput,
        target_sample_rate: u32,
    ) -> Result<AudioBuffer, AudioError> {
        let channels = usize::from(pcm.channels.max(1));

        let mono: Vec<f32> = pcm
            .samples
            .chunks(channels)
            .map(|frame| {
                frame.iter().map(|&s| s as f32 / PCM_I16_SCALE).sum::<f32>() / frame.len() as f32
            })
            .collect();

        let samples = resample(&mono, pcm.sample_rate, target_sample_rate)
            .map_err(|reason| AudioError::decode("<memory>", reason))?
            .into_iter()
            .map(|s| s.clamp(-1.0, 1.0))
            .collect();

        Ok(AudioBuffer::new(target_sample_rate, samples))
    }
}

pub(super) fn open_format(path: &Path) -> Result<Box<dyn FormatReader>, AudioError> {
    let file = File::open(path).map_err(|e| AudioError::decode(path, format!("open: {}", e)))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioError::decode(path, format!("probe: {}", e)))?;

    Ok(probed.format)
}

fn decode_to_mono(path: &Path) -> Result<(u32, Vec<f32>), AudioError> {
    let mut format = open_format(path)?;

    let track = format
        .default_track()
        .ok_or_else(|| AudioError::decode(path, "no audio track found"))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let source_rate = codec_params
        .sample_rate
        .ok_or_else(|| AudioError::decode(path, "unknown sample rate"))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| AudioError::decode(path, format!("codec: {}", e)))?;

    let mut mono: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(AudioError::decode(path, format!("packet: {}", e))),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(error = %e, path = %path.display(), "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => return Err(AudioError::decode(path, format!("decode: {}", e))),
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }

        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        let samples = sample_buf.samples();

        let channels = spec.channels.count().max(1);
        if channels > 1 {
            for frame in samples.chunks(channels) {
                mono.push(frame.iter().sum::<f32>() / channels as f32);
            }
        } else {
            mono.extend_from_slice(samples);
        }
    }

    if mono.is_empty() {
        return Err(AudioError::decode(path, "no audio samples decoded"));
    }

    Ok((source_rate, mono))
}
