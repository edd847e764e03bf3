mod duration_probe_factory;
mod ffmpeg_transcoder;
mod ffprobe_duration_probe;
mod process;
pub mod resampler;
mod stft_formant_shifter;
mod symphonia_decoder;
mod symphonia_duration_probe;

pub use duration_probe_factory::DurationProbeFactory;
pub use ffmpeg_transcoder::{FfmpegTranscoder, check_ffmpeg_binary, write_wav};
pub use ffprobe_duration_probe::FfprobeDurationProbe;
pub use stft_formant_shifter::{DEFAULT_STFT_BINARY, StftFormantShifter};
pub use symphonia_decoder::SymphoniaAudioDecoder;
pub use symphonia_duration_probe::SymphoniaDurationProbe;
