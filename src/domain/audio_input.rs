use std::path::PathBuf;

/// Raw integer PCM already held in memory, interleaved by channel.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmInput {
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<i16>,
}

impl PcmInput {
    pub fn new(sample_rate: u32, channels: u16, samples: Vec<i16>) -> Self {
        Self {
            sample_rate,
            channels,
            samples,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AudioInput {
    Path(String),
    Pcm(PcmInput),
}

impl AudioInput {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }
}

impl From<PcmInput> for AudioInput {
    fn from(pcm: PcmInput) -> Self {
        Self::Pcm(pcm)
    }
}

impl From<PathBuf> for AudioInput {
    fn from(path: PathBuf) -> Self {
        Self::Path(path.to_string_lossy().into_owned())
    }
}

/// Strips whitespace and quote characters pasted around a path.
pub fn clean_input_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\''))
}
