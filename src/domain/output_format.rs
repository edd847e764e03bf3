use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Wav,
    Flac,
    Mp3,
    M4a,
    Ogg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Wav => "wav",
            OutputFormat::Flac => "flac",
            OutputFormat::Mp3 => "mp3",
            OutputFormat::M4a => "m4a",
            OutputFormat::Ogg => "ogg",
        }
    }

    /// Container name understood by ffmpeg's `-f`.
    pub fn container(&self) -> &'static str {
        match self {
            OutputFormat::M4a => "mp4",
            other => other.extension(),
        }
    }

    pub fn codec(&self) -> &'static str {
        match self {
            OutputFormat::Wav => "pcm_s16le",
            OutputFormat::Flac => "flac",
            OutputFormat::Mp3 => "libmp3lame",
            OutputFormat::M4a => "aac",
            OutputFormat::Ogg => "libvorbis",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "wav" => Ok(OutputFormat::Wav),
            "flac" => Ok(OutputFormat::Flac),
            "mp3" => Ok(OutputFormat::Mp3),
            "m4a" | "mp4" | "aac" => Ok(OutputFormat::M4a),
            "ogg" => Ok(OutputFormat::Ogg),
            other => Err(format!("Unsupported output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
