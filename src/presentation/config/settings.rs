use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::domain::{DeviceRequest, Precision};

pub const DEFAULT_ASSET_BASE_URL: &str =
    "https://huggingface.co/datasets/xontoloyoo/mymodel/resolve/main/";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub device: DeviceSettings,
    pub models: ModelSettings,
    pub audio: AudioSettings,
    pub formant_store: FormantStoreSettings,
    pub inference: InferenceSettings,
    pub assets: AssetSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceSettings {
    /// `cpu`, `cuda`, `cuda:N` or `gpu:N`.
    pub device: String,
    pub precision: Precision,
    /// 0 means "use every logical core".
    pub cpu_threads: usize,
    pub nvidia_smi_bin: PathBuf,
}

impl DeviceSettings {
    pub fn request(&self) -> Result<DeviceRequest, String> {
        self.device.parse()
    }

    pub fn cpu_threads(&self) -> Option<usize> {
        (self.cpu_threads > 0).then_some(self.cpu_threads)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub root_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub target_sample_rate: u32,
    pub scratch_dir: PathBuf,
    pub ffmpeg_bin: PathBuf,
    pub ffprobe_bin: PathBuf,
    pub formant_shifter_bin: PathBuf,
    pub transcode_timeout_secs: u64,
    pub formant_timeout_secs: u64,
    pub strict_formant_exit: bool,
    pub duration_probe: DurationProbeBackend,
}

impl AudioSettings {
    pub fn transcode_timeout(&self) -> Duration {
        Duration::from_secs(self.transcode_timeout_secs)
    }

    pub fn formant_timeout(&self) -> Duration {
        Duration::from_secs(self.formant_timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationProbeBackend {
    Ffprobe,
    Symphonia,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormantStoreSettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceSettings {
    pub provider: InferenceProvider,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceProvider {
    Http,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetSettings {
    pub base_url: String,
    pub root_dir: PathBuf,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{env}` when present, then `APP_*` variables
    /// (`APP_AUDIO__SCRATCH_DIR=/tmp/x`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let scratch_dir = std::env::temp_dir().join("harmonify");

        Config::builder()
            .set_default("device.device", "cuda:0")?
            .set_default("device.precision", "half")?
            .set_default("device.cpu_threads", 0)?
            .set_default("device.nvidia_smi_bin", "nvidia-smi")?
            .set_default("models.root_dir", "models")?
            .set_default("audio.target_sample_rate", 16_000)?
            .set_default("audio.scratch_dir", scratch_dir.to_string_lossy().into_owned())?
            .set_default("audio.ffmpeg_bin", "ffmpeg")?
            .set_default("audio.ffprobe_bin", "ffprobe")?
            .set_default(
                "audio.formant_shifter_bin",
                crate::infrastructure::audio::DEFAULT_STFT_BINARY,
            )?
            .set_default("audio.transcode_timeout_secs", 120)?
            .set_default("audio.formant_timeout_secs", 300)?
            .set_default("audio.strict_formant_exit", false)?
            .set_default("audio.duration_probe", "ffprobe")?
            .set_default("formant_store.path", "config/formant.json")?
            .set_default("inference.provider", "http")?
            .set_default("inference.base_url", "http://127.0.0.1:7865")?
            .set_default("inference.timeout_secs", 600)?
            .set_default("assets.base_url", DEFAULT_ASSET_BASE_URL)?
            .set_default("assets.root_dir", ".")?
            .set_default("assets.timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str().to_lowercase()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
