use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use harmonify::application::AppContext;
use harmonify::application::ports::AudioEncoder;
use harmonify::application::services::{
    AssetInstaller, AudioNormalizer, ConfigDeriver, ConversionOrchestrator, ModelResolver,
};
use harmonify::domain::{
    AudioInput, FormantSettings, MixParams, OutputFormat, PitchMethod, PitchParams,
};
use harmonify::infrastructure::assets::HttpAssetSource;
use harmonify::infrastructure::audio::{
    DurationProbeFactory, FfmpegTranscoder, StftFormantShifter, SymphoniaAudioDecoder,
    check_ffmpeg_binary,
};
use harmonify::infrastructure::compute::NvidiaSmiProbe;
use harmonify::infrastructure::inference::ConversionEngineFactory;
use harmonify::infrastructure::observability::{TracingConfig, init_tracing};
use harmonify::infrastructure::persistence::JsonFileSettingsStore;
use harmonify::presentation::{Environment, Settings};

/// Voice-conversion front end: hardware probing, asset setup and conversion.
#[derive(Parser)]
#[command(name = "harmonify")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived device, precision and window configuration
    Probe,
    /// List model directories and the files picked for each
    Models,
    /// Download pretrained pitch and embedding assets
    FetchAssets,
    /// Convert one audio file with a named model
    Convert(ConvertArgs),
}

#[derive(clap::Args)]
struct ConvertArgs {
    model: String,
    input: String,
    output: PathBuf,
    /// Pitch shift in semitones
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pitch: i32,
    #[arg(long, default_value = "rmvpe")]
    method: PitchMethod,
    #[arg(long, default_value_t = 128)]
    hop_length: u32,
    #[arg(long)]
    autotune: bool,
    #[arg(long, default_value_t = 0.75)]
    index_rate: f32,
    #[arg(long, default_value_t = 3)]
    filter_radius: u32,
    #[arg(long, default_value_t = 0.25)]
    rms_mix_rate: f32,
    #[arg(long, default_value_t = 0.33)]
    protect: f32,
    /// Enables formant shifting together with --timbre
    #[arg(long, requires = "timbre")]
    quefrency: Option<f64>,
    #[arg(long, requires = "quefrency")]
    timbre: Option<f64>,
    /// Output format; inferred from the output extension when omitted
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = TracingConfig::new(environment.as_str(), settings.logging.enable_json)
        .with_filter(settings.logging.level.clone());
    init_tracing(&tracing_config);

    let cli = Cli::parse();

    match cli.command {
        Commands::Probe => {
            let context = derive_context(&settings)?;
            println!("{}", serde_json::to_string_pretty(&describe(&context))?);
        }
        Commands::Models => {
            let resolver = ModelResolver::new(&settings.models.root_dir);
            for (name, bundle) in resolver.list_models()? {
                println!(
                    "{}\t{}\t{}",
                    name,
                    bundle.weights_path.display(),
                    bundle.index_path.display()
                );
            }
        }
        Commands::FetchAssets => {
            let source = HttpAssetSource::new(
                settings.assets.base_url.clone(),
                Duration::from_secs(settings.assets.timeout_secs),
            )?;
            let installer = AssetInstaller::new(Arc::new(source), settings.assets.root_dir.clone());
            for path in installer.install_all().await? {
                println!("{}", path.display());
            }
        }
        Commands::Convert(args) => convert(&settings, args).await?,
    }

    Ok(())
}

fn derive_context(settings: &Settings) -> anyhow::Result<AppContext> {
    let request = settings
        .device
        .request()
        .map_err(anyhow::Error::msg)?;
    let probe = Arc::new(NvidiaSmiProbe::new(settings.device.nvidia_smi_bin.clone()));

    let context = ConfigDeriver::new(probe).derive(
        request,
        settings.device.precision,
        settings.device.cpu_threads(),
    )?;

    Ok(context)
}

fn describe(context: &AppContext) -> serde_json::Value {
    serde_json::json!({
        "device": context.device.kind.as_str(),
        "name": context.device.name,
        "memory_gb": context.device.memory_gb,
        "precision": context.precision.as_str(),
        "forced_single_precision": context.device.forced_single_precision,
        "cpu_threads": context.cpu_threads,
        "x_pad": context.window.pad,
        "x_query": context.window.query,
        "x_center": context.window.center,
        "x_max": context.window.max,
    })
}

async fn convert(settings: &Settings, args: ConvertArgs) -> anyhow::Result<()> {
    let audio = &settings.audio;
    check_ffmpeg_binary(&audio.ffmpeg_bin)?;

    let format = match args.format {
        Some(format) => format,
        None => args
            .output
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("wav")
            .parse::<OutputFormat>()
            .map_err(anyhow::Error::msg)?,
    };

    let context = Arc::new(derive_context(settings)?);

    let ffmpeg = Arc::new(FfmpegTranscoder::new(
        audio.ffmpeg_bin.clone(),
        audio.transcode_timeout(),
    ));
    let normalizer = Arc::new(
        AudioNormalizer::new(
            ffmpeg.clone(),
            Arc::new(StftFormantShifter::new(
                audio.formant_shifter_bin.clone(),
                audio.formant_timeout(),
            )),
            Arc::new(SymphoniaAudioDecoder::new()),
            DurationProbeFactory::create(
                audio.duration_probe,
                audio.ffprobe_bin.clone(),
                audio.transcode_timeout(),
            ),
            audio.scratch_dir.clone(),
        )
        .with_strict_formant_exit(audio.strict_formant_exit),
    );

    let engine = ConversionEngineFactory::create(
        settings.inference.provider,
        &settings.inference.base_url,
        Duration::from_secs(settings.inference.timeout_secs),
    )?;

    let orchestrator = ConversionOrchestrator::new(
        context,
        ModelResolver::new(&settings.models.root_dir),
        Arc::clone(&normalizer),
        Arc::new(JsonFileSettingsStore::new(&settings.formant_store.path)),
        engine,
        audio.target_sample_rate,
    );

    // Short clips still convert; the check only warns.
    if let Err(e) = normalizer.validate_duration(&args.input).await {
        tracing::warn!(error = %e, "Could not determine input duration");
    }

    let pitch = PitchParams {
        shift_semitones: args.pitch,
        method: args.method,
        hop_length: args.hop_length,
        autotune: args.autotune,
        ..PitchParams::default()
    };
    let mix = MixParams {
        index_rate: args.index_rate,
        filter_radius: args.filter_radius,
        rms_mix_rate: args.rms_mix_rate,
        protect: args.protect,
    };
    let formant = match (args.quefrency, args.timbre) {
        (Some(quefrency), Some(timbre)) => FormantSettings::enabled(quefrency, timbre),
        _ => FormantSettings::disabled(),
    };

    let converted = orchestrator
        .convert(&args.model, &AudioInput::path(args.input), &pitch, &mix, &formant)
        .await?;

    ffmpeg.encode(&converted, &args.output, format).await?;

    tracing::info!(
        output = %args.output.display(),
        format = %format,
        duration_secs = converted.duration_secs(),
        "Conversion written"
    );

    Ok(())
}
