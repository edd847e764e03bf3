use harmonify::domain::{AssetTarget, MixParams, OutputFormat, PitchMethod, PitchParams};

#[test]
fn given_default_params_when_validating_then_accepted() {
    assert!(PitchParams::default().validate().is_ok());
    assert!(MixParams::default().validate().is_ok());
}

#[test]
fn given_zero_hop_length_when_validating_then_rejected() {
    let params = PitchParams {
        hop_length: 0,
        ..PitchParams::default()
    };

    assert!(params.validate().is_err());
}

#[test]
fn given_inverted_pitch_bounds_when_validating_then_rejected() {
    let params = PitchParams {
        min_pitch_hz: 900.0,
        max_pitch_hz: 100.0,
        ..PitchParams::default()
    };

    assert!(params.validate().is_err());
}

#[test]
fn given_out_of_range_mix_rates_when_validating_then_rejected() {
    let index = MixParams {
        index_rate: 1.5,
        ..MixParams::default()
    };
    let protect = MixParams {
        protect: 0.6,
        ..MixParams::default()
    };

    assert!(index.validate().unwrap_err().contains("index_rate"));
    assert!(protect.validate().unwrap_err().contains("protect"));
}

#[test]
fn given_every_pitch_method_when_rendered_and_parsed_then_names_are_stable() {
    let methods = [
        PitchMethod::Pm,
        PitchMethod::Harvest,
        PitchMethod::Crepe,
        PitchMethod::CrepeTiny,
        PitchMethod::MangioCrepe,
        PitchMethod::MangioCrepeTiny,
        PitchMethod::Rmvpe,
        PitchMethod::Fcpe,
    ];

    for method in methods {
        assert_eq!(method.as_str().parse::<PitchMethod>(), Ok(method));
    }
    assert_eq!(
        serde_json::to_string(&PitchMethod::MangioCrepeTiny).unwrap(),
        "\"mangio-crepe-tiny\""
    );
}

#[test]
fn given_crepe_family_when_checking_hop_usage_then_only_crepe_variants_use_it() {
    assert!(PitchMethod::MangioCrepe.uses_hop_length());
    assert!(PitchMethod::CrepeTiny.uses_hop_length());
    assert!(!PitchMethod::Rmvpe.uses_hop_length());
    assert!(!PitchMethod::Harvest.uses_hop_length());
}

#[test]
fn given_output_extensions_when_parsing_then_ffmpeg_mapping_is_used() {
    let m4a: OutputFormat = ".M4A".parse().unwrap();
    assert_eq!(m4a.container(), "mp4");
    assert_eq!(m4a.codec(), "aac");

    let ogg: OutputFormat = "ogg".parse().unwrap();
    assert_eq!(ogg.codec(), "libvorbis");

    let mp3: OutputFormat = "mp3".parse().unwrap();
    assert_eq!(mp3.codec(), "libmp3lame");

    assert!("opus".parse::<OutputFormat>().is_err());
}

#[test]
fn given_default_manifest_when_listing_then_crepe_weights_share_a_directory() {
    let manifest = AssetTarget::default_manifest();

    assert_eq!(manifest.len(), 5);
    let crepe: Vec<_> = manifest
        .iter()
        .filter(|t| t.destination.ends_with("torchcrepe/assets"))
        .map(|t| t.filename.as_str())
        .collect();
    assert_eq!(crepe, vec!["tiny.pth", "full.pth"]);
    assert_eq!(
        manifest[0].local_path(std::path::Path::new("/opt/app")),
        std::path::PathBuf::from("/opt/app/assets/hubert/hubert_base.pt")
    );
}
