use clap::{CommandFactory, FromArgMatches, Parser};
use ecotally::config::{Config, ScoringWeights};
use ecotally::error::EcoTallyError;
use std::fs;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse_cli(args: &[&str]) -> (TestCli, clap::ArgMatches) {
    let matches = TestCli::command()
        .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
        .expect("CLI parse failed");
    let cli = TestCli::from_arg_matches(&matches).expect("CLI build failed");
    (cli, matches)
}

#[test]
fn test_clap_defaults_match_struct_defaults() {
    let (cli, _) = parse_cli(&[]);
    assert_eq!(cli.config.weights, ScoringWeights::default());
}

#[test]
fn test_default_weights_are_valid() {
    assert!(ScoringWeights::default().validate().is_ok());
}

#[test]
fn test_partial_profile_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{ "weight_flights": 2.5, "tier_high_min": 20.0 }"#).unwrap();

    let w = ScoringWeights::load_from_file(&path).expect("profile should load");
    assert_eq!(w.weight_flights, 2.5);
    assert_eq!(w.tier_high_min, 20.0);
    assert_eq!(w.weight_electricity, 0.5);
    assert_eq!(w.recycling_factor_sometimes, 0.9);
}

#[test]
fn test_missing_profile_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScoringWeights::load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, EcoTallyError::Io(_)));
}

#[test]
fn test_malformed_profile_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ weight_gas: ").unwrap();
    let err = ScoringWeights::load_from_file(&path).unwrap_err();
    assert!(matches!(err, EcoTallyError::Json(_)));
}

#[test]
fn test_profile_with_negative_weight_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("neg.json");
    fs::write(&path, r#"{ "weight_car": -0.3 }"#).unwrap();

    // Loading only parses; the range check runs after CLI overrides merge.
    let w = ScoringWeights::load_from_file(&path).expect("profile should parse");
    let err = w.validate().unwrap_err();
    assert!(matches!(err, EcoTallyError::Config(_)));
    assert!(err.to_string().contains("weight_car"));
}

#[test]
fn test_inverted_tiers_are_rejected() {
    let w = ScoringWeights {
        tier_medium_min: 12.0,
        tier_high_min: 10.0,
        ..Default::default()
    };
    let err = w.validate().unwrap_err();
    assert!(err.to_string().contains("tier_medium_min"));
}

#[test]
fn test_non_finite_weight_is_rejected() {
    let w = ScoringWeights {
        diet_base: f64::NAN,
        ..Default::default()
    };
    assert!(w.validate().is_err());
}

#[test]
fn test_merge_only_applies_typed_flags() {
    let mut profile = ScoringWeights {
        weight_gas: 9.0,
        weight_car: 9.0,
        ..Default::default()
    };

    let (cli, matches) = parse_cli(&["--weight-car", "0.4"]);
    profile.merge_from_cli(&cli.config.weights, &matches);

    // Typed flag wins, untouched profile values survive the clap defaults.
    assert_eq!(profile.weight_car, 0.4);
    assert_eq!(profile.weight_gas, 9.0);
}
