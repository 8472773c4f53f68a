//! Tests for params and compose subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use cdnimg_core::network::NetworkQuality;
use cdnimg_core::transform::{Fit, Quality};
use clap::Parser;

#[test]
fn cli_parse_params_defaults() {
    match parse(&["cdnimg", "params", "catalog"]) {
        CliCommand::Params {
            preset,
            width,
            height,
            fit,
            quality,
            network,
        } => {
            assert_eq!(preset, "catalog");
            assert!(width.is_none());
            assert!(height.is_none());
            assert!(fit.is_none());
            assert!(quality.is_none());
            assert!(network.is_none());
        }
        _ => panic!("expected Params"),
    }
}

#[test]
fn cli_parse_params_overrides() {
    match parse(&[
        "cdnimg", "params", "hero", "--width", "900", "--fit", "contain", "--quality", "70",
        "--network", "slow",
    ]) {
        CliCommand::Params {
            preset,
            width,
            fit,
            quality,
            network,
            ..
        } => {
            assert_eq!(preset, "hero");
            assert_eq!(width, Some(900));
            assert_eq!(fit, Some(Fit::Contain));
            assert_eq!(quality, Some(Quality::Value(70)));
            assert_eq!(network, Some(NetworkQuality::Slow));
        }
        _ => panic!("expected Params with overrides"),
    }
}

#[test]
fn cli_parse_params_rejects_bad_quality() {
    assert!(Cli::try_parse_from(["cdnimg", "params", "hero", "--quality", "0"]).is_err());
    assert!(Cli::try_parse_from(["cdnimg", "params", "hero", "--fit", "stretch"]).is_err());
}

#[test]
fn cli_parse_compose() {
    match parse(&["cdnimg", "compose", "https://img.example/a.jpg"]) {
        CliCommand::Compose {
            url,
            preset,
            params,
            network,
        } => {
            assert_eq!(url, "https://img.example/a.jpg");
            assert_eq!(preset, "catalog");
            assert!(params.is_none());
            assert!(network.is_none());
        }
        _ => panic!("expected Compose"),
    }
}

#[test]
fn cli_parse_compose_explicit_params() {
    match parse(&[
        "cdnimg",
        "compose",
        "https://img.example/a.jpg",
        "--params",
        "w=10,h=10",
        "--network",
        "fast",
    ]) {
        CliCommand::Compose { params, network, .. } => {
            assert_eq!(params.as_deref(), Some("w=10,h=10"));
            assert_eq!(network, Some(NetworkQuality::Fast));
        }
        _ => panic!("expected Compose with --params"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["cdnimg", "validate", "a.jpg", "--config", "/tmp/c.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.toml")));
}
