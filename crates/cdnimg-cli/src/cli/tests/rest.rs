//! Tests for inspect, validate, cascade, network and completions.

use super::parse;
use crate::cli::{Cli, CliCommand, NetworkAction};
use cdnimg_core::network::NetworkQuality;
use clap::Parser;

#[test]
fn cli_parse_inspect() {
    match parse(&["cdnimg", "inspect", "https://img.example/a.jpg", "--json"]) {
        CliCommand::Inspect { url, json } => {
            assert_eq!(url, "https://img.example/a.jpg");
            assert!(json);
        }
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_validate() {
    match parse(&["cdnimg", "validate", "folder/%2e%2e/secret.jpg"]) {
        CliCommand::Validate { path } => assert_eq!(path, "folder/%2e%2e/secret.jpg"),
        _ => panic!("expected Validate"),
    }
}

#[test]
fn cli_parse_cascade() {
    match parse(&["cdnimg", "cascade", "https://img.example/a.jpg", "--preset", "hero"]) {
        CliCommand::Cascade {
            url,
            preset,
            network,
            json,
        } => {
            assert_eq!(url, "https://img.example/a.jpg");
            assert_eq!(preset, "hero");
            assert!(network.is_none());
            assert!(!json);
        }
        _ => panic!("expected Cascade"),
    }
}

#[test]
fn cli_parse_network_show_and_set() {
    match parse(&["cdnimg", "network", "show"]) {
        CliCommand::Network {
            action: NetworkAction::Show,
        } => {}
        _ => panic!("expected Network Show"),
    }
    match parse(&["cdnimg", "network", "set", "slow"]) {
        CliCommand::Network {
            action: NetworkAction::Set { quality },
        } => assert_eq!(quality, NetworkQuality::Slow),
        _ => panic!("expected Network Set"),
    }
    assert!(Cli::try_parse_from(["cdnimg", "network", "set", "warp"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["cdnimg", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
