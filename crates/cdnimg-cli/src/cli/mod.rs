//! CLI for the cdnimg URL transformation engine.

mod commands;

use anyhow::Result;
use cdnimg_core::config::{self, CdnConfig};
use cdnimg_core::network::NetworkQuality;
use cdnimg_core::transform::{Fit, ParamOverrides, Quality, TransformPreset};
use cdnimg_core::ImagePipeline;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use commands::{
    network_source, run_cascade, run_completions, run_compose, run_inspect, run_network_set,
    run_network_show, run_params, run_validate,
};

/// Top-level CLI for cdnimg.
#[derive(Debug, Parser)]
#[command(name = "cdnimg")]
#[command(about = "cdnimg: safe, idempotent CDN image URLs with fallback cascades", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/cdnimg/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical params string for a preset.
    Params {
        /// Preset name (catalog, hero, thumbnail, mobile, detail); unknown names use catalog.
        preset: String,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// cover or contain.
        #[arg(long)]
        fit: Option<Fit>,
        /// auto or 1-100.
        #[arg(long)]
        quality: Option<Quality>,
        /// Network quality to assume (slow, medium, fast, unknown).
        #[arg(long)]
        network: Option<NetworkQuality>,
    },

    /// Build the transformation URL for a source image.
    Compose {
        /// Source image URL.
        url: String,
        /// Preset used when --params is not given.
        #[arg(long, default_value = "catalog")]
        preset: String,
        /// Explicit params string, e.g. w=400,h=300,fit=cover,quality=auto.
        #[arg(long)]
        params: Option<String>,
        /// Network quality to assume instead of the saved one.
        #[arg(long)]
        network: Option<NetworkQuality>,
    },

    /// Report whether a URL is eligible and already transformed.
    Inspect {
        url: String,
        /// Print a JSON object instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Validate an image path against traversal rules.
    Validate {
        path: String,
    },

    /// Print every fallback level's URL for a source image.
    Cascade {
        url: String,
        #[arg(long, default_value = "catalog")]
        preset: String,
        #[arg(long)]
        network: Option<NetworkQuality>,
        /// Print a JSON array instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show or set the saved network quality.
    Network {
        #[command(subcommand)]
        action: NetworkAction,
    },

    /// Generate shell completions.
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum NetworkAction {
    /// Print the saved network quality.
    Show,
    /// Save a network quality for later commands.
    Set {
        quality: NetworkQuality,
    },
}

fn load_config(path: Option<&Path>) -> Result<CdnConfig> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load_or_init(),
    }
}

fn pipeline(cfg: &CdnConfig, network: Option<NetworkQuality>) -> Result<ImagePipeline> {
    Ok(ImagePipeline::from_config(cfg, Arc::new(network_source(network)?)))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config_path = cli.config.as_deref();
        let cfg = || -> Result<CdnConfig> {
            let cfg = load_config(config_path)?;
            tracing::debug!("loaded config: {:?}", cfg);
            Ok(cfg)
        };

        match cli.command {
            CliCommand::Params {
                preset,
                width,
                height,
                fit,
                quality,
                network,
            } => {
                let overrides = ParamOverrides {
                    width,
                    height,
                    fit,
                    quality,
                };
                let network = network_source(network)?.current_quality();
                run_params(&cfg()?, TransformPreset::from_name(&preset), &overrides, network)?;
            }
            CliCommand::Compose {
                url,
                preset,
                params,
                network,
            } => {
                let pipeline = pipeline(&cfg()?, network)?;
                run_compose(&pipeline, &url, TransformPreset::from_name(&preset), params.as_deref())?;
            }
            CliCommand::Inspect { url, json } => run_inspect(&cfg()?.trusted_hosts(), &url, json)?,
            CliCommand::Validate { path } => run_validate(&path)?,
            CliCommand::Cascade {
                url,
                preset,
                network,
                json,
            } => {
                let pipeline = pipeline(&cfg()?, network)?;
                run_cascade(&pipeline, &url, TransformPreset::from_name(&preset), json)?;
            }
            CliCommand::Network { action } => match action {
                NetworkAction::Show => run_network_show()?,
                NetworkAction::Set { quality } => run_network_set(quality)?,
            },
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
