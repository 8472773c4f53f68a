//! `cdnimg params <preset>` – print the canonical params string.

use anyhow::Result;
use cdnimg_core::config::CdnConfig;
use cdnimg_core::network::NetworkQuality;
use cdnimg_core::transform::{build_params_with, ParamOverrides, TransformPreset};

pub fn run_params(
    cfg: &CdnConfig,
    preset: TransformPreset,
    overrides: &ParamOverrides,
    network: NetworkQuality,
) -> Result<()> {
    let overrides = (!overrides.is_empty()).then_some(overrides);
    let params = build_params_with(&cfg.constrained_policy(), preset, overrides, Some(network));
    println!("{params}");
    Ok(())
}
