//! `cdnimg compose <url>` – build the transformation URL.

use anyhow::{Context, Result};
use cdnimg_core::transform::TransformPreset;
use cdnimg_core::ImagePipeline;

pub fn run_compose(
    pipeline: &ImagePipeline,
    url: &str,
    preset: TransformPreset,
    params: Option<&str>,
) -> Result<()> {
    let params = match params {
        Some(p) => p.to_string(),
        None => pipeline.params_for(preset, None),
    };
    let out = pipeline
        .compose(url, &params)
        .with_context(|| format!("compose {url}"))?;
    println!("{out}");
    Ok(())
}
