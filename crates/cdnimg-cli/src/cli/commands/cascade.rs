//! `cdnimg cascade <url>` – list the URL tried at every fallback level.

use anyhow::Result;
use cdnimg_core::transform::TransformPreset;
use cdnimg_core::{FallbackLevel, ImagePipeline};

pub fn run_cascade(
    pipeline: &ImagePipeline,
    url: &str,
    preset: TransformPreset,
    json: bool,
) -> Result<()> {
    let mut cascade = pipeline.cascade(url, preset);
    let mut steps: Vec<(FallbackLevel, String)> = vec![(cascade.level(), cascade.url().to_string())];
    while !cascade.is_exhausted() {
        cascade.on_failure();
        steps.push((cascade.level(), cascade.url().to_string()));
    }

    if json {
        let value: Vec<_> = steps
            .iter()
            .map(|(level, url)| serde_json::json!({ "level": level, "url": url }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{:<26} {}", "LEVEL", "URL");
    for (level, url) in steps {
        println!("{:<26} {}", level.to_string(), url);
    }
    Ok(())
}
