//! `cdnimg inspect <url>` – eligibility and transform segment details.

use anyhow::Result;
use cdnimg_core::transform::parse_params;
use cdnimg_core::url_model::{embedded_params, extract_original_path, has_existing_transformation};
use cdnimg_core::TrustedHosts;

pub fn run_inspect(hosts: &TrustedHosts, url: &str, json: bool) -> Result<()> {
    let eligible = hosts.is_eligible(url);
    let transformed = has_existing_transformation(url);
    let original = extract_original_path(url);
    let params = embedded_params(url);
    let params_valid = params.as_deref().map(|p| parse_params(p).is_ok());

    if json {
        let value = serde_json::json!({
            "url": url,
            "eligible": eligible,
            "transformed": transformed,
            "original": original,
            "params": params,
            "params_valid": params_valid,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{:<12} {}", "URL", url);
    println!("{:<12} {}", "ELIGIBLE", eligible);
    println!("{:<12} {}", "TRANSFORMED", transformed);
    println!("{:<12} {}", "ORIGINAL", original);
    match (params, params_valid) {
        (Some(p), Some(true)) => println!("{:<12} {}", "PARAMS", p),
        (Some(p), _) => println!("{:<12} {} (not in token grammar)", "PARAMS", p),
        (None, _) if transformed => println!("{:<12} (missing)", "PARAMS"),
        (None, _) => {}
    }
    Ok(())
}
