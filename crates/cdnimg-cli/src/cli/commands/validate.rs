//! `cdnimg validate <path>` – run the path validator.

use anyhow::{Context, Result};
use cdnimg_core::validate_path;

pub fn run_validate(path: &str) -> Result<()> {
    let valid = validate_path(path).with_context(|| format!("validate {path:?}"))?;
    println!("ok: {valid}");
    Ok(())
}
