use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::host_policy::TrustedHosts;
use crate::transform::ConstrainedPolicy;

/// Global configuration loaded from `~/.config/cdnimg/config.toml`.
///
/// Supplied by the host environment; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdnConfig {
    /// Storage hostnames (and their subdomains) eligible for transformation.
    pub trusted_hosts: Vec<String>,
    /// Asset shown once every fallback level has failed.
    pub placeholder: String,
    /// Optional slow-network adjustments; if missing, built-in defaults are used.
    #[serde(default)]
    pub network: Option<ConstrainedPolicy>,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            trusted_hosts: vec!["img.example".to_string()],
            placeholder: "/images/placeholder.svg".to_string(),
            network: None,
        }
    }
}

impl CdnConfig {
    pub fn trusted_hosts(&self) -> TrustedHosts {
        TrustedHosts::new(&self.trusted_hosts)
    }

    pub fn constrained_policy(&self) -> ConstrainedPolicy {
        self.network.unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cdnimg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CdnConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CdnConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit path (no default file is created).
pub fn load_from_path(path: &Path) -> Result<CdnConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: CdnConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    if cfg.trusted_hosts().is_empty() {
        tracing::warn!("config has no trusted hosts; every URL will pass through unchanged");
    }
    Ok(cfg)
}
