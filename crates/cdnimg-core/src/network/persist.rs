//! Persist the last network quality (JSON under XDG state dir) so the CLI
//! can simulate a constrained network across runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::monitor::NetworkMonitor;
use super::quality::NetworkQuality;

/// Snapshot written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedNetwork {
    #[serde(default = "default_version")]
    pub version: u8,
    pub quality: NetworkQuality,
}

fn default_version() -> u8 {
    1
}

impl NetworkMonitor {
    /// Default path: `~/.local/state/cdnimg/network.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("cdnimg")?;
        Ok(xdg_dirs.get_state_home().join("cdnimg").join("network.json"))
    }

    /// Save the current quality to the given path (creates parent dir if needed).
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let snapshot = PersistedNetwork {
            version: 1,
            quality: self.current_quality(),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&snapshot).context("serialize network quality")?;
        std::fs::write(path, json)
            .with_context(|| format!("write network quality: {}", path.display()))?;
        Ok(())
    }

    /// Load a monitor from the given path. A missing file yields `None` so the
    /// caller can fall back to `NetworkMonitor::new()`.
    pub fn load_from_path(path: &Path) -> Result<Option<NetworkMonitor>> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read network quality: {}", path.display()))
            }
        };
        let snapshot: PersistedNetwork = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse network quality: {}", path.display()))?;
        Ok(Some(NetworkMonitor::with_quality(snapshot.quality)))
    }
}
