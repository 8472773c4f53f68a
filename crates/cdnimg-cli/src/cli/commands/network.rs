//! `cdnimg network show|set` – saved network quality.

use anyhow::Result;
use cdnimg_core::network::{NetworkMonitor, NetworkQuality};

/// Monitor for this invocation: an explicit quality wins, then the saved
/// one, then `unknown`.
pub fn network_source(explicit: Option<NetworkQuality>) -> Result<NetworkMonitor> {
    if let Some(quality) = explicit {
        return Ok(NetworkMonitor::with_quality(quality));
    }
    let path = NetworkMonitor::default_path()?;
    Ok(NetworkMonitor::load_from_path(&path)?.unwrap_or_default())
}

pub fn run_network_show() -> Result<()> {
    let monitor = network_source(None)?;
    let quality = monitor.current_quality();
    println!("{} (acts as {})", quality, quality.effective());
    Ok(())
}

pub fn run_network_set(quality: NetworkQuality) -> Result<()> {
    let path = NetworkMonitor::default_path()?;
    NetworkMonitor::with_quality(quality).save_to_path(&path)?;
    println!("network quality set to {quality} ({})", path.display());
    Ok(())
}
