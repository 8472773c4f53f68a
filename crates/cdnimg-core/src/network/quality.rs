//! Network quality classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownValue;

/// Coarse client network quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkQuality {
    Slow,
    Medium,
    Fast,
    /// No signal available.
    #[default]
    Unknown,
}

impl NetworkQuality {
    /// Quality to act on: `Unknown` is treated as `Medium`.
    pub fn effective(self) -> Self {
        match self {
            NetworkQuality::Unknown => NetworkQuality::Medium,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkQuality::Slow => "slow",
            NetworkQuality::Medium => "medium",
            NetworkQuality::Fast => "fast",
            NetworkQuality::Unknown => "unknown",
        }
    }

    pub(crate) fn to_u8(self) -> u8 {
        match self {
            NetworkQuality::Unknown => 0,
            NetworkQuality::Slow => 1,
            NetworkQuality::Medium => 2,
            NetworkQuality::Fast => 3,
        }
    }

    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            1 => NetworkQuality::Slow,
            2 => NetworkQuality::Medium,
            3 => NetworkQuality::Fast,
            _ => NetworkQuality::Unknown,
        }
    }

    /// Derive quality from a runtime connection report.
    ///
    /// - data saver on: `Slow`
    /// - effective type `slow-2g`/`2g`: `Slow`, `3g`: `Medium`, `4g`: `Fast`
    /// - otherwise downlink below 1.5 Mbps: `Slow`, below 5: `Medium`, else `Fast`
    /// - nothing usable: `Unknown`
    pub fn from_connection(info: &ConnectionInfo) -> Self {
        if info.save_data {
            return NetworkQuality::Slow;
        }
        let by_type = info
            .effective_type
            .as_deref()
            .map(|t| t.trim().to_ascii_lowercase());
        match by_type.as_deref() {
            Some("slow-2g") | Some("2g") => return NetworkQuality::Slow,
            Some("3g") => return NetworkQuality::Medium,
            Some("4g") => return NetworkQuality::Fast,
            _ => {}
        }
        match info.downlink_mbps {
            Some(mbps) if mbps.is_finite() && mbps >= 0.0 => {
                if mbps < 1.5 {
                    NetworkQuality::Slow
                } else if mbps < 5.0 {
                    NetworkQuality::Medium
                } else {
                    NetworkQuality::Fast
                }
            }
            _ => NetworkQuality::Unknown,
        }
    }
}

impl fmt::Display for NetworkQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkQuality {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(NetworkQuality::Slow),
            "medium" => Ok(NetworkQuality::Medium),
            "fast" => Ok(NetworkQuality::Fast),
            "unknown" => Ok(NetworkQuality::Unknown),
            _ => Err(UnknownValue {
                kind: "network quality",
                value: s.to_string(),
                expected: "slow, medium, fast, unknown",
            }),
        }
    }
}

/// Connection details reported by the host environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Effective connection type such as `4g` or `slow-2g`.
    #[serde(default)]
    pub effective_type: Option<String>,
    /// Estimated downlink bandwidth.
    #[serde(default)]
    pub downlink_mbps: Option<f64>,
    /// User asked for reduced data usage.
    #[serde(default)]
    pub save_data: bool,
}
