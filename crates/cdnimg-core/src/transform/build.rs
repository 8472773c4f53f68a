//! Parameter Builder: preset + overrides + network hint -> canonical string.

use serde::{Deserialize, Serialize};

use super::params::{ParamOverrides, Quality, TransformParams};
use super::preset::TransformPreset;
use crate::network::NetworkQuality;

/// Adjustments applied when the network is slow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstrainedPolicy {
    /// Quality used instead of the preset default (unless overridden).
    pub slow_quality: u8,
    /// Width/height percentage kept for resizable presets.
    pub scale_percent: u8,
}

impl Default for ConstrainedPolicy {
    fn default() -> Self {
        Self {
            slow_quality: 60,
            scale_percent: 75,
        }
    }
}

impl ConstrainedPolicy {
    fn scale(&self, dimension: u32) -> u32 {
        let percent = u32::from(self.scale_percent.clamp(1, 100));
        (dimension * percent / 100).max(1)
    }
}

/// Resolve the parameters for `preset` under the default constrained policy.
pub fn resolve_params(
    preset: TransformPreset,
    overrides: Option<&ParamOverrides>,
    network: Option<NetworkQuality>,
) -> TransformParams {
    resolve_params_with(&ConstrainedPolicy::default(), preset, overrides, network)
}

/// Resolve the parameters for `preset`.
///
/// Order: preset base, then the slow-network adjustment, then overrides, so
/// an explicit width or quality always wins.
pub fn resolve_params_with(
    policy: &ConstrainedPolicy,
    preset: TransformPreset,
    overrides: Option<&ParamOverrides>,
    network: Option<NetworkQuality>,
) -> TransformParams {
    let mut params = preset.base();

    if network.map(NetworkQuality::effective) == Some(NetworkQuality::Slow) {
        params.quality = Quality::value(u32::from(policy.slow_quality));
        if preset.resizable_under_constraint() {
            params.width = policy.scale(params.width);
            params.height = policy.scale(params.height);
        }
    }

    if let Some(overrides) = overrides {
        overrides.apply(&mut params);
    }
    params
}

/// Canonical params string for `preset`, e.g. `w=400,h=300,fit=cover,quality=auto`.
pub fn build_params(
    preset: TransformPreset,
    overrides: Option<&ParamOverrides>,
    network: Option<NetworkQuality>,
) -> String {
    resolve_params(preset, overrides, network).to_string()
}

/// [`build_params`] with a configured constrained policy.
pub fn build_params_with(
    policy: &ConstrainedPolicy,
    preset: TransformPreset,
    overrides: Option<&ParamOverrides>,
    network: Option<NetworkQuality>,
) -> String {
    resolve_params_with(policy, preset, overrides, network).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::params::Fit;

    #[test]
    fn preset_canonical_strings() {
        assert_eq!(
            build_params(TransformPreset::Catalog, None, None),
            "w=400,h=300,fit=cover,quality=auto"
        );
        assert_eq!(
            build_params(TransformPreset::Thumbnail, None, None),
            "w=200,h=200,fit=cover,quality=60"
        );
        assert_eq!(
            build_params(TransformPreset::from_name("no-such-preset"), None, None),
            "w=400,h=300,fit=cover,quality=auto"
        );
    }

    #[test]
    fn same_preset_same_bytes() {
        let a = build_params(TransformPreset::Catalog, None, Some(NetworkQuality::Fast));
        let b = build_params(TransformPreset::Catalog, None, Some(NetworkQuality::Fast));
        assert_eq!(a, b);
    }

    #[test]
    fn overrides_replace_fields() {
        let overrides = ParamOverrides {
            width: Some(500),
            quality: Some(Quality::Value(90)),
            ..Default::default()
        };
        assert_eq!(
            build_params(TransformPreset::Catalog, Some(&overrides), None),
            "w=500,h=300,fit=cover,quality=90"
        );
        let fit = ParamOverrides {
            fit: Some(Fit::Contain),
            ..Default::default()
        };
        assert_eq!(
            build_params(TransformPreset::Thumbnail, Some(&fit), None),
            "w=200,h=200,fit=contain,quality=60"
        );
    }

    #[test]
    fn slow_network_lowers_quality() {
        assert_eq!(
            build_params(TransformPreset::Catalog, None, Some(NetworkQuality::Slow)),
            "w=400,h=300,fit=cover,quality=60"
        );
        assert_eq!(
            build_params(TransformPreset::Mobile, None, Some(NetworkQuality::Slow)),
            "w=640,h=480,fit=cover,quality=60"
        );
    }

    #[test]
    fn slow_network_shrinks_resizable_presets() {
        assert_eq!(
            build_params(TransformPreset::Hero, None, Some(NetworkQuality::Slow)),
            "w=1200,h=675,fit=cover,quality=60"
        );
        assert_eq!(
            build_params(TransformPreset::Detail, None, Some(NetworkQuality::Slow)),
            "w=600,h=450,fit=contain,quality=60"
        );
    }

    #[test]
    fn explicit_quality_survives_slow_network() {
        let overrides = ParamOverrides {
            quality: Some(Quality::Auto),
            ..Default::default()
        };
        assert_eq!(
            build_params(TransformPreset::Catalog, Some(&overrides), Some(NetworkQuality::Slow)),
            "w=400,h=300,fit=cover,quality=auto"
        );
    }

    #[test]
    fn unknown_and_fast_networks_leave_preset_alone() {
        for network in [None, Some(NetworkQuality::Unknown), Some(NetworkQuality::Medium), Some(NetworkQuality::Fast)] {
            assert_eq!(
                build_params(TransformPreset::Hero, None, network),
                "w=1600,h=900,fit=cover,quality=85"
            );
        }
    }

    #[test]
    fn custom_policy() {
        let policy = ConstrainedPolicy {
            slow_quality: 40,
            scale_percent: 50,
        };
        assert_eq!(
            build_params_with(&policy, TransformPreset::Hero, None, Some(NetworkQuality::Slow)),
            "w=800,h=450,fit=cover,quality=40"
        );
    }
}
