//! Named presets for each display context.

use super::params::{Fit, Quality, TransformParams};

/// Usage context an image is displayed in.
///
/// Adding a variant forces every `match` below to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformPreset {
    /// Grid cards on listing pages.
    #[default]
    Catalog,
    /// Full-width banners.
    Hero,
    Thumbnail,
    Mobile,
    /// Single-item detail view.
    Detail,
}

impl TransformPreset {
    pub const ALL: [TransformPreset; 5] = [
        TransformPreset::Catalog,
        TransformPreset::Hero,
        TransformPreset::Thumbnail,
        TransformPreset::Mobile,
        TransformPreset::Detail,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TransformPreset::Catalog => "catalog",
            TransformPreset::Hero => "hero",
            TransformPreset::Thumbnail => "thumbnail",
            TransformPreset::Mobile => "mobile",
            TransformPreset::Detail => "detail",
        }
    }

    /// Look up a preset by name (case-insensitive). Unknown names fall back
    /// to `Catalog`.
    pub fn from_name(name: &str) -> Self {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .unwrap_or_else(|| {
                tracing::debug!(preset = wanted, "unknown preset, using catalog");
                TransformPreset::Catalog
            })
    }

    /// Fixed base parameters.
    pub fn base(&self) -> TransformParams {
        let (width, height, fit, quality) = match self {
            TransformPreset::Catalog => (400, 300, Fit::Cover, Quality::Auto),
            TransformPreset::Hero => (1600, 900, Fit::Cover, Quality::Value(85)),
            TransformPreset::Thumbnail => (200, 200, Fit::Cover, Quality::Value(60)),
            TransformPreset::Mobile => (640, 480, Fit::Cover, Quality::Value(75)),
            TransformPreset::Detail => (800, 600, Fit::Contain, Quality::Auto),
        };
        TransformParams {
            width,
            height,
            fit,
            quality,
        }
    }

    /// Whether dimensions shrink on a slow network. Small presets keep their
    /// size so their cache keys stay shared.
    pub fn resizable_under_constraint(&self) -> bool {
        match self {
            TransformPreset::Hero | TransformPreset::Detail => true,
            TransformPreset::Catalog | TransformPreset::Thumbnail | TransformPreset::Mobile => false,
        }
    }
}
