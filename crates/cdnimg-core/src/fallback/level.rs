use std::fmt;

use serde::Serialize;

/// How far an image has fallen back after load failures.
///
/// Levels only move forward; `Level3Placeholder` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackLevel {
    /// The requested preset transformation.
    #[default]
    Level0Transformed,
    /// A small, conservative transformation of the original path.
    Level1AlternateTransform,
    /// The untransformed original URL.
    Level2DirectOriginal,
    /// Static placeholder asset.
    Level3Placeholder,
}

impl FallbackLevel {
    pub fn index(&self) -> u8 {
        match self {
            FallbackLevel::Level0Transformed => 0,
            FallbackLevel::Level1AlternateTransform => 1,
            FallbackLevel::Level2DirectOriginal => 2,
            FallbackLevel::Level3Placeholder => 3,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == FallbackLevel::Level3Placeholder
    }

    pub fn label(&self) -> &'static str {
        match self {
            FallbackLevel::Level0Transformed => "transformed",
            FallbackLevel::Level1AlternateTransform => "alternate-transform",
            FallbackLevel::Level2DirectOriginal => "direct-original",
            FallbackLevel::Level3Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for FallbackLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level{} ({})", self.index(), self.label())
    }
}
