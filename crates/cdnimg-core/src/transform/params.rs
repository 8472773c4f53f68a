//! Transformation parameters and their canonical wire form.

use std::fmt;
use std::str::FromStr;

use crate::error::{TransformError, UnknownValue};

/// Largest width/height accepted from an override.
pub const MAX_DIMENSION: u32 = 4096;

/// How the CDN fits the image into the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fit {
    Cover,
    Contain,
}

impl Fit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fit::Cover => "cover",
            Fit::Contain => "contain",
        }
    }
}

impl FromStr for Fit {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cover" => Ok(Fit::Cover),
            "contain" => Ok(Fit::Contain),
            _ => Err(UnknownValue {
                kind: "fit mode",
                value: s.to_string(),
                expected: "cover, contain",
            }),
        }
    }
}

/// Output quality token: `auto` or an explicit 1-100 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Auto,
    Value(u8),
}

impl Quality {
    /// Explicit quality, clamped to `1..=100`.
    pub fn value(q: u32) -> Self {
        Quality::Value(q.clamp(1, 100) as u8)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Auto => f.write_str("auto"),
            Quality::Value(q) => write!(f, "{q}"),
        }
    }
}

impl FromStr for Quality {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Quality::Auto);
        }
        match s.parse::<u32>() {
            Ok(q) if (1..=100).contains(&q) => Ok(Quality::Value(q as u8)),
            _ => Err(UnknownValue {
                kind: "quality",
                value: s.to_string(),
                expected: "auto, 1-100",
            }),
        }
    }
}

/// Fully resolved parameters for one transformation.
///
/// `Display` yields the canonical string `w=..,h=..,fit=..,quality=..`;
/// identical values always serialize to identical bytes, which keeps CDN
/// cache keys shared across source images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformParams {
    pub width: u32,
    pub height: u32,
    pub fit: Fit,
    pub quality: Quality,
}

impl TransformParams {
    /// Small, auto-quality box used when the requested variant failed.
    pub const fn conservative() -> Self {
        Self {
            width: 320,
            height: 240,
            fit: Fit::Contain,
            quality: Quality::Auto,
        }
    }
}

impl fmt::Display for TransformParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "w={},h={},fit={},quality={}",
            self.width,
            self.height,
            self.fit.as_str(),
            self.quality
        )
    }
}

/// Caller overrides applied field by field on top of a preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: Option<Fit>,
    pub quality: Option<Quality>,
}

impl ParamOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply to `params`; dimensions are clamped to `1..=MAX_DIMENSION`.
    pub fn apply(&self, params: &mut TransformParams) {
        if let Some(w) = self.width {
            params.width = w.clamp(1, MAX_DIMENSION);
        }
        if let Some(h) = self.height {
            params.height = h.clamp(1, MAX_DIMENSION);
        }
        if let Some(fit) = self.fit {
            params.fit = fit;
        }
        if let Some(quality) = self.quality {
            params.quality = match quality {
                Quality::Value(q) => Quality::value(q as u32),
                Quality::Auto => Quality::Auto,
            };
        }
    }
}

/// Keys allowed in a params string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Width,
    Height,
    Fit,
    Quality,
}

impl ParamKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::Width => "w",
            ParamKey::Height => "h",
            ParamKey::Fit => "fit",
            ParamKey::Quality => "quality",
        }
    }

    fn from_token(key: &str) -> Option<Self> {
        match key {
            "w" => Some(ParamKey::Width),
            "h" => Some(ParamKey::Height),
            "fit" => Some(ParamKey::Fit),
            "quality" => Some(ParamKey::Quality),
            _ => None,
        }
    }
}

/// One `key=value` pair of a params string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamToken {
    pub key: ParamKey,
    pub value: String,
}

fn is_grammar_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '=' | ',' | '.' | '-')
}

/// Checks a params string against `key=value(,key=value)*`.
///
/// Characters must be in `[A-Za-z0-9_=,.-]`, keys must be one of
/// `w`, `h`, `fit`, `quality`, values must be non-empty and no key may
/// repeat. Values themselves are not interpreted.
pub fn parse_params(params: &str) -> Result<Vec<ParamToken>, TransformError> {
    if params.is_empty() {
        return Err(TransformError::invalid_params(params, "empty"));
    }
    if let Some(bad) = params.chars().find(|c| !is_grammar_char(*c)) {
        return Err(TransformError::invalid_params(
            params,
            format!("character {bad:?} not allowed"),
        ));
    }

    let mut tokens: Vec<ParamToken> = Vec::new();
    for token in params.split(',') {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| TransformError::invalid_params(params, format!("token {token:?} is not key=value")))?;
        if value.is_empty() || value.contains('=') {
            return Err(TransformError::invalid_params(
                params,
                format!("token {token:?} has an invalid value"),
            ));
        }
        let key = ParamKey::from_token(key)
            .ok_or_else(|| TransformError::invalid_params(params, format!("unknown key {key:?}")))?;
        if tokens.iter().any(|t| t.key == key) {
            return Err(TransformError::invalid_params(
                params,
                format!("duplicate key {:?}", key.as_str()),
            ));
        }
        tokens.push(ParamToken {
            key,
            value: value.to_string(),
        });
    }
    Ok(tokens)
}
