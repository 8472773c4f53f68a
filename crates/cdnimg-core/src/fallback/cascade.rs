//! Fallback Cascade Controller.
//!
//! Decides which URL to try next after a load failure. It never decides
//! when: retry timing belongs to the caller.

use crate::error::PathError;
use crate::host_policy::TrustedHosts;
use crate::transform::{compose_url, TransformParams};
use crate::url_model::{extract_original_path, validate_path, RawUrl};

use super::level::FallbackLevel;

/// Shared inputs for every cascade: allow-list, placeholder and the
/// conservative params tried at level 1.
#[derive(Debug, Clone)]
pub struct CascadeEnv {
    pub hosts: TrustedHosts,
    pub placeholder: String,
    pub alternate: TransformParams,
}

impl CascadeEnv {
    pub fn new(hosts: TrustedHosts, placeholder: impl Into<String>) -> Self {
        Self {
            hosts,
            placeholder: placeholder.into(),
            alternate: TransformParams::conservative(),
        }
    }

    fn placeholder(&self) -> (FallbackLevel, String) {
        (FallbackLevel::Level3Placeholder, self.placeholder.clone())
    }
}

/// Start state for a new source.
pub fn reset(source: &str) -> FallbackLevel {
    tracing::trace!(source, "fallback cascade reset");
    FallbackLevel::Level0Transformed
}

/// Level 0 URL: `source` composed with the requested params.
///
/// A source that cannot be composed (unsafe path, bad params) goes straight
/// to the placeholder, since every other level would reuse the same path.
pub fn initial(env: &CascadeEnv, source: &str, params: &str) -> (FallbackLevel, String) {
    match compose_url(&env.hosts, source, params) {
        Ok(url) => (reset(source), url),
        Err(err) => {
            tracing::warn!(source, %err, "cannot compose image URL, using placeholder");
            env.placeholder()
        }
    }
}

/// Advance one level after a failure and return the URL to try next.
///
/// Ineligible sources have no alternate CDN path, so level 0 jumps straight
/// to the placeholder. Any level whose URL cannot be built safely also
/// resolves to the placeholder. Never goes backwards.
pub fn advance(env: &CascadeEnv, current: FallbackLevel, source: &str) -> (FallbackLevel, String) {
    let next = match current {
        FallbackLevel::Level0Transformed if !env.hosts.is_eligible(source) => {
            tracing::debug!(source, "ineligible source failed, skipping to placeholder");
            env.placeholder()
        }
        FallbackLevel::Level0Transformed => alternate_transform(env, source),
        FallbackLevel::Level1AlternateTransform => direct_original(env, source),
        FallbackLevel::Level2DirectOriginal | FallbackLevel::Level3Placeholder => env.placeholder(),
    };
    let (level, url) = &next;
    tracing::debug!(from = %current, to = %level, url = %url, "image fallback");
    next
}

fn alternate_transform(env: &CascadeEnv, source: &str) -> (FallbackLevel, String) {
    let original = extract_original_path(source);
    match compose_url(&env.hosts, &original, &env.alternate.to_string()) {
        Ok(url) => (FallbackLevel::Level1AlternateTransform, url),
        Err(err) => {
            tracing::warn!(source, %err, "no alternate transform possible");
            env.placeholder()
        }
    }
}

fn direct_original(env: &CascadeEnv, source: &str) -> (FallbackLevel, String) {
    let original = extract_original_path(source);
    if let Err(PathError::PathTraversal(_)) = validate_path(RawUrl::split(&original).path) {
        tracing::warn!(source, "original path unsafe, using placeholder");
        return env.placeholder();
    }
    (FallbackLevel::Level2DirectOriginal, original)
}

/// Fallback state for one displayed image.
///
/// Owned by the display instance; never share one across images.
#[derive(Debug, Clone)]
pub struct FallbackCascade<'e> {
    env: &'e CascadeEnv,
    source: String,
    level: FallbackLevel,
    url: String,
}

impl<'e> FallbackCascade<'e> {
    pub fn new(env: &'e CascadeEnv, source: impl Into<String>, params: &str) -> Self {
        let source = source.into();
        let (level, url) = initial(env, &source, params);
        Self {
            env,
            source,
            level,
            url,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn level(&self) -> FallbackLevel {
        self.level
    }

    /// URL the display should currently load.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_exhausted(&self) -> bool {
        self.level.is_terminal()
    }

    /// Record a load failure of the current URL and move to the next level.
    pub fn on_failure(&mut self) -> &str {
        let (level, url) = advance(self.env, self.level, &self.source);
        self.level = level;
        self.url = url;
        &self.url
    }

    /// Switch to a new source. Only a different source resets to level 0;
    /// re-supplying the current one keeps the cascade where it is.
    pub fn set_source(&mut self, source: &str, params: &str) -> &str {
        if source != self.source {
            *self = Self::new(self.env, source, params);
        }
        &self.url
    }
}
