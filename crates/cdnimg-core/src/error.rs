//! Validation error types for path and parameter checks.
//!
//! All of these are local, deterministic failures: a path or params string
//! that fails once will always fail, so none of them is retryable.

use thiserror::Error;

/// Path Validator failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Path contains `..`, a bare `.` segment, or an encoded equivalent.
    #[error("path traversal rejected: {0:?}")]
    PathTraversal(String),
    /// Nothing left after stripping the leading slash.
    #[error("empty image path")]
    EmptyPath,
}

/// Secure URL Composer failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Params string is outside the `key=value(,key=value)*` token grammar.
    #[error("invalid transform params {params:?}: {reason}")]
    InvalidParams { params: String, reason: String },
    /// Source path failed validation.
    #[error("invalid image path: {0}")]
    InvalidPath(#[from] PathError),
    /// Source could not be parsed as an absolute URL.
    #[error("malformed URL: {0:?}")]
    MalformedUrl(String),
}

impl TransformError {
    pub(crate) fn invalid_params(params: &str, reason: impl Into<String>) -> Self {
        TransformError::InvalidParams {
            params: params.to_string(),
            reason: reason.into(),
        }
    }
}

/// A name on the command line or in config did not match any known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?} (expected one of: {expected})")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
