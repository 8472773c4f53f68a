//! Path validation before any transformation URL is built.

use std::fmt;

use percent_encoding::percent_decode_str;

use crate::error::PathError;

/// A path that passed [`validate_path`], in canonical relative form
/// (exactly one leading slash removed, percent-encoding untouched).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidPath(String);

impl ValidPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates an image path and returns its canonical relative form.
///
/// The path is percent-decoded exactly once and every check runs on that
/// decoded string, so `..` and `%2e%2e` always get the same answer. It is
/// rejected with `PathTraversal` when the decoded path:
/// - contains `..` anywhere,
/// - has a `.` segment (`/./` or a leading `./`; `\` counts as a separator),
/// - still contains `%2e%2e`, i.e. the raw path was encoded twice, or
/// - contains a separator that was percent-encoded in the raw path
///   (`%2f`, `%5c`), which would hide segments from prefix matching.
///
/// A path that is empty after removing one leading slash is `EmptyPath`.
pub fn validate_path(path: &str) -> Result<ValidPath, PathError> {
    let relative = path.strip_prefix('/').unwrap_or(path);
    if relative.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let decoded = percent_decode_str(relative).decode_utf8_lossy();
    if decoded.contains("..")
        || has_dot_segment(&decoded)
        || has_encoded_dots(&decoded)
        || has_encoded_separator(relative)
    {
        tracing::warn!(path, "rejected image path with traversal sequence");
        return Err(PathError::PathTraversal(path.to_string()));
    }

    Ok(ValidPath(relative.to_string()))
}

fn has_encoded_dots(s: &str) -> bool {
    s.to_ascii_lowercase().contains("%2e%2e")
}

fn has_encoded_separator(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    lower.contains("%2f") || lower.contains("%5c")
}

fn has_dot_segment(decoded: &str) -> bool {
    decoded
        .split(|c: char| c == '/' || c == '\\')
        .any(|segment| segment == ".")
}
