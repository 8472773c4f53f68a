//! URL modeling: raw URL splitting, path validation and transform inspection.
//!
//! Host checks go through `url::Url`, but the path is always taken from the
//! raw input. `Url::parse` resolves `..` and `%2e%2e` segments while parsing,
//! which would hide exactly the traversal attempts we need to reject.

mod inspect;
mod path;

pub use inspect::{embedded_params, extract_original_path, has_existing_transformation};
pub use path::{validate_path, ValidPath};

/// Literal path marker for CDN transformation instructions.
pub const TRANSFORM_PREFIX: &str = "cdn-cgi/image";

/// `TRANSFORM_PREFIX` as path segments, matched exactly and in order.
pub(crate) const PREFIX_SEGMENTS: [&str; 2] = ["cdn-cgi", "image"];

/// A URL string cut into `origin | path | suffix` without any normalisation.
///
/// - `origin` is `scheme://authority` (empty for relative references)
/// - `path` runs up to the first `?` or `#`
/// - `suffix` is the query and fragment, including their leading delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawUrl<'a> {
    pub origin: &'a str,
    pub path: &'a str,
    pub suffix: &'a str,
}

impl<'a> RawUrl<'a> {
    pub(crate) fn split(url: &'a str) -> Self {
        let origin_end = match scheme_len(url) {
            Some(len) => {
                let start = len + "://".len();
                url[start..]
                    .find(|c: char| matches!(c, '/' | '\\' | '?' | '#'))
                    .map_or(url.len(), |i| start + i)
            }
            None => 0,
        };
        let rest = &url[origin_end..];
        let path_end = rest.find(|c: char| matches!(c, '?' | '#')).unwrap_or(rest.len());
        Self {
            origin: &url[..origin_end],
            path: &rest[..path_end],
            suffix: &rest[path_end..],
        }
    }

    /// Path split on `/`, keeping empty segments so joining restores it verbatim.
    pub(crate) fn segments(&self) -> Vec<&'a str> {
        self.path.split('/').collect()
    }
}

/// Position of the transform prefix within a segment list.
pub(crate) fn find_prefix(segments: &[&str]) -> Option<usize> {
    segments
        .windows(PREFIX_SEGMENTS.len())
        .position(|w| w[0] == PREFIX_SEGMENTS[0] && w[1] == PREFIX_SEGMENTS[1])
}

/// Length of a leading `scheme` if the URL starts with `scheme://`.
fn scheme_len(url: &str) -> Option<usize> {
    let idx = url.find("://")?;
    let scheme = &url[..idx];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(idx)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_absolute_url() {
        let raw = RawUrl::split("https://img.example/a/b.jpg?v=2#top");
        assert_eq!(raw.origin, "https://img.example");
        assert_eq!(raw.path, "/a/b.jpg");
        assert_eq!(raw.suffix, "?v=2#top");
    }

    #[test]
    fn split_keeps_traversal_segments() {
        let raw = RawUrl::split("https://img.example/a/../secret.jpg");
        assert_eq!(raw.path, "/a/../secret.jpg");
    }

    #[test]
    fn split_origin_only() {
        let raw = RawUrl::split("https://img.example");
        assert_eq!(raw.origin, "https://img.example");
        assert_eq!(raw.path, "");
        assert_eq!(raw.suffix, "");
    }

    #[test]
    fn split_relative_reference() {
        let raw = RawUrl::split("/cdn-cgi/image/w=1/x.jpg");
        assert_eq!(raw.origin, "");
        assert_eq!(raw.path, "/cdn-cgi/image/w=1/x.jpg");
    }

    #[test]
    fn split_stops_authority_at_backslash() {
        let raw = RawUrl::split("https://img.example\\a\\b.jpg");
        assert_eq!(raw.origin, "https://img.example");
    }

    #[test]
    fn find_prefix_requires_exact_segments() {
        assert_eq!(find_prefix(&["", "cdn-cgi", "image", "w=1", "x.jpg"]), Some(1));
        assert_eq!(find_prefix(&["", "cdn-cgi", "images", "x.jpg"]), None);
        assert_eq!(find_prefix(&["", "my-cdn-cgi", "image", "x.jpg"]), None);
        assert_eq!(find_prefix(&["", "image", "cdn-cgi"]), None);
    }
}
