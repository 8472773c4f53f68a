//! Detecting and stripping existing transform segments.

use super::{find_prefix, RawUrl, PREFIX_SEGMENTS};

/// True if the URL path contains the transform prefix as whole segments.
pub fn has_existing_transformation(url: &str) -> bool {
    find_prefix(&RawUrl::split(url).segments()).is_some()
}

/// The parameter segment following the first transform prefix, if any.
///
/// Returns `None` both for untransformed URLs and for a prefix that has
/// nothing after it.
pub fn embedded_params(url: &str) -> Option<String> {
    let segments = RawUrl::split(url).segments();
    let at = find_prefix(&segments)?;
    segments
        .get(at + PREFIX_SEGMENTS.len())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Removes transform segments, returning `origin + remaining path`.
///
/// Each occurrence of the prefix is removed together with the one
/// parameter segment after it; all other segments are kept verbatim, so
/// nested directories survive. A URL without a transform segment is
/// returned unchanged. Query and fragment are carried over as-is.
pub fn extract_original_path(url: &str) -> String {
    let raw = RawUrl::split(url);
    let mut segments = raw.segments();
    if find_prefix(&segments).is_none() {
        return url.to_string();
    }

    while let Some(at) = find_prefix(&segments) {
        let end = (at + PREFIX_SEGMENTS.len() + 1).min(segments.len());
        segments.drain(at..end);
    }

    let mut path = segments.join("/");
    if !raw.origin.is_empty() && !path.starts_with('/') {
        path.insert(0, '/');
    }
    format!("{}{}{}", raw.origin, path, raw.suffix)
}
