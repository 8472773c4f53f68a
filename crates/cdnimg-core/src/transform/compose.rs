//! Secure URL Composer.

use crate::error::{PathError, TransformError};
use crate::host_policy::{HostKey, TrustedHosts};
use crate::url_model::{
    extract_original_path, has_existing_transformation, validate_path, RawUrl, TRANSFORM_PREFIX,
};

use super::params::parse_params;

/// Build `origin/cdn-cgi/image/<params>/<path>` for an eligible source.
///
/// Returns `source` unchanged when it is unparseable, not on a trusted
/// host, when `params` is empty, or when it already carries a transform
/// segment. The last check runs before anything is composed, so a second
/// transform segment can never be appended.
///
/// The origin is copied from `source` as written (case, port, userinfo),
/// so [`extract_original_path`] gives back exactly the input.
///
/// Fails with `InvalidParams` for params outside the token grammar and
/// `InvalidPath` when the source path does not validate. An already
/// transformed source is only checked for traversal; a malformed embedded
/// params segment is left alone.
pub fn compose_url(
    hosts: &TrustedHosts,
    source: &str,
    params: &str,
) -> Result<String, TransformError> {
    let key = match HostKey::from_url(source) {
        Ok(key) => key,
        Err(err) => {
            tracing::debug!(%err, "source not parseable, passing through");
            return Ok(source.to_string());
        }
    };
    if !hosts.trusts_host(&key.host) {
        tracing::debug!(host = %key.host, "host not trusted, passing through");
        return Ok(source.to_string());
    }
    if params.is_empty() {
        return Ok(source.to_string());
    }
    parse_params(params)?;

    if has_existing_transformation(source) {
        reject_traversal_in(&extract_original_path(source))?;
        tracing::debug!(source, "already transformed, leaving unchanged");
        return Ok(source.to_string());
    }

    let raw = RawUrl::split(source);
    let path = validate_path(raw.path)?;
    Ok(format!(
        "{}/{}/{}/{}{}",
        raw.origin,
        TRANSFORM_PREFIX,
        params,
        path,
        raw.suffix
    ))
}

fn reject_traversal_in(url: &str) -> Result<(), TransformError> {
    match validate_path(RawUrl::split(url).path) {
        Err(err @ PathError::PathTraversal(_)) => Err(err.into()),
        Ok(_) | Err(PathError::EmptyPath) => Ok(()),
    }
}
