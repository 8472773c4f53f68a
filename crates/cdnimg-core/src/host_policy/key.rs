use url::Url;

use crate::error::TransformError;

/// Origin of a parsed source URL, reduced to `(scheme, host, port)`.
///
/// The host is lowercased with any trailing root dot removed, so allow-list
/// comparisons are plain string checks. `port` is `None` when it is the
/// scheme's default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostKey {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
}

impl HostKey {
    /// Construct a host key from an absolute URL string.
    pub fn from_url(url: &str) -> Result<Self, TransformError> {
        let parsed = Url::parse(url).map_err(|_| TransformError::MalformedUrl(url.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| TransformError::MalformedUrl(url.to_string()))?
            .trim_end_matches('.')
            .to_ascii_lowercase();
        if host.is_empty() {
            return Err(TransformError::MalformedUrl(url.to_string()));
        }

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host,
            port: parsed.port(),
        })
    }
}
