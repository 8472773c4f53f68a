//! Trusted-host allow-list (the URL Classifier).
//!
//! Only URLs on an allow-listed object-storage host, or one of its
//! subdomains, are eligible for rewriting. Everything else passes through
//! untouched.

mod key;

pub use key::HostKey;

/// Allow-list of storage hostnames eligible for transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedHosts {
    hosts: Vec<String>,
}

impl TrustedHosts {
    /// Build an allow-list; entries are trimmed, lowercased and deduplicated.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for host in hosts {
            let host = host.as_ref().trim().trim_end_matches('.').to_ascii_lowercase();
            if !host.is_empty() && !normalized.contains(&host) {
                normalized.push(host);
            }
        }
        Self { hosts: normalized }
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// True if `host` equals an allow-listed host or is a subdomain of one.
    pub fn trusts_host(&self, host: &str) -> bool {
        self.hosts.iter().any(|trusted| {
            host == trusted
                || host
                    .strip_suffix(trusted.as_str())
                    .is_some_and(|head| head.ends_with('.'))
        })
    }

    /// True if `url` is an absolute URL on a trusted host. Malformed URLs are
    /// simply not eligible.
    pub fn is_eligible(&self, url: &str) -> bool {
        match HostKey::from_url(url) {
            Ok(key) => self.trusts_host(&key.host),
            Err(_) => false,
        }
    }
}
