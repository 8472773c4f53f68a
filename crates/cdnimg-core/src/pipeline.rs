//! Facade used by display collaborators.
//!
//! Bundles the allow-list, placeholder, slow-network policy and a network
//! quality source, so callers only deal in presets and source URLs.

use std::sync::Arc;

use crate::config::CdnConfig;
use crate::error::TransformError;
use crate::fallback::{CascadeEnv, FallbackCascade};
use crate::host_policy::TrustedHosts;
use crate::network::{NetworkQuality, QualitySource};
use crate::transform::{build_params_with, compose_url, ConstrainedPolicy, ParamOverrides, TransformPreset};

pub struct ImagePipeline {
    env: CascadeEnv,
    policy: ConstrainedPolicy,
    network: Arc<dyn QualitySource>,
}

impl ImagePipeline {
    pub fn new(
        hosts: TrustedHosts,
        placeholder: impl Into<String>,
        network: Arc<dyn QualitySource>,
    ) -> Self {
        Self {
            env: CascadeEnv::new(hosts, placeholder),
            policy: ConstrainedPolicy::default(),
            network,
        }
    }

    pub fn from_config(cfg: &CdnConfig, network: Arc<dyn QualitySource>) -> Self {
        Self::new(cfg.trusted_hosts(), cfg.placeholder.clone(), network)
            .with_policy(cfg.constrained_policy())
    }

    pub fn with_policy(mut self, policy: ConstrainedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn hosts(&self) -> &TrustedHosts {
        &self.env.hosts
    }

    pub fn placeholder(&self) -> &str {
        &self.env.placeholder
    }

    pub fn env(&self) -> &CascadeEnv {
        &self.env
    }

    pub fn network_quality(&self) -> NetworkQuality {
        self.network.current_quality()
    }

    pub fn is_eligible(&self, url: &str) -> bool {
        self.env.hosts.is_eligible(url)
    }

    /// Params string for `preset`, adjusted for the current network.
    pub fn params_for(&self, preset: TransformPreset, overrides: Option<&ParamOverrides>) -> String {
        build_params_with(&self.policy, preset, overrides, Some(self.network_quality()))
    }

    pub fn compose(&self, source: &str, params: &str) -> Result<String, TransformError> {
        compose_url(&self.env.hosts, source, params)
    }

    /// URL to render for `source`. Never fails: a source that cannot be
    /// composed safely yields the placeholder.
    pub fn url_for(&self, source: &str, preset: TransformPreset) -> String {
        let params = self.params_for(preset, None);
        match self.compose(source, &params) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(source, %err, "image URL rejected, using placeholder");
                self.env.placeholder.clone()
            }
        }
    }

    /// Start a fallback cascade for one displayed image.
    pub fn cascade(&self, source: &str, preset: TransformPreset) -> FallbackCascade<'_> {
        let params = self.params_for(preset, None);
        FallbackCascade::new(&self.env, source, &params)
    }
}
