//! Safe, idempotent CDN image URL transformation.
//!
//! Turns a source image URL into `origin/cdn-cgi/image/<params>/<path>` when
//! the host is trusted and the path is safe, never nests a second transform
//! segment, and walks a fallback cascade down to a placeholder when the
//! rendered variant fails to load.

pub mod config;
pub mod error;
pub mod fallback;
pub mod host_policy;
pub mod logging;
pub mod network;
pub mod pipeline;
pub mod transform;
pub mod url_model;

pub use error::{PathError, TransformError};
pub use fallback::{FallbackCascade, FallbackLevel};
pub use host_policy::TrustedHosts;
pub use network::{NetworkMonitor, NetworkQuality, QualitySource};
pub use pipeline::ImagePipeline;
pub use transform::{build_params, compose_url, ParamOverrides, TransformPreset};
pub use url_model::{extract_original_path, has_existing_transformation, validate_path};
