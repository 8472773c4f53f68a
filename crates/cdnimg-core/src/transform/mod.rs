//! Transformation parameters, presets and the secure URL composer.

mod build;
mod compose;
mod params;
mod preset;

pub use build::{
    build_params, build_params_with, resolve_params, resolve_params_with, ConstrainedPolicy,
};
pub use compose::compose_url;
pub use params::{
    parse_params, Fit, ParamKey, ParamOverrides, ParamToken, Quality, TransformParams,
    MAX_DIMENSION,
};
pub use preset::TransformPreset;
