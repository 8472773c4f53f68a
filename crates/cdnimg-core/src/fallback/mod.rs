//! Runtime fallback for images that fail to load.

mod cascade;
mod level;

pub use cascade::{advance, initial, reset, CascadeEnv, FallbackCascade};
pub use level::FallbackLevel;
