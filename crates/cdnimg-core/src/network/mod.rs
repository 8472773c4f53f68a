//! Network-Quality Adapter.
//!
//! The only process-wide mutable state in the crate: the last observed
//! network quality, written on change notifications and read by the
//! parameter builder.

mod monitor;
mod persist;
mod quality;

pub use monitor::{NetworkMonitor, QualitySource};
pub use persist::PersistedNetwork;
pub use quality::{ConnectionInfo, NetworkQuality};
