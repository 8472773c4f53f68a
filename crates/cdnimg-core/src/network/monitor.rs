//! Cached, injectable network quality signal.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use super::quality::{ConnectionInfo, NetworkQuality};

/// Anything that can report the current network quality.
///
/// Builders and pipelines take this instead of reading a global, so tests
/// can pass a fixed `NetworkQuality` directly.
pub trait QualitySource: Send + Sync {
    fn current_quality(&self) -> NetworkQuality;
}

impl QualitySource for NetworkQuality {
    fn current_quality(&self) -> NetworkQuality {
        *self
    }
}

impl<T: QualitySource + ?Sized> QualitySource for Arc<T> {
    fn current_quality(&self) -> NetworkQuality {
        (**self).current_quality()
    }
}

/// Last-read network quality, refreshed on change notifications.
///
/// One writer (whoever receives the environment's change events) and any
/// number of readers. The value lives in an atomic, so reads never block.
#[derive(Debug, Default)]
pub struct NetworkMonitor {
    cached: AtomicU8,
}

impl NetworkMonitor {
    /// A monitor with no signal yet (`Unknown`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(quality: NetworkQuality) -> Self {
        Self {
            cached: AtomicU8::new(quality.to_u8()),
        }
    }

    /// Handle a connection change notification. `None` means the
    /// environment exposes no connection info.
    pub fn on_change(&self, info: Option<&ConnectionInfo>) -> NetworkQuality {
        let quality = info.map_or(NetworkQuality::Unknown, NetworkQuality::from_connection);
        self.set(quality);
        quality
    }

    /// Store a quality directly (e.g. restored from disk).
    pub fn set(&self, quality: NetworkQuality) {
        let previous = NetworkQuality::from_u8(self.cached.swap(quality.to_u8(), Ordering::Release));
        if previous != quality {
            tracing::debug!(from = %previous, to = %quality, "network quality changed");
        }
    }

    pub fn current_quality(&self) -> NetworkQuality {
        NetworkQuality::from_u8(self.cached.load(Ordering::Acquire))
    }
}

impl QualitySource for NetworkMonitor {
    fn current_quality(&self) -> NetworkQuality {
        NetworkMonitor::current_quality(self)
    }
}
