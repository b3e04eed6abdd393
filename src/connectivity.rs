//! Connectivity monitoring
//!
//! The engine treats network availability as an external collaborator that
//! answers a single boolean question. How that answer is produced (OS
//! callbacks, probe requests, airplane-mode switches) is out of scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Reports whether network access is currently available
pub trait ConnectivityMonitor: Send + Sync {
    /// True if a fetch attempt is worth making right now
    fn has_connection(&self) -> bool;
}

/// A monitor that always reports connectivity
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

impl ConnectivityMonitor for AlwaysOnline {
    fn has_connection(&self) -> bool {
        true
    }
}

/// A monitor backed by a shared atomic flag.
///
/// Useful for tests and for hosts that already track connectivity and just
/// need to feed the current value in.
#[derive(Debug, Clone, Default)]
pub struct SharedFlag {
    online: Arc<AtomicBool>,
}

impl SharedFlag {
    /// Create a flag with an initial state
    pub fn new(online: bool) -> Self {
        Self {
            online: Arc::new(AtomicBool::new(online)),
        }
    }

    /// Update the connectivity state
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }
}

impl ConnectivityMonitor for SharedFlag {
    fn has_connection(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}
