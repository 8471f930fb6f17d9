//! The in-process broadcast bus.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::broadcast::{Broadcast, RegistrationMode};
use crate::registration::RegistrationId;

/// Receiver callback invoked for each delivered broadcast.
pub type ReceiverFn = Arc<dyn Fn(&Broadcast) + Send + Sync>;

struct RegisteredReceiver {
    action: String,
    mode: RegistrationMode,
    handler: ReceiverFn,
}

/// In-process broadcast bus with synchronous delivery.
///
/// `publish` runs every matching receiver on the caller's thread before
/// returning; receivers therefore observe broadcasts in publish order.
/// Registration and deregistration may happen from receiver callbacks
/// without deadlocking: the receiver table lock is released before any
/// handler runs.
pub struct BroadcastBus {
    receivers: RwLock<HashMap<RegistrationId, RegisteredReceiver>>,

    /// Total broadcasts published (delivered or dropped).
    broadcasts_published: AtomicU64,
}

impl BroadcastBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            receivers: RwLock::new(HashMap::new()),
            broadcasts_published: AtomicU64::new(0),
        }
    }

    /// Install a receiver for one action under the given mode.
    ///
    /// Returns the id used to deregister it later. Prefer wrapping the id
    /// in a [`crate::RegistrationGuard`] so release happens on every exit
    /// path.
    pub fn register(
        &self,
        action: impl Into<String>,
        mode: RegistrationMode,
        handler: ReceiverFn,
    ) -> RegistrationId {
        let id = RegistrationId::new();
        let action = action.into();

        debug!(action = %action, mode = ?mode, id = %id, "Receiver registered");

        self.receivers.write().insert(
            id,
            RegisteredReceiver {
                action,
                mode,
                handler,
            },
        );
        id
    }

    /// Remove a receiver.
    ///
    /// Unknown ids are a no-op; returns whether a receiver was removed.
    pub fn deregister(&self, id: RegistrationId) -> bool {
        let removed = self.receivers.write().remove(&id);
        if removed.is_some() {
            debug!(id = %id, "Receiver deregistered");
        }
        removed.is_some()
    }

    /// Deliver a broadcast to every matching receiver.
    ///
    /// A receiver matches when its action equals the broadcast's action
    /// and its registration mode admits the broadcast's origin. Returns
    /// the number of receivers reached; zero receivers is a silent drop,
    /// not an error.
    pub fn publish(&self, broadcast: &Broadcast) -> usize {
        self.broadcasts_published.fetch_add(1, Ordering::Relaxed);

        // Snapshot matching handlers so delivery runs without the lock.
        let handlers: Vec<ReceiverFn> = {
            let receivers = self.receivers.read();
            receivers
                .values()
                .filter(|r| r.action == broadcast.action && r.mode.admits(broadcast.origin))
                .map(|r| Arc::clone(&r.handler))
                .collect()
        };

        if handlers.is_empty() {
            warn!(
                action = %broadcast.action,
                source = ?broadcast.event.source,
                "Broadcast dropped (no receivers)"
            );
            return 0;
        }

        for handler in &handlers {
            handler(broadcast);
        }

        debug!(
            action = %broadcast.action,
            source = ?broadcast.event.source,
            receivers = handlers.len(),
            "Broadcast delivered"
        );
        handlers.len()
    }

    /// Number of currently registered receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.receivers.read().len()
    }

    /// Total broadcasts published since creation.
    #[must_use]
    pub fn broadcasts_published(&self) -> u64 {
        self.broadcasts_published.load(Ordering::Relaxed)
    }
}

impl Default for BroadcastBus {
    fn default() -> Self {
        Self::new()
    }
}
