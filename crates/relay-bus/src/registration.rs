//! Receiver registration handles.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::bus::BroadcastBus;

/// Unique identifier for a registered receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(Uuid);

impl RegistrationId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Owned handle to one receiver registration.
///
/// The registration is released on [`RegistrationGuard::release`] or on
/// drop, whichever comes first, so the bus-level resource cannot leak
/// across any exit path. Release is idempotent.
pub struct RegistrationGuard {
    bus: Arc<BroadcastBus>,
    id: Option<RegistrationId>,
}

impl RegistrationGuard {
    /// Wrap an existing registration.
    #[must_use]
    pub fn new(bus: Arc<BroadcastBus>, id: RegistrationId) -> Self {
        Self { bus, id: Some(id) }
    }

    /// The registration id, while still held.
    #[must_use]
    pub fn id(&self) -> Option<RegistrationId> {
        self.id
    }

    /// Deregister now. Calling again, or dropping afterwards, is a no-op.
    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.bus.deregister(id);
            debug!(id = %id, "Registration released");
        }
    }
}

impl Drop for RegistrationGuard {
    fn drop(&mut self) {
        self.release();
    }
}
