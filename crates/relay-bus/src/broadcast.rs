//! Broadcast payloads and scoping types.

use serde::{Deserialize, Serialize};

use relay_types::NotificationEvent;

/// Where a broadcast originated relative to the owning application.
///
/// The listener always publishes with [`BroadcastOrigin::OwnApp`];
/// `External` models broadcasts arriving from other applications on
/// platforms where the receiver was registered unscoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroadcastOrigin {
    /// Published by a component of the owning application.
    OwnApp,
    /// Published by another application.
    External,
}

/// How a receiver was registered with the platform.
///
/// Resolved once from platform capabilities at registration time; the
/// scoped declaration exists only on newer platform levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationMode {
    /// Receiver declared not-exported: own-application broadcasts only.
    Restricted,
    /// Legacy unscoped registration: all origins admitted.
    Open,
}

impl RegistrationMode {
    /// Whether a broadcast with the given origin reaches this receiver.
    #[must_use]
    pub const fn admits(self, origin: BroadcastOrigin) -> bool {
        match self {
            Self::Restricted => matches!(origin, BroadcastOrigin::OwnApp),
            Self::Open => true,
        }
    }
}

/// A broadcast traveling over the bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Broadcast {
    /// Action name this broadcast is addressed to.
    pub action: String,
    /// Origin of the broadcast.
    pub origin: BroadcastOrigin,
    /// The relayed event.
    pub event: NotificationEvent,
}

impl Broadcast {
    /// Create an own-application broadcast under the given action.
    #[must_use]
    pub fn internal(action: impl Into<String>, event: NotificationEvent) -> Self {
        Self {
            action: action.into(),
            origin: BroadcastOrigin::OwnApp,
            event,
        }
    }
}
