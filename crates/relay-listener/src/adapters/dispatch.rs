//! Signal dispatch table.
//!
//! Platform callbacks arrive as [`NotificationSignal`] values; routing is
//! an explicit table keyed by [`SignalKind`] rather than method overrides
//! on a platform base class. Each handler is a pure function from signal
//! payload to an optional side effect (the broadcast to publish); the
//! service executes the side effect through its outbound port.

use std::collections::HashMap;

use relay_bus::{Broadcast, RELAY_ACTION};
use relay_types::{NotificationSignal, SignalKind};

use crate::domain::extraction;

/// Pure handler: signal in, optional broadcast out.
pub type SignalHandler = fn(&NotificationSignal) -> Option<Broadcast>;

/// Dispatch table routing signals to their handlers.
pub struct SignalDispatcher {
    handlers: HashMap<SignalKind, SignalHandler>,
}

impl SignalDispatcher {
    /// Build the table with the standard handlers installed.
    #[must_use]
    pub fn new() -> Self {
        let mut handlers: HashMap<SignalKind, SignalHandler> = HashMap::new();
        handlers.insert(SignalKind::Posted, on_posted);
        handlers.insert(SignalKind::Removed, on_removed);
        Self { handlers }
    }

    /// Replace the handler for one signal kind.
    pub fn register(&mut self, kind: SignalKind, handler: SignalHandler) {
        self.handlers.insert(kind, handler);
    }

    /// Route a signal to its handler.
    ///
    /// Signal kinds without a registered handler are dropped silently.
    #[must_use]
    pub fn dispatch(&self, signal: &NotificationSignal) -> Option<Broadcast> {
        self.handlers.get(&signal.kind())?(signal)
    }
}

impl Default for SignalDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Posted: filter against the allow-list and extract the event.
fn on_posted(signal: &NotificationSignal) -> Option<Broadcast> {
    let NotificationSignal::Posted(posted) = signal else {
        return None;
    };
    extraction::extract_event(posted).map(|event| Broadcast::internal(RELAY_ACTION, event))
}

/// Removed: arrival is all the consumer cares about.
fn on_removed(_signal: &NotificationSignal) -> Option<Broadcast> {
    None
}
