//! Listener service orchestration.

use std::sync::Arc;

use tracing::debug;

use relay_types::{NotificationPosted, NotificationSignal};

use crate::adapters::dispatch::SignalDispatcher;
use crate::ports::inbound::NotificationObserver;
use crate::ports::outbound::BroadcastPublisher;

/// The Notification Filter & Publisher service.
///
/// Routes each platform signal through the dispatch table and publishes
/// the resulting broadcast, if any, through the outbound port. All
/// processing is synchronous within the platform's callback invocation.
pub struct ListenerService<P: BroadcastPublisher> {
    publisher: Arc<P>,
    dispatcher: SignalDispatcher,
}

impl<P: BroadcastPublisher> ListenerService<P> {
    /// Create a service publishing through the given port.
    #[must_use]
    pub fn new(publisher: Arc<P>) -> Self {
        Self {
            publisher,
            dispatcher: SignalDispatcher::new(),
        }
    }

    /// Create a service with a custom dispatch table.
    #[must_use]
    pub fn with_dispatcher(publisher: Arc<P>, dispatcher: SignalDispatcher) -> Self {
        Self {
            publisher,
            dispatcher,
        }
    }

    /// Process one signal; returns the number of receivers reached.
    ///
    /// Filter mismatches and removal signals reach zero receivers by
    /// definition, with no side effects.
    pub fn handle_signal(&self, signal: &NotificationSignal) -> usize {
        let Some(broadcast) = self.dispatcher.dispatch(signal) else {
            return 0;
        };

        debug!(
            source = ?broadcast.event.source,
            title = %broadcast.event.title,
            "Transaction notification matched"
        );
        self.publisher.publish(broadcast)
    }
}

impl<P: BroadcastPublisher> NotificationObserver for ListenerService<P> {
    fn handle_posted(&self, posted: NotificationPosted) {
        self.handle_signal(&NotificationSignal::Posted(posted));
    }

    fn handle_removed(&self, package: &str) {
        self.handle_signal(&NotificationSignal::Removed {
            package: package.to_string(),
        });
    }
}
