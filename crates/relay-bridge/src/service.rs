//! The subscription bridge state machine.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use relay_bus::{Broadcast, BroadcastBus, RegistrationGuard, RELAY_ACTION};
use relay_types::TransactionRecord;

use crate::capability::PlatformCaps;
use crate::errors::BridgeError;
use crate::stream::TransactionStream;

/// Bridge state: Idle holds nothing, Listening owns the registration.
enum BridgeState {
    Idle,
    Listening {
        /// Owned bus registration; dropping it deregisters.
        _guard: RegistrationGuard,
        /// Sender half of the subscriber channel, used to detect a
        /// subscriber that vanished without detaching.
        sender: mpsc::UnboundedSender<TransactionRecord>,
    },
}

/// Bridges relay broadcasts into a single-subscriber outward stream.
///
/// The bus registration is the one shared mutable resource; it is owned
/// exclusively by this bridge and mutated only by the attach/detach
/// transitions, under the state lock.
pub struct SubscriptionBridge {
    bus: Arc<BroadcastBus>,
    caps: PlatformCaps,
    state: Mutex<BridgeState>,
}

impl SubscriptionBridge {
    /// Create a bridge over the given bus, initially Idle.
    #[must_use]
    pub fn new(bus: Arc<BroadcastBus>, caps: PlatformCaps) -> Self {
        Self {
            bus,
            caps,
            state: Mutex::new(BridgeState::Idle),
        }
    }

    /// Attach the subscriber: Idle → Listening.
    ///
    /// Registers one bus receiver for [`RELAY_ACTION`] under the
    /// capability-resolved registration mode and returns the outward
    /// stream. A second attach while a live subscriber exists is
    /// rejected; a stale registration left by a subscriber that vanished
    /// without detaching is released and replaced.
    pub fn attach(&self) -> Result<TransactionStream, BridgeError> {
        let mut state = self.state.lock();

        if let BridgeState::Listening { sender, .. } = &*state {
            if !sender.is_closed() {
                return Err(BridgeError::SubscriberActive);
            }
            warn!("Stale registration found on attach; releasing");
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let mode = self.caps.registration_mode();

        let forward = tx.clone();
        let id = self.bus.register(
            RELAY_ACTION,
            mode,
            Arc::new(move |broadcast: &Broadcast| {
                let record = TransactionRecord::from(broadcast.event.clone());
                // Non-blocking forward; a vanished subscriber is a drop,
                // not an error.
                if forward.send(record).is_err() {
                    warn!("Record dropped (subscriber gone)");
                }
            }),
        );

        // Replacing the state drops any stale guard, deregistering it.
        *state = BridgeState::Listening {
            _guard: RegistrationGuard::new(Arc::clone(&self.bus), id),
            sender: tx,
        };

        debug!(mode = ?mode, "Subscriber attached");
        Ok(TransactionStream::new(rx))
    }

    /// Detach the subscriber: Listening → Idle.
    ///
    /// Synchronously releases the bus registration, so no further events
    /// are delivered once this returns, and closes the stream. Idempotent:
    /// detaching while Idle is a no-op.
    pub fn detach(&self) {
        let mut state = self.state.lock();
        if matches!(*state, BridgeState::Idle) {
            return;
        }

        // Dropping the old state releases the guard and the sender.
        *state = BridgeState::Idle;
        debug!("Subscriber detached");
    }

    /// Whether a registration is currently held.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        matches!(*self.state.lock(), BridgeState::Listening { .. })
    }
}
