//! Outbound port (SPI) for the listener subsystem.

use relay_bus::Broadcast;

/// Broadcast publication interface.
///
/// Implemented by the relay bus in production; tests substitute a
/// recording publisher.
pub trait BroadcastPublisher: Send + Sync {
    /// Publish a broadcast, returning the number of receivers reached.
    ///
    /// Zero receivers is not an error; the broadcast is simply dropped.
    fn publish(&self, broadcast: Broadcast) -> usize;
}

impl BroadcastPublisher for relay_bus::BroadcastBus {
    fn publish(&self, broadcast: Broadcast) -> usize {
        relay_bus::BroadcastBus::publish(self, &broadcast)
    }
}
