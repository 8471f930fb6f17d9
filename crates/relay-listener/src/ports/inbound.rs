//! Inbound port (API) for the listener subsystem.

use relay_types::NotificationPosted;

/// Primary API for platform notification signals.
///
/// The platform drives these callbacks; nothing here blocks, and nothing
/// here fails. Unrecognized packages and malformed payloads are silent
/// discards.
pub trait NotificationObserver: Send + Sync {
    /// Handle a notification-posted signal.
    fn handle_posted(&self, posted: NotificationPosted);

    /// Handle a notification-removed signal.
    ///
    /// Intentionally a no-op: the consumer cares about arrival only.
    fn handle_removed(&self, package: &str);
}
