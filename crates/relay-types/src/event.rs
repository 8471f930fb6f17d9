//! The normalized event produced by the notification listener.

use serde::{Deserialize, Serialize};

use crate::apps::SourceApp;

/// A matched financial-app notification, normalized for relay.
///
/// Built only for allow-listed sources; text fields are never absent,
/// an empty string standing in for missing platform extras. Events are
/// transient: serialized into a broadcast, converted to a
/// [`crate::TransactionRecord`] on delivery, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// The originating application.
    pub source: SourceApp,
    /// Notification headline, `""` when absent.
    pub title: String,
    /// Notification body, preferring the expanded form. `""` when absent.
    pub content: String,
    /// Platform-assigned post time, milliseconds since epoch.
    pub timestamp_ms: i64,
}
