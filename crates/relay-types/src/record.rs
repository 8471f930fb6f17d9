//! The outward stream element handed to the consumer layer.

use serde::{Deserialize, Serialize};

use crate::event::NotificationEvent;

/// One element of the consumer-facing event stream.
///
/// Serializes as the field-name → value mapping the consumer runtime
/// expects: `package`, `title`, `text`, `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Package identifier of the source application.
    pub package: String,
    /// Notification headline.
    pub title: String,
    /// Notification body (expanded form when the source supplied one).
    pub text: String,
    /// Post time, milliseconds since epoch.
    pub timestamp: i64,
}

impl From<NotificationEvent> for TransactionRecord {
    fn from(event: NotificationEvent) -> Self {
        Self {
            package: event.source.package_id().to_string(),
            title: event.title,
            text: event.content,
            timestamp: event.timestamp_ms,
        }
    }
}
