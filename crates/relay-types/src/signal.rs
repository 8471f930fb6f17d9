//! Inbound notification signals as delivered by the platform.

use serde::{Deserialize, Serialize};

/// Payload of a notification-posted signal.
///
/// Text fields mirror the platform extras and may each be absent;
/// normalization to empty strings happens during event extraction, not
/// here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationPosted {
    /// Package identifier of the posting application.
    pub package: String,
    /// Short headline (`android.title` extra).
    pub title: Option<String>,
    /// Short body (`android.text` extra).
    pub text: Option<String>,
    /// Expanded long-form body (`android.bigText` extra).
    pub big_text: Option<String>,
    /// Platform-assigned post time, milliseconds since epoch.
    pub post_time_ms: i64,
}

/// A notification lifecycle signal from the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationSignal {
    /// A notification was posted.
    Posted(NotificationPosted),
    /// A notification was withdrawn. Accepted and ignored.
    Removed {
        /// Package identifier of the withdrawing application.
        package: String,
    },
}

impl NotificationSignal {
    /// Get the dispatch kind for this signal.
    #[must_use]
    pub const fn kind(&self) -> SignalKind {
        match self {
            Self::Posted(_) => SignalKind::Posted,
            Self::Removed { .. } => SignalKind::Removed,
        }
    }
}

/// Signal kinds, used as dispatch-table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Notification-posted signal.
    Posted,
    /// Notification-removed signal.
    Removed,
}
