//! Allow-list filtering and field extraction.

use relay_types::{NotificationEvent, NotificationPosted, SourceApp};

/// Filter a posted notification and extract the normalized event.
///
/// Returns `None` for packages outside the allow-list; this is the
/// normal discard path, with no side effects. For allow-listed packages
/// the event always constructs: absent fields degrade to empty strings.
#[must_use]
pub fn extract_event(posted: &NotificationPosted) -> Option<NotificationEvent> {
    let source = SourceApp::from_package(&posted.package)?;

    Some(NotificationEvent {
        source,
        title: posted.title.clone().unwrap_or_default(),
        content: extract_content(posted),
        timestamp_ms: posted.post_time_ms,
    })
}

/// Body selection: expanded text when present and non-empty, else the
/// short text, else empty.
fn extract_content(posted: &NotificationPosted) -> String {
    match posted.big_text.as_deref() {
        Some(big) if !big.is_empty() => big.to_string(),
        _ => posted.text.clone().unwrap_or_default(),
    }
}
