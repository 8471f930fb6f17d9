//! Bridge errors.

use thiserror::Error;

/// Errors surfaced by the subscription bridge.
///
/// The taxonomy is intentionally minimal: filter mismatches, missing
/// subscribers, and double-detach are normal silent paths, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A subscriber is already attached; detach it first.
    #[error("a subscriber is already attached")]
    SubscriberActive,
}
