//! # Relay Types Crate
//!
//! Domain entities and signal payloads shared between the notification
//! listener and the subscription bridge.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a crate boundary
//!   is defined here.
//! - **Allow-list by construction**: a [`NotificationEvent`] can only name
//!   a [`SourceApp`] variant, so events for unrecognized applications are
//!   unrepresentable.
//! - **No nullable fields outward**: absent notification text normalizes
//!   to the empty string before an event is built.

pub mod apps;
pub mod event;
pub mod record;
pub mod signal;

pub use apps::SourceApp;
pub use event::NotificationEvent;
pub use record::TransactionRecord;
pub use signal::{NotificationPosted, NotificationSignal, SignalKind};
