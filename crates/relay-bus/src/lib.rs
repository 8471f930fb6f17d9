//! # Relay Bus - Application-Internal Broadcast Mechanism
//!
//! Carries normalized notification events from the listener subsystem to
//! the subscription bridge inside one application.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │   Listener   │                    │    Bridge    │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │ BroadcastBus │ ─────────┘
//!                  └──────────────┘  register()
//! ```
//!
//! ## Delivery Model
//!
//! Delivery is synchronous: `publish` invokes every matching receiver on
//! the caller's thread before returning. There is no queue, no worker
//! task, and no ordering beyond the caller's own publish order.
//!
//! ## Scoping
//!
//! Broadcasts carry an origin and receivers carry a registration mode.
//! A [`RegistrationMode::Restricted`] receiver never sees broadcasts
//! originating outside the owning application.

pub mod broadcast;
pub mod bus;
pub mod registration;

pub use broadcast::{Broadcast, BroadcastOrigin, RegistrationMode};
pub use bus::BroadcastBus;
pub use registration::{RegistrationGuard, RegistrationId};

/// Action name identifying the transaction notification broadcast.
pub const RELAY_ACTION: &str = "io.expensetracker.relay.NOTIFICATION_RECEIVED";
