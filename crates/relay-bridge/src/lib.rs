//! # Subscription Bridge Subsystem
//!
//! Exposes the broadcasts published by the notification listener as a
//! single outward event stream with at-most-one-active-subscriber
//! semantics, managing the lifecycle of the underlying bus registration.
//!
//! ## State Machine
//!
//! ```text
//!           attach()
//!   Idle ─────────────▶ Listening
//!    ▲                      │
//!    └──────────────────────┘
//!           detach()
//! ```
//!
//! Attach registers exactly one bus receiver under the capability-
//! resolved [`relay_bus::RegistrationMode`]; detach releases it
//! synchronously and is idempotent. There is no terminal state.

pub mod capability;
pub mod errors;
pub mod service;
pub mod stream;

pub use capability::{PlatformCaps, SCOPED_RECEIVER_MIN_API};
pub use errors::BridgeError;
pub use service::SubscriptionBridge;
pub use stream::TransactionStream;
