//! # Notification Filter & Publisher Subsystem
//!
//! Observes every notification signal the platform delivers, filters to
//! the fixed financial-app allow-list, extracts a normalized event, and
//! publishes it on the relay bus scoped to the owning application.
//!
//! ## Architecture
//!
//! - **Domain**: pure extraction policy (allow-list filter, field
//!   normalization)
//! - **Ports**: inbound [`NotificationObserver`] API and outbound
//!   [`BroadcastPublisher`] SPI
//! - **Adapters**: signal dispatch table keyed by [`relay_types::SignalKind`]
//! - **Service**: [`ListenerService`] orchestration
//!
//! Filtering never errs: unrecognized packages and missing text fields
//! are normal silent paths, not failures.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::dispatch::SignalDispatcher;
pub use ports::inbound::NotificationObserver;
pub use ports::outbound::BroadcastPublisher;
pub use service::ListenerService;
