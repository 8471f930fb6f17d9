//! # Notification Relay Test Suite
//!
//! Unified test crate containing the cross-subsystem scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Listener → bus → bridge end-to-end flows
//!     └── relay_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p relay-tests
//!
//! # By category
//! cargo test -p relay-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;

/// Install the test log subscriber. Safe to call from every test; only
/// the first call wins.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
