//! Adapters for the listener subsystem.

pub mod dispatch;
