//! Pure extraction policy for the listener subsystem.

pub mod extraction;

pub use extraction::extract_event;
