//! Observability subsystem.
//!
//! Structured `tracing` events only; there is no metrics endpoint.

pub mod logging;
