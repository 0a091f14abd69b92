//! Observability subsystem.

pub mod logging;
