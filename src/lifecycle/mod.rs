//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup: load config → validate → build server → serve
//! Shutdown: SIGTERM/SIGINT → broadcast → server drains → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
