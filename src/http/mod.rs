//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum router, middleware)
//!     → handlers.rs (read state via evaluator / mutate via controller)
//!     → response.rs (timestamped envelope)
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
