//! Fault injection subsystem.
//!
//! # Data Flow
//! ```text
//! control request (POST /api/...)
//!     → controller.rs (validate-free apply, spawn tickers)
//!     → state.rs (one shared record, one mutex)
//!     → read back by handlers and the health evaluator per request
//! ```
//!
//! # Design Decisions
//! - `FaultState` is the only shared mutable resource in the process
//! - Only `ModeController` writes it; everything else reads
//! - Leak tickers are deliberately fire-and-forget (see controller.rs)

pub mod controller;
pub mod mode;
pub mod state;
pub mod stress;

pub use controller::ModeController;
pub use mode::FailureMode;
pub use state::FaultState;
