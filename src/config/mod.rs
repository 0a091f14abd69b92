//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI/env overrides (port, initial mode)
//!     → ServiceConfig (validated, immutable)
//!     → shared with subsystems at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; runtime behavior changes go through
//!   the control endpoints, not config reload
//! - All fields have defaults to allow minimal (or absent) configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{FaultConfig, ListenerConfig, ServiceConfig, UpstreamConfig};
