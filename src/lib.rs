//! Faultline: a controllable fault-injection HTTP service.
//!
//! Exercises operational tooling (health checks, alerting, load balancers)
//! against configurable failure behaviors. The runtime behavior of the HTTP
//! surface (health status, response latency, resource consumption) is
//! reconfigured live via control endpoints, without restarting the process.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                  FAULTLINE                    │
//!                    │                                               │
//!  GET /health ──────┼─▶ handlers ─▶ HealthEvaluator ─┐              │
//!  GET /        ─────┼─▶ handlers ───────────────────┐│              │
//!  GET /api/*   ─────┼─▶ handlers ─▶ UpstreamClient  ││              │
//!                    │                               ▼▼              │
//!  POST /api/*  ─────┼─▶ handlers ─▶ ModeController ─▶ FaultState    │
//!                    │                    │            ▲             │
//!                    │                    └─ spawns ───┘             │
//!                    │                   leak tickers (1/enable)     │
//!                    │                                               │
//!                    │  config │ lifecycle │ observability           │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! This is not a production resilience system: nothing is retried, nothing
//! recovers, and two as-built quirks of the system it simulates are preserved
//! on purpose (see `fault::controller`).

// Core subsystems
pub mod config;
pub mod fault;
pub mod health;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
