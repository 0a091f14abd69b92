//! Outbound dependency subsystem.
//!
//! Single collaborator: the external JSON endpoint proxied by GET /api/data.

pub mod client;

pub use client::{UpstreamClient, UpstreamError};
