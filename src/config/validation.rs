//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, block sizes > 0)
//! - Check the bind address and upstream URL parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidUpstreamUrl(String),
    ZeroUpstreamTimeout,
    ZeroSlowResponseDelay,
    ZeroLeakInterval,
    ZeroLeakBlockSize,
    ZeroStressIterations,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address: {}", addr)
            }
            ValidationError::InvalidUpstreamUrl(url) => {
                write!(f, "invalid upstream url: {}", url)
            }
            ValidationError::ZeroUpstreamTimeout => {
                write!(f, "upstream.timeout_secs must be > 0")
            }
            ValidationError::ZeroSlowResponseDelay => {
                write!(f, "fault.slow_response_delay_ms must be > 0")
            }
            ValidationError::ZeroLeakInterval => {
                write!(f, "fault.leak_interval_ms must be > 0")
            }
            ValidationError::ZeroLeakBlockSize => {
                write!(f, "fault.leak_block_bytes must be > 0")
            }
            ValidationError::ZeroStressIterations => {
                write!(f, "fault.stress_iterations must be > 0")
            }
        }
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if url::Url::parse(&config.upstream.url).is_err() {
        errors.push(ValidationError::InvalidUpstreamUrl(
            config.upstream.url.clone(),
        ));
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroUpstreamTimeout);
    }
    if config.fault.slow_response_delay_ms == 0 {
        errors.push(ValidationError::ZeroSlowResponseDelay);
    }
    if config.fault.leak_interval_ms == 0 {
        errors.push(ValidationError::ZeroLeakInterval);
    }
    if config.fault.leak_block_bytes == 0 {
        errors.push(ValidationError::ZeroLeakBlockSize);
    }
    if config.fault.stress_iterations == 0 {
        errors.push(ValidationError::ZeroStressIterations);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
