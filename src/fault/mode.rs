//! Failure mode identifiers.
//!
//! # Design Decisions
//! - Modes are open strings, not a closed enum: the control surface accepts
//!   any value, and anything the health evaluator does not recognize degrades
//!   to the default (healthy) behavior
//! - Empty or absent input always resolves to `none`

use serde::{Deserialize, Serialize};
use std::fmt;

/// No fault injected; all endpoints behave normally.
pub const MODE_NONE: &str = "none";

/// Health endpoint fails immediately with 503.
pub const MODE_HEALTH_FAILURE: &str = "health_failure";

/// Health endpoint succeeds only after the configured delay.
pub const MODE_SLOW_RESPONSE: &str = "slow_response";

/// The currently selected failure mode. Always a defined, non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailureMode(String);

impl FailureMode {
    pub fn none() -> Self {
        Self(MODE_NONE.to_string())
    }

    /// Resolve a requested mode. Absent or empty input falls back to `none`;
    /// everything else is accepted verbatim, recognized or not.
    pub fn from_request(mode: Option<String>) -> Self {
        match mode {
            Some(m) if !m.is_empty() => Self(m),
            _ => Self::none(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FailureMode {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FailureMode {
    fn from(s: &str) -> Self {
        FailureMode::from_request(Some(s.to_string()))
    }
}
