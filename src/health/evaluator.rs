//! Health verdict evaluation.
//!
//! # Verdicts
//! - Ok: respond healthy immediately
//! - Fail: respond 503 immediately
//! - DelayedOk: respond healthy after a fixed delay
//!
//! # Design Decisions
//! - Pure read of the current mode at request time; no hysteresis, no memory
//!   of prior verdicts
//! - Unrecognized mode strings fall through to Ok

use std::time::Duration;

use crate::fault::mode::{FailureMode, MODE_HEALTH_FAILURE, MODE_SLOW_RESPONSE};

/// Outcome of a single health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Fail,
    DelayedOk(Duration),
}

pub struct HealthEvaluator {
    slow_delay: Duration,
}

impl HealthEvaluator {
    pub fn new(slow_delay: Duration) -> Self {
        Self { slow_delay }
    }

    pub fn evaluate(&self, mode: &FailureMode) -> Verdict {
        match mode.as_str() {
            MODE_HEALTH_FAILURE => Verdict::Fail,
            MODE_SLOW_RESPONSE => Verdict::DelayedOk(self.slow_delay),
            _ => Verdict::Ok,
        }
    }
}
