//! Health checking subsystem.
//!
//! The evaluator maps the current failure mode to a verdict; the health
//! handler maps the verdict to an HTTP response.

pub mod evaluator;

pub use evaluator::{HealthEvaluator, Verdict};
