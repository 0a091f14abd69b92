//! Response envelopes.
//!
//! # Responsibilities
//! - Define the JSON body shapes for every endpoint
//! - Stamp every response with an ISO-8601 timestamp
//! - Map uncaught handler panics to an opaque 500
//!
//! # Design Decisions
//! - Envelopes serialize field names in the wire casing clients expect
//!   (`failureMode`), independent of Rust naming
//! - Panic detail is logged server-side only; clients get a generic message

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// GET / body.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "failureMode")]
    pub failure_mode: String,
    pub status: &'static str,
}

/// GET /health success body.
#[derive(Serialize)]
pub struct HealthOk {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthOk {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: now(),
        }
    }
}

/// GET /health failure body.
#[derive(Serialize)]
pub struct HealthFailed {
    pub error: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthFailed {
    pub fn failed() -> Self {
        Self {
            error: "Health check failed",
            timestamp: now(),
        }
    }
}

/// GET /api/data success body.
#[derive(Serialize)]
pub struct DataOk {
    pub success: bool,
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

/// GET /api/data failure body.
#[derive(Serialize)]
pub struct DataFailed {
    pub success: bool,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

/// Confirmation body for control endpoints and the disabled-stress reply.
#[derive(Serialize)]
pub struct Ack {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: now(),
        }
    }
}

/// GET /api/stress body when the burn ran.
#[derive(Serialize)]
pub struct StressReport {
    pub result: f64,
    /// Wall-clock duration of the burn, milliseconds.
    pub duration: u64,
    pub timestamp: DateTime<Utc>,
}

/// GET /api/status body.
#[derive(Serialize)]
pub struct FaultSnapshot {
    #[serde(rename = "failureMode")]
    pub failure_mode: String,
    #[serde(rename = "cpuStress")]
    pub cpu_stress: bool,
    #[serde(rename = "memoryLeak")]
    pub memory_leak: bool,
    #[serde(rename = "leakPoolBlocks")]
    pub leak_pool_blocks: usize,
    #[serde(rename = "leakPoolBytes")]
    pub leak_pool_bytes: usize,
    #[serde(rename = "leakTasks")]
    pub leak_tasks: usize,
    pub timestamp: DateTime<Utc>,
}

/// Fallback for panics escaping a handler: log the detail, answer opaquely.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };
    tracing::error!(detail = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": "Something went wrong!",
            "timestamp": now(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_wire_casing() {
        let info = ServiceInfo {
            message: "Faultline",
            version: "0.1.0",
            timestamp: now(),
            failure_mode: "none".to_string(),
            status: "healthy",
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["failureMode"], "none");
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn test_panic_fallback_is_opaque_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        // the panic detail stays server-side
        assert!(!text.contains("boom"));

        let body: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error"], "Something went wrong!");
        assert!(body["timestamp"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn test_panic_fallback_handles_string_payload() {
        let response = handle_panic(Box::new("exploded".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_snapshot_wire_casing() {
        let snap = FaultSnapshot {
            failure_mode: "none".to_string(),
            cpu_stress: false,
            memory_leak: true,
            leak_pool_blocks: 3,
            leak_pool_bytes: 3 * 4096,
            leak_tasks: 1,
            timestamp: now(),
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["leakPoolBlocks"], 3);
        assert_eq!(json["memoryLeak"], true);
    }
}
