//! Route handlers.
//!
//! Thin orchestration only: each handler reads or mutates fault state through
//! the controller/evaluator and translates the result to a status + envelope.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::fault::stress;
use crate::health::Verdict;
use crate::http::response::{
    self, Ack, DataFailed, DataOk, FaultSnapshot, HealthFailed, HealthOk, ServiceInfo,
    StressReport,
};
use crate::http::server::AppState;

pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Faultline fault-injection service",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: response::now(),
        failure_mode: state.controller.failure_mode().to_string(),
        status: "healthy",
    })
}

pub async fn health(State(state): State<AppState>) -> Response {
    let mode = state.controller.failure_mode();
    match state.evaluator.evaluate(&mode) {
        Verdict::Fail => {
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthFailed::failed())).into_response()
        }
        Verdict::DelayedOk(delay) => {
            // Non-blocking suspension; concurrent requests keep flowing.
            tokio::time::sleep(delay).await;
            Json(HealthOk::healthy()).into_response()
        }
        Verdict::Ok => Json(HealthOk::healthy()).into_response(),
    }
}

pub async fn external_data(State(state): State<AppState>) -> Response {
    match state.upstream.fetch_json().await {
        Ok(data) => Json(DataOk {
            success: true,
            data,
            timestamp: response::now(),
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Upstream fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DataFailed {
                    success: false,
                    error: e.to_string(),
                    timestamp: response::now(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn cpu_stress(State(state): State<AppState>) -> Response {
    if !state.controller.cpu_stress_enabled() {
        return Json(Ack::new("CPU stress test disabled")).into_response();
    }

    let iterations = state.stress_iterations;
    let start = Instant::now();
    match tokio::task::spawn_blocking(move || stress::burn(iterations)).await {
        Ok(result) => Json(StressReport {
            result,
            duration: start.elapsed().as_millis() as u64,
            timestamp: response::now(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "CPU burn task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Something went wrong!",
                    "timestamp": response::now(),
                })),
            )
                .into_response()
        }
    }
}

pub async fn fault_status(State(state): State<AppState>) -> Json<FaultSnapshot> {
    Json(FaultSnapshot {
        failure_mode: state.controller.failure_mode().to_string(),
        cpu_stress: state.controller.cpu_stress_enabled(),
        memory_leak: state.controller.memory_leak_enabled(),
        leak_pool_blocks: state.controller.leak_pool_len(),
        leak_pool_bytes: state.controller.leak_pool_bytes(),
        leak_tasks: state.controller.leak_task_count(),
        timestamp: response::now(),
    })
}

#[derive(Deserialize)]
pub struct SetModeRequest {
    pub mode: Option<String>,
}

pub async fn set_failure_mode(
    State(state): State<AppState>,
    Json(req): Json<SetModeRequest>,
) -> Json<Ack> {
    let mode = state.controller.set_failure_mode(req.mode);
    Json(Ack::new(format!("Failure mode set to: {}", mode)))
}

#[derive(Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub enable: bool,
}

pub async fn toggle_memory_leak(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Json<Ack> {
    state.controller.set_memory_leak(req.enable);
    let message = if req.enable {
        "Memory leak enabled"
    } else {
        "Memory leak disabled"
    };
    Json(Ack::new(message))
}

pub async fn toggle_cpu_stress(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Json<Ack> {
    state.controller.set_cpu_stress(req.enable);
    let message = if req.enable {
        "CPU stress test enabled"
    } else {
        "CPU stress test disabled"
    };
    Json(Ack::new(message))
}
