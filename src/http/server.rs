//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, panic fallback)
//! - Construct the shared fault state and its collaborators
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - One `FaultState` per server, built here and shared via `Arc` into every
//!   handler; nothing else constructs it
//! - The panic-catching layer is the outermost error boundary: anything a
//!   handler throws becomes an opaque 500

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::fault::{FailureMode, FaultState, ModeController};
use crate::health::HealthEvaluator;
use crate::http::{handlers, response};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ModeController>,
    pub evaluator: Arc<HealthEvaluator>,
    pub upstream: Arc<UpstreamClient>,
    pub stress_iterations: u64,
}

/// HTTP server for the fault-injection service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, UpstreamError> {
        let initial_mode = FailureMode::from_request(Some(config.fault.initial_mode.clone()));
        let state = Arc::new(FaultState::new(initial_mode));

        let controller = Arc::new(ModeController::new(
            Arc::clone(&state),
            Duration::from_millis(config.fault.leak_interval_ms),
            config.fault.leak_block_bytes,
        ));
        let evaluator = Arc::new(HealthEvaluator::new(Duration::from_millis(
            config.fault.slow_response_delay_ms,
        )));
        let upstream = Arc::new(UpstreamClient::new(&config.upstream)?);

        let app_state = AppState {
            controller,
            evaluator,
            upstream,
            stress_iterations: config.fault.stress_iterations,
        };

        let router = Self::build_router(app_state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::service_info))
            .route("/health", get(handlers::health))
            .route("/api/data", get(handlers::external_data))
            .route("/api/stress", get(handlers::cpu_stress))
            .route("/api/status", get(handlers::fault_status))
            .route("/api/failure-mode", post(handlers::set_failure_mode))
            .route("/api/memory-leak", post(handlers::toggle_memory_leak))
            .route("/api/cpu-stress", post(handlers::toggle_cpu_stress))
            .with_state(state)
            .layer(CatchPanicLayer::custom(response::handle_panic))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            failure_mode = %self.config.fault.initial_mode,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
