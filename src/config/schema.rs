//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section has defaults so a minimal (or absent) config file works;
//! the defaults reproduce the timings of the system being simulated.

use serde::{Deserialize, Serialize};

/// Root configuration for the fault-injection service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Fault simulation timings and seeds.
    pub fault: FaultConfig,

    /// Outbound data endpoint settings.
    pub upstream: UpstreamConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Fault simulation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FaultConfig {
    /// Failure mode active at startup.
    pub initial_mode: String,

    /// Delay before a `slow_response` health check succeeds.
    pub slow_response_delay_ms: u64,

    /// Period of each leak ticker.
    pub leak_interval_ms: u64,

    /// Size of one leaked block.
    pub leak_block_bytes: usize,

    /// Iteration count for the CPU burn loop.
    pub stress_iterations: u64,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            initial_mode: "none".to_string(),
            slow_response_delay_ms: 10_000,
            leak_interval_ms: 1_000,
            leak_block_bytes: 1_048_576,
            stress_iterations: 1_000_000_000,
        }
    }
}

/// Outbound data endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Endpoint fetched by GET /api/data.
    pub url: String,

    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "https://httpbin.org/json".to_string(),
            timeout_secs: 5,
        }
    }
}

impl ServiceConfig {
    /// Override the listener port, keeping the configured host.
    pub fn set_port(&mut self, port: u16) {
        let host = self
            .listener
            .bind_address
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        self.listener.bind_address = format!("{}:{}", host, port);
    }
}
