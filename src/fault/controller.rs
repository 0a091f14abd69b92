//! Mode controller: the only writer of fault state.
//!
//! # Responsibilities
//! - Apply mode-change and toggle requests
//! - Spawn the periodic leak tickers
//!
//! # Design Decisions
//! - Every `enable` of the memory leak spawns a NEW independent ticker with
//!   no already-running check; enabling twice doubles the leak rate. This
//!   reproduces the behavior of the system being simulated and must not be
//!   deduplicated.
//! - Disabling the leak clears the pool and flips the flag but leaves all
//!   tickers running, so accumulation resumes. Handles are tracked in
//!   `FaultState`, so cancelling on disable is a one-line change if the
//!   corrected behavior is ever wanted.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

use crate::fault::mode::FailureMode;
use crate::fault::state::{FaultState, LeakBlock};

pub struct ModeController {
    state: Arc<FaultState>,
    leak_interval: Duration,
    leak_block_bytes: usize,
}

impl ModeController {
    pub fn new(state: Arc<FaultState>, leak_interval: Duration, leak_block_bytes: usize) -> Self {
        Self {
            state,
            leak_interval,
            leak_block_bytes,
        }
    }

    /// Set the failure mode. Empty or absent input resolves to `none`; any
    /// other string is accepted without validation. Returns the effective mode.
    pub fn set_failure_mode(&self, mode: Option<String>) -> FailureMode {
        let mode = FailureMode::from_request(mode);
        self.state.set_failure_mode(mode.clone());
        tracing::info!(mode = %mode, "Failure mode set");
        mode
    }

    /// Flip the CPU-stress flag. No background work is started; the stress
    /// handler consults the flag synchronously per request.
    pub fn set_cpu_stress(&self, enable: bool) {
        self.state.set_cpu_stress(enable);
        tracing::info!(enable, "CPU stress toggled");
    }

    pub fn set_memory_leak(&self, enable: bool) {
        if enable {
            self.state.set_memory_leak_flag(true);
            self.spawn_leak_ticker();
            tracing::info!(
                tickers = self.state.leak_task_count(),
                interval_ms = self.leak_interval.as_millis() as u64,
                "Memory leak enabled"
            );
        } else {
            self.state.set_memory_leak_flag(false);
            self.state.clear_leak_pool();
            let running = self.state.leak_task_count();
            if running > 0 {
                tracing::warn!(
                    tickers = running,
                    "Memory leak disabled; pool cleared but tickers keep running"
                );
            } else {
                tracing::info!("Memory leak disabled");
            }
        }
    }

    fn spawn_leak_ticker(&self) {
        let state = Arc::clone(&self.state);
        let period = self.leak_interval;
        let block_bytes = self.leak_block_bytes;

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval fires immediately; consume the first tick so the
            // first block lands one full period after enable
            ticker.tick().await;
            loop {
                ticker.tick().await;
                state.push_leak_block(LeakBlock::filled(block_bytes));
            }
        });

        self.state.track_leak_task(handle);
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.state.failure_mode()
    }

    pub fn cpu_stress_enabled(&self) -> bool {
        self.state.cpu_stress_enabled()
    }

    pub fn memory_leak_enabled(&self) -> bool {
        self.state.memory_leak_enabled()
    }

    pub fn leak_pool_len(&self) -> usize {
        self.state.leak_pool_len()
    }

    pub fn leak_pool_bytes(&self) -> usize {
        self.state.leak_pool_bytes()
    }

    pub fn leak_task_count(&self) -> usize {
        self.state.leak_task_count()
    }
}
