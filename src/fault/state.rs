//! Shared mutable fault state.
//!
//! # Responsibilities
//! - Hold the process-wide fault configuration (mode, toggles, leak pool)
//! - Track handles of spawned leak tickers
//!
//! # Design Decisions
//! - Exactly one instance per process, shared via `Arc`; handlers and
//!   background tickers observe the same record
//! - One mutex guards the whole record; reads and writes are last-write-wins,
//!   no snapshot isolation across concurrent requests
//! - Ticker handles are tracked but never aborted here; the controller
//!   decides what disable means

use std::sync::{Mutex, PoisonError};
use tokio::task::JoinHandle;

use crate::fault::mode::FailureMode;

/// One opaque heap block appended to the leak pool per ticker tick.
pub struct LeakBlock(Vec<u8>);

impl LeakBlock {
    pub fn filled(bytes: usize) -> Self {
        Self(vec![0xAB; bytes])
    }

    pub fn size_bytes(&self) -> usize {
        self.0.len()
    }
}

struct Inner {
    failure_mode: FailureMode,
    cpu_stress_enabled: bool,
    memory_leak_enabled: bool,
    leak_pool: Vec<LeakBlock>,
    leak_tasks: Vec<JoinHandle<()>>,
}

/// Process-wide mutable fault record.
pub struct FaultState {
    inner: Mutex<Inner>,
}

impl FaultState {
    pub fn new(initial_mode: FailureMode) -> Self {
        Self {
            inner: Mutex::new(Inner {
                failure_mode: initial_mode,
                cpu_stress_enabled: false,
                memory_leak_enabled: false,
                leak_pool: Vec::new(),
                leak_tasks: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A panicking handler must not wedge the control surface.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.lock().failure_mode.clone()
    }

    pub fn set_failure_mode(&self, mode: FailureMode) {
        self.lock().failure_mode = mode;
    }

    pub fn cpu_stress_enabled(&self) -> bool {
        self.lock().cpu_stress_enabled
    }

    pub fn set_cpu_stress(&self, enable: bool) {
        self.lock().cpu_stress_enabled = enable;
    }

    pub fn memory_leak_enabled(&self) -> bool {
        self.lock().memory_leak_enabled
    }

    pub fn set_memory_leak_flag(&self, enable: bool) {
        self.lock().memory_leak_enabled = enable;
    }

    pub fn push_leak_block(&self, block: LeakBlock) {
        self.lock().leak_pool.push(block);
    }

    pub fn clear_leak_pool(&self) {
        self.lock().leak_pool.clear();
    }

    /// Number of blocks currently accumulated.
    pub fn leak_pool_len(&self) -> usize {
        self.lock().leak_pool.len()
    }

    /// Total bytes currently held by the pool.
    pub fn leak_pool_bytes(&self) -> usize {
        self.lock().leak_pool.iter().map(LeakBlock::size_bytes).sum()
    }

    pub fn track_leak_task(&self, handle: JoinHandle<()>) {
        self.lock().leak_tasks.push(handle);
    }

    /// Number of leak tickers ever started (none are ever stopped).
    pub fn leak_task_count(&self) -> usize {
        self.lock().leak_tasks.len()
    }
}
