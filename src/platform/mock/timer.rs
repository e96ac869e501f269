//! Mock Timer implementation for testing
//!
//! Drives the pacer with a synthetic clock: tests advance time explicitly to
//! simulate application work, and every delay request is recorded so tests
//! can assert on sleep behavior (including that no sleep happened after an
//! overrun).

use heapless::Vec;

use crate::platform::{traits::TimerInterface, Result};

/// Maximum number of delay requests the mock keeps
const MAX_RECORDED_DELAYS: usize = 64;

/// Mock Timer implementation
///
/// Uses simulated time. `delay_ms` advances the synthetic clock by the
/// requested amount, as a real blocking delay would consume wall time.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_ms: u64,
    delays: Vec<u32, MAX_RECORDED_DELAYS>,
}

impl MockTimer {
    /// Create a new mock timer at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the synthetic clock, simulating time spent executing
    pub fn advance_ms(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    /// Delay durations requested so far, oldest first
    ///
    /// Recording stops silently once the fixed-capacity history is full.
    pub fn delay_history(&self) -> &[u32] {
        &self.delays
    }

    /// Number of delay requests received
    pub fn delay_count(&self) -> usize {
        self.delays.len()
    }
}

impl TimerInterface for MockTimer {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        let _ = self.delays.push(ms);
        self.now_ms += ms as u64;
        Ok(())
    }
}
