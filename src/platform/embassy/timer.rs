//! Timer implementation backed by embassy-time
//!
//! Uses the embassy time driver configured for the target for both the
//! monotonic clock and the blocking delay.

use embassy_time::{block_for, Duration, Instant};

use crate::platform::{traits::TimerInterface, Result};

/// Timer backed by the embassy time driver
#[derive(Debug, Default)]
pub struct EmbassyTimer;

impl EmbassyTimer {
    /// Create a new embassy-backed timer
    pub fn new() -> Self {
        Self
    }
}

impl TimerInterface for EmbassyTimer {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        block_for(Duration::from_millis(ms as u64));
        Ok(())
    }
}
