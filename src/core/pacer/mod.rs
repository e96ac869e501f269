//! Loop pacing for a fixed-cadence cooperative main loop
//!
//! [`LoopPacer`] stretches each iteration of a single main loop to a fixed
//! period and measures how much of that period was spent executing. Call
//! [`LoopPacer::loop_begin`] as the first statement of the loop body and
//! [`LoopPacer::loop_end`] as the last; `loop_end` blocks until the period
//! has elapsed.
//!
//! The pacer assumes strict `loop_begin`/`loop_end` alternation driven by a
//! single thread. Out-of-order calls are a caller contract violation and are
//! not guarded internally.
//!
//! ## Example
//!
//! ```ignore
//! let timer = EmbassyTimer::new();
//! let mut pacer = LoopPacer::new(timer, 100);
//! loop {
//!     pacer.loop_begin();
//!     do_work();
//!     pacer.loop_end()?;
//! }
//! ```

pub mod stats;

pub use stats::{LoadStats, NUM_LOAD_BUCKETS};

use crate::platform::{traits::TimerInterface, Result};

/// Paces one cooperative loop to a fixed millisecond period
///
/// Owns the injected timer and all pacing state. Statistics cover every
/// completed iteration except the very first, whose start the pacer has not
/// observed.
#[derive(Debug)]
pub struct LoopPacer<T: TimerInterface> {
    timer: T,
    /// Configured loop period in ms, fixed at construction
    target_period_ms: u32,
    /// Start timestamp of the current cycle
    cycle_start_ms: u64,
    /// Remaining wait computed by the previous `loop_end`; negative on
    /// overrun
    wait_budget_ms: i64,
    /// Set once the first `loop_begin` has run
    initialized: bool,
    stats: LoadStats,
}

impl<T: TimerInterface> LoopPacer<T> {
    /// Create a pacer for the given loop period
    ///
    /// `target_period_ms` must be greater than zero; the value is a divisor
    /// in the load calculation and a zero period is a caller contract
    /// violation, not a guarded error.
    pub fn new(timer: T, target_period_ms: u32) -> Self {
        debug_assert!(target_period_ms > 0, "loop period must be non-zero");
        Self {
            timer,
            target_period_ms,
            cycle_start_ms: 0,
            wait_budget_ms: 0,
            initialized: false,
            stats: LoadStats::new(),
        }
    }

    /// Mark the start of a loop iteration
    ///
    /// Captures the cycle start timestamp and folds the previous iteration's
    /// timing into the statistics. The first call only arms the pacer; there
    /// is no completed cycle to measure yet.
    pub fn loop_begin(&mut self) {
        self.cycle_start_ms = self.timer.now_ms();

        if !self.initialized {
            self.initialized = true;
            return;
        }

        // wait_budget_ms still holds what the previous loop_end computed, so
        // the load falls out without re-measuring: execution time is
        // period - budget.
        let executed_ms = self.target_period_ms as i64 - self.wait_budget_ms;
        let load = 100.0 * executed_ms as f32 / self.target_period_ms as f32;
        self.stats.record(load);
    }

    /// Mark the end of a loop iteration and block out the rest of the period
    ///
    /// Computes the remaining wait budget and sleeps for it. A negative
    /// budget means the iteration overran its period: no sleep happens and
    /// no catch-up across iterations is attempted; the overrun shows up in
    /// the statistics on the next `loop_begin`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the platform delay primitive.
    pub fn loop_end(&mut self) -> Result<()> {
        let cycle_end_ms = self.timer.now_ms();
        let elapsed_ms = cycle_end_ms.saturating_sub(self.cycle_start_ms);
        self.wait_budget_ms = self.target_period_ms as i64 - elapsed_ms as i64;

        if self.wait_budget_ms >= 0 {
            // Budget is bounded by the period, so the cast cannot truncate.
            self.timer.delay_ms(self.wait_budget_ms as u32)?;
        } else {
            crate::log_warn!("loop overran period by {} ms", -self.wait_budget_ms);
        }
        Ok(())
    }

    /// Configured loop period in milliseconds
    pub fn target_period_ms(&self) -> u32 {
        self.target_period_ms
    }

    /// Average load in %, 0.0 before the first completed sample
    pub fn avg_load(&self) -> f32 {
        self.stats.avg_load()
    }

    /// Minimum observed load in %, 0.0 before the first completed sample
    pub fn min_load(&self) -> f32 {
        self.stats.min_load()
    }

    /// Maximum observed load in %, 0.0 before the first completed sample
    pub fn max_load(&self) -> f32 {
        self.stats.max_load()
    }

    /// Histogram counter for a load-range bucket, 0 for an invalid index
    pub fn load_bucket(&self, index: usize) -> u32 {
        self.stats.bucket(index)
    }

    /// Number of iterations at or over 100% load
    pub fn overload_count(&self) -> u32 {
        self.stats.overload_count()
    }

    /// Number of iterations that have contributed to statistics
    pub fn sample_count(&self) -> u32 {
        self.stats.sample_count()
    }

    /// Full statistics snapshot for reporting front-ends
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Get timer instance
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Get mutable timer instance
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}
