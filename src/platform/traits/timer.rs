//! Timer trait
//!
//! This module defines the timer interface the pacer runs against: a
//! monotonic millisecond clock plus a blocking delay. Injecting the trait
//! instead of calling free functions keeps the pacing logic testable with a
//! synthetic clock.

use crate::platform::Result;

/// Timer interface
///
/// Provides the two time primitives the host platform must supply.
pub trait TimerInterface {
    /// Get elapsed time in milliseconds since an arbitrary epoch
    ///
    /// The value must be monotonically non-decreasing. It must not wrap
    /// within any single measured interval; wraparound over the full range
    /// of the counter is a known, unaddressed edge case.
    fn now_ms(&self) -> u64;

    /// Block the calling thread for at least `ms` milliseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the underlying delay primitive
    /// rejects the duration.
    fn delay_ms(&mut self, ms: u32) -> Result<()>;
}
