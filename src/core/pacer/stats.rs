//! Load statistics accumulation
//!
//! Tracks per-cycle load samples for a paced loop: running average, extrema,
//! and a histogram of ten 10-point-wide buckets over the 0-99% range.
//! Samples at or above 100% count as overloads instead of landing in a
//! bucket.

/// Number of histogram buckets
///
/// Bucket `i` counts samples whose load falls in `[10*i, 10*i + 10)` percent.
pub const NUM_LOAD_BUCKETS: usize = 10;

/// Accumulated load statistics
///
/// Updated once per completed cycle via [`LoadStats::record`]. Statistics
/// reset only by constructing a fresh instance.
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Number of samples folded into the statistics
    sample_count: u32,
    /// Running mean, updated incrementally
    load_avg: f32,
    /// Minimum observed load in %
    load_min: f32,
    /// Maximum observed load in %
    load_max: f32,
    /// Histogram counters for the 0-99% range
    buckets: [u32; NUM_LOAD_BUCKETS],
    /// Number of samples at or above 100%
    overload_count: u32,
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadStats {
    /// Create empty statistics
    pub const fn new() -> Self {
        Self {
            sample_count: 0,
            load_avg: 0.0,
            // Seeded beyond any attainable load so the first real sample
            // becomes both extrema.
            load_min: f32::INFINITY,
            load_max: f32::NEG_INFINITY,
            buckets: [0; NUM_LOAD_BUCKETS],
            overload_count: 0,
        }
    }

    /// Fold one load sample (percent) into the statistics
    pub fn record(&mut self, load: f32) {
        self.sample_count += 1;
        if self.sample_count < u32::MAX {
            self.load_avg += (load - self.load_avg) / self.sample_count as f32;
        } else {
            // Reset before the counter can wrap so the incremental-mean
            // divisor never becomes zero. The running average restarts its
            // continuity from here; extrema and histogram keep accumulating.
            self.sample_count = 0;
        }

        if load > self.load_max {
            self.load_max = load;
        }
        if load < self.load_min {
            self.load_min = load;
        }

        // Integer division by bucket width; anything past the last bucket
        // is an overload, so the index can never go out of bounds.
        let bucket = (load / 10.0) as usize;
        if bucket < NUM_LOAD_BUCKETS {
            self.buckets[bucket] = self.buckets[bucket].saturating_add(1);
        } else {
            self.overload_count = self.overload_count.saturating_add(1);
        }
    }

    /// Number of samples recorded so far
    ///
    /// Zero means no data yet. Zero can also recur after the counter resets
    /// at its ceiling.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Average load in %, 0.0 until the first sample
    pub fn avg_load(&self) -> f32 {
        self.load_avg
    }

    /// Minimum observed load in %, 0.0 until the first sample
    pub fn min_load(&self) -> f32 {
        if self.load_min.is_finite() {
            self.load_min
        } else {
            0.0
        }
    }

    /// Maximum observed load in %, 0.0 until the first sample
    pub fn max_load(&self) -> f32 {
        if self.load_max.is_finite() {
            self.load_max
        } else {
            0.0
        }
    }

    /// Histogram counter for a bucket
    ///
    /// Returns 0 for any index at or past [`NUM_LOAD_BUCKETS`]; an invalid
    /// index reads as "no data" rather than an error.
    pub fn bucket(&self, index: usize) -> u32 {
        self.buckets.get(index).copied().unwrap_or(0)
    }

    /// Number of samples at or above 100% load
    pub fn overload_count(&self) -> u32 {
        self.overload_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = LoadStats::new();
        assert_eq!(stats.sample_count(), 0);
        assert_eq!(stats.avg_load(), 0.0);
        assert_eq!(stats.min_load(), 0.0);
        assert_eq!(stats.max_load(), 0.0);
        assert_eq!(stats.overload_count(), 0);
        for i in 0..NUM_LOAD_BUCKETS {
            assert_eq!(stats.bucket(i), 0);
        }
    }

    #[test]
    fn test_single_sample() {
        let mut stats = LoadStats::new();
        stats.record(20.0);

        assert_eq!(stats.sample_count(), 1);
        assert_eq!(stats.avg_load(), 20.0);
        assert_eq!(stats.min_load(), 20.0);
        assert_eq!(stats.max_load(), 20.0);
        assert_eq!(stats.bucket(2), 1);
        assert_eq!(stats.overload_count(), 0);
    }

    #[test]
    fn test_average_and_extrema() {
        let mut stats = LoadStats::new();
        stats.record(20.0);
        stats.record(50.0);
        stats.record(80.0);

        assert_eq!(stats.sample_count(), 3);
        assert!((stats.avg_load() - 50.0).abs() < 1e-3);
        assert_eq!(stats.min_load(), 20.0);
        assert_eq!(stats.max_load(), 80.0);
        assert_eq!(stats.bucket(2), 1);
        assert_eq!(stats.bucket(5), 1);
        assert_eq!(stats.bucket(8), 1);
    }

    #[test]
    fn test_overload_sample_skips_buckets() {
        let mut stats = LoadStats::new();
        stats.record(120.0);

        assert_eq!(stats.overload_count(), 1);
        for i in 0..NUM_LOAD_BUCKETS {
            assert_eq!(stats.bucket(i), 0);
        }
        assert_eq!(stats.max_load(), 120.0);
    }

    #[test]
    fn test_bucket_boundaries() {
        let mut stats = LoadStats::new();
        stats.record(0.0);
        stats.record(9.9);
        stats.record(10.0);
        stats.record(99.9);
        stats.record(100.0);

        assert_eq!(stats.bucket(0), 2);
        assert_eq!(stats.bucket(1), 1);
        assert_eq!(stats.bucket(9), 1);
        // Exactly 100% is an overload, not bucket 10.
        assert_eq!(stats.overload_count(), 1);
    }

    #[test]
    fn test_invalid_bucket_index_reads_zero() {
        let mut stats = LoadStats::new();
        stats.record(55.0);

        assert_eq!(stats.bucket(NUM_LOAD_BUCKETS), 0);
        assert_eq!(stats.bucket(999), 0);
    }

    #[test]
    fn test_bucket_sum_matches_sample_count() {
        let mut stats = LoadStats::new();
        let samples = [5.0, 15.0, 15.5, 48.0, 73.0, 99.0, 110.0, 100.0];
        for &s in &samples {
            stats.record(s);
        }

        let bucket_sum: u32 = (0..NUM_LOAD_BUCKETS).map(|i| stats.bucket(i)).sum();
        assert_eq!(
            bucket_sum + stats.overload_count(),
            stats.sample_count()
        );
    }

    #[test]
    fn test_ordering_invariant() {
        let mut stats = LoadStats::new();
        for &s in &[33.0, 7.5, 88.0, 41.0, 120.0, 59.0] {
            stats.record(s);
            assert!(stats.min_load() <= stats.avg_load());
            assert!(stats.avg_load() <= stats.max_load());
        }
    }

    #[test]
    fn test_average_converges_to_arithmetic_mean() {
        let mut stats = LoadStats::new();
        let samples = [12.0, 34.5, 56.0, 78.25, 90.0, 3.0, 61.75, 44.0];
        for &s in &samples {
            stats.record(s);
        }

        let mean: f32 = samples.iter().sum::<f32>() / samples.len() as f32;
        assert!((stats.avg_load() - mean).abs() < 1e-3);
    }

    #[test]
    fn test_counter_reset_at_ceiling() {
        let mut stats = LoadStats::new();
        // Force the counter to the value just below the ceiling.
        stats.sample_count = u32::MAX - 1;
        stats.load_avg = 50.0;

        stats.record(80.0);

        // The update that would reach u32::MAX skips the mean and resets
        // the counter; histogram and extrema still accumulate.
        assert_eq!(stats.sample_count(), 0);
        assert_eq!(stats.avg_load(), 50.0);
        assert_eq!(stats.bucket(8), 1);
        assert_eq!(stats.max_load(), 80.0);

        // The next sample divides by 1, not zero.
        stats.record(40.0);
        assert_eq!(stats.sample_count(), 1);
        assert_eq!(stats.avg_load(), 40.0);
    }
}
