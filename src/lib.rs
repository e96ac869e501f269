#![cfg_attr(not(test), no_std)]

//! loop_pacer - fixed-cadence pacing and load measurement for a single
//! cooperative main loop.
//!
//! Call [`LoopPacer::loop_begin`](crate::core::pacer::LoopPacer::loop_begin)
//! at the top of each loop iteration and
//! [`LoopPacer::loop_end`](crate::core::pacer::LoopPacer::loop_end) at the
//! bottom;
//! `loop_end` blocks out whatever is left of the configured period. Across
//! iterations the pacer accumulates load statistics: running average,
//! extrema, a ten-bucket histogram and an overload counter.

// Platform abstraction layer (monotonic clock + blocking delay)
pub mod platform;

// Core functionality (pacer, statistics, logging)
pub mod core;
