//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod timer;

// Re-export trait interfaces
pub use timer::TimerInterface;
