//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the time primitives the
//! pacer consumes. All platform-specific code is isolated to this module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "embassy")]
pub mod embassy;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result, TimerError};
pub use traits::TimerInterface;
