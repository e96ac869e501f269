//! Core functionality
//!
//! This module contains the loop pacer and its supporting infrastructure.

pub mod logging;
pub mod pacer;
