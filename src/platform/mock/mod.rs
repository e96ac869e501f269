//! Mock platform implementations for testing

pub mod timer;

pub use timer::MockTimer;
