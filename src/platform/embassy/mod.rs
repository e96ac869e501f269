//! embassy-time platform implementation

pub mod timer;

pub use timer::EmbassyTimer;
