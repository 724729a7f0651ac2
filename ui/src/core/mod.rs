//! Platform-agnostic building blocks shared by the timeline views.

pub mod error;
pub mod format;
pub mod seed;

pub use error::TimelineError;
