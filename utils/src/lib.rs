//! Shared utilities for the premine generator.

pub mod format;
pub mod logging;

pub use format::group_digits;
pub use logging::{init_logging, LogFormat, LoggingError};
