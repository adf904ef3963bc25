//! Shared utilities for the Boost KYC demo.

pub mod logging;
pub mod size;

pub use logging::{init_logging, LogFormat, ParseLogFormatError};
pub use size::format_size;
