//! Logging utilities
//!
//! This module provides logger setup for the binary and standardized log
//! lines for assessment results.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{init_logging, log_assessment_summary};
