//! Shared helpers for dates and display formatting.

pub mod format;
pub mod period;
pub mod time_utils;
