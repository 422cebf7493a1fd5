/// Utility functions and helpers module
///
/// Logging through SQLite's error log.
pub mod log;
