/// Core extension functionality module
///
/// This module contains the pieces SQLite talks to directly:
/// - The loader entry point that links the API routines and registers helpers
/// - Registration of the helper catalog on an open connection
/// - The error type used while registering
pub mod error;
pub mod handlers;
