// Extension entry point, registration and errors
mod core;

// Helper SQL function catalog and implementations
pub mod functions;

// Host logging and value helpers
mod utils;

// All tests organized by functionality
#[cfg(all(test, feature = "bundled"))]
mod tests;

pub use crate::core::error::{HelperError, HelperResult};
pub use crate::core::handlers::register_helpers;
pub use functions::HelperFunctionType;

// Re-export the loader entry point so the cdylib exports it
#[cfg(feature = "loadable")]
pub use crate::core::handlers::sqlite3_helpers_init;
