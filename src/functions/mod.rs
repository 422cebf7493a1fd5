/// Helper SQL functions module
///
/// This module contains the scalar functions the extension installs, each
/// in its own implementation module, plus the catalog that registers them.
pub mod implementations;
pub mod interface;
pub mod types;

// Re-export the interface trait for convenience
pub use interface::ScalarHelper;

// Re-export types for convenience
pub use types::*;

// Re-export all helper implementations
pub use implementations::*;
