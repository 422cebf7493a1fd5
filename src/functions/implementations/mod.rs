/// Helper function implementations module
pub mod domain_mapping;
pub mod version;

// Re-export all helpers for convenience
pub use domain_mapping::ResolveDomainMapping;
pub use version::HelpersVersion;
