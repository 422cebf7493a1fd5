/// Helper function catalog
/// This module contains the closed set of functions the extension installs
use crate::{
    core::error::HelperResult,
    functions::{
        implementations::{HelpersVersion, ResolveDomainMapping},
        interface::ScalarHelper,
    },
};
use rusqlite::{functions::FunctionFlags, Connection};

/// Enum representing every helper function, dispatching to its implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperFunctionType {
    ResolveDomainMapping,
    HelpersVersion,
}

impl HelperFunctionType {
    /// Registration order used when the extension is loaded
    pub const ALL: [HelperFunctionType; 2] = [
        HelperFunctionType::ResolveDomainMapping,
        HelperFunctionType::HelpersVersion,
    ];

    /// Look a helper up by its SQL name (case-insensitive, as SQLite is)
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|helper| helper.name().eq_ignore_ascii_case(s))
    }

    pub fn name(&self) -> &'static str {
        match self {
            HelperFunctionType::ResolveDomainMapping => ResolveDomainMapping::NAME,
            HelperFunctionType::HelpersVersion => HelpersVersion::NAME,
        }
    }

    pub fn arity(&self) -> i32 {
        match self {
            HelperFunctionType::ResolveDomainMapping => ResolveDomainMapping::N_ARGS,
            HelperFunctionType::HelpersVersion => HelpersVersion::N_ARGS,
        }
    }

    pub fn flags(&self) -> FunctionFlags {
        match self {
            HelperFunctionType::ResolveDomainMapping => ResolveDomainMapping::flags(),
            HelperFunctionType::HelpersVersion => HelpersVersion::flags(),
        }
    }

    pub fn register(&self, conn: &Connection) -> HelperResult<()> {
        match self {
            HelperFunctionType::ResolveDomainMapping => ResolveDomainMapping::register(conn),
            HelperFunctionType::HelpersVersion => HelpersVersion::register(conn),
        }
    }
}
