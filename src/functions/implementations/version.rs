use crate::functions::interface::ScalarHelper;
use rusqlite::functions::Context;

/// `lm_helpers_version()`, the version of the loaded extension build
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpersVersion;

impl ScalarHelper for HelpersVersion {
    type Output = &'static str;

    const NAME: &'static str = "lm_helpers_version";
    const N_ARGS: i32 = 0;

    fn invoke(_ctx: &Context<'_>) -> rusqlite::Result<&'static str> {
        Ok(env!("CARGO_PKG_VERSION"))
    }
}
