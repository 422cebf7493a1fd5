use crate::functions::interface::ScalarHelper;
use rusqlite::functions::{Context, SqlFnArg};

/// `lm_resolve_domain_mapping(x)`
///
/// Stand-in for the application's domain-mapping resolver so its queries can
/// be run from the sqlite3 shell. No mapping happens here: the argument is
/// handed back to SQLite as the result value, bytes and storage class intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveDomainMapping;

impl ScalarHelper for ResolveDomainMapping {
    type Output = SqlFnArg;

    const NAME: &'static str = "lm_resolve_domain_mapping";
    const N_ARGS: i32 = 1;

    fn invoke(ctx: &Context<'_>) -> rusqlite::Result<SqlFnArg> {
        debug_assert_eq!(ctx.len(), 1);
        Ok(ctx.get_arg(0))
    }
}
