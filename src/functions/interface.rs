use crate::core::error::{HelperError, HelperResult};
use rusqlite::{functions::Context, functions::FunctionFlags, types::ToSql, Connection};

/// Trait defining a scalar SQL function installed by the extension
pub trait ScalarHelper: 'static {
    /// Value handed back to SQLite
    type Output: ToSql + 'static;

    /// Name the function is callable as from SQL
    const NAME: &'static str;

    /// Declared number of arguments; SQLite rejects calls with any other count
    const N_ARGS: i32;

    /// Function body, invoked once per SQL-level call
    fn invoke(ctx: &Context<'_>) -> rusqlite::Result<Self::Output>;

    fn flags() -> FunctionFlags {
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC
    }

    /// Add the function to the connection's function catalog
    fn register(conn: &Connection) -> HelperResult<()> {
        conn.create_scalar_function(Self::NAME, Self::N_ARGS, Self::flags(), Self::invoke)
            .map_err(|e| HelperError::registration(Self::NAME, e))
    }
}
