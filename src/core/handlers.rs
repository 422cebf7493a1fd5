use crate::{
    core::error::HelperResult, functions::types::HelperFunctionType, utils::log::sqlite_log,
};
use rusqlite::Connection;

#[cfg(feature = "loadable")]
use rusqlite::ffi;
#[cfg(feature = "loadable")]
use std::os::raw::{c_char, c_int};

/// Loader entry point, resolved by SQLite as `sqlite3_helpers_init`
///
/// Links the API routines handed over in `p_api` (the host binary may not
/// link SQLite statically) and registers every helper on `db`. The returned
/// status is SQLite's own registration result.
///
/// # Safety
///
/// Must only be called by SQLite's extension loader with the pointers it owns.
#[cfg(feature = "loadable")]
#[no_mangle]
pub unsafe extern "C" fn sqlite3_helpers_init(
    db: *mut ffi::sqlite3,
    pz_err_msg: *mut *mut c_char,
    p_api: *mut ffi::sqlite3_api_routines,
) -> c_int {
    Connection::extension_init2(db, pz_err_msg, p_api, extension_init)
}

#[cfg(feature = "loadable")]
fn extension_init(conn: Connection) -> rusqlite::Result<bool> {
    sqlite_log!("---> sqlite3_helpers_init");
    register_helpers(&conn)?;
    // not permanent: unloaded together with the connection
    Ok(false)
}

/// Register every helper function on an open connection
pub fn register_helpers(conn: &Connection) -> HelperResult<()> {
    for helper in HelperFunctionType::ALL {
        if let Err(err) = helper.register(conn) {
            sqlite_log!(code = err.sqlite_code(), "{}", err);
            return Err(err);
        }
        sqlite_log!("registered {}/{}", helper.name(), helper.arity());
    }
    Ok(())
}
