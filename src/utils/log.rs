use rusqlite::ffi;
use std::os::raw::c_int;

/// Emit a message on SQLite's error log (`sqlite3_log`)
///
/// Messages are dropped by SQLite unless the host installed a
/// `SQLITE_CONFIG_LOG` callback.
pub fn emit(code: c_int, msg: &str) {
    rusqlite::trace::log(code, msg);
}

/// Extended result code to log a failure with, falling back to `SQLITE_ERROR`
pub fn failure_code(code: Option<c_int>) -> c_int {
    code.unwrap_or(ffi::SQLITE_ERROR)
}

/// `format!`-style logging to the host engine
///
/// `sqlite_log!("...")` logs as `SQLITE_NOTICE`;
/// `sqlite_log!(code = Some(rc), "...")` logs a failure with its extended
/// result code.
macro_rules! sqlite_log {
    (code = $code:expr, $($arg:tt)*) => {
        $crate::utils::log::emit(
            $crate::utils::log::failure_code($code),
            &format!($($arg)*),
        )
    };
    ($($arg:tt)*) => {
        $crate::utils::log::emit(rusqlite::ffi::SQLITE_NOTICE, &format!($($arg)*))
    };
}

pub(crate) use sqlite_log;
