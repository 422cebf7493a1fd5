/// Test suite for the SQLite helpers extension
///
/// Every test runs against a real in-memory SQLite connection provided by the
/// bundled build, with the helpers registered the same way the loader does.

#[cfg(all(test, feature = "bundled"))]
pub mod core_tests;



#[cfg(all(test, feature = "bundled"))]
pub(crate) fn helpers_connection() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    crate::register_helpers(&conn).unwrap();
    conn
}
