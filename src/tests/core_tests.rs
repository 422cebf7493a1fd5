#[cfg(all(test, feature = "bundled"))]
mod tests {
    use crate::{register_helpers, HelperError};
    use rusqlite::{ffi, Connection, ErrorCode};

    #[test]
    fn test_register_helpers_on_fresh_connection() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(register_helpers(&conn).is_ok());

        let result: String = conn
            .query_row("SELECT lm_resolve_domain_mapping('x')", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, "x");
    }

    #[test]
    fn test_functions_missing_before_registration() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn
            .prepare("SELECT lm_resolve_domain_mapping('x')")
            .unwrap_err();
        assert!(err.to_string().contains("no such function"));
    }

    #[test]
    fn test_reregistration_overrides() {
        // SQLite replaces a function registered again under the same name and arity
        let conn = Connection::open_in_memory().unwrap();
        register_helpers(&conn).unwrap();
        assert!(register_helpers(&conn).is_ok());

        let result: i64 = conn
            .query_row("SELECT lm_resolve_domain_mapping(42)", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, 42);
    }

    #[test]
    fn test_registration_is_per_connection() {
        let registered = crate::tests::helpers_connection();
        let other = Connection::open_in_memory().unwrap();

        assert!(registered.prepare("SELECT lm_helpers_version()").is_ok());
        assert!(other.prepare("SELECT lm_helpers_version()").is_err());
    }

    #[test]
    fn test_registration_error_keeps_sqlite_code() {
        let source = rusqlite::Error::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_MISUSE),
            Some("bad parameter or other API misuse".to_string()),
        );
        let err = HelperError::registration("lm_resolve_domain_mapping", source);

        assert_eq!(err.sqlite_code(), Some(ffi::SQLITE_MISUSE));
        assert!(err.to_string().starts_with("failed to register lm_resolve_domain_mapping"));

        let back: rusqlite::Error = err.into();
        assert_eq!(back.sqlite_error_code(), Some(ErrorCode::ApiMisuse));
    }

    #[test]
    fn test_registration_error_logs_extended_code() {
        let source = rusqlite::Error::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_CONSTRAINT_UNIQUE),
            None,
        );
        let err = HelperError::registration("lm_resolve_domain_mapping", source);

        assert_eq!(err.sqlite_code(), Some(ffi::SQLITE_CONSTRAINT_UNIQUE));
        assert_eq!(
            crate::utils::log::failure_code(err.sqlite_code()),
            ffi::SQLITE_CONSTRAINT_UNIQUE
        );
    }

    #[test]
    fn test_registration_error_without_sqlite_code() {
        let err = HelperError::registration(
            "lm_helpers_version",
            rusqlite::Error::InvalidFunctionParameterType(0, rusqlite::types::Type::Null),
        );
        assert_eq!(err.sqlite_code(), None);
        assert_eq!(
            crate::utils::log::failure_code(err.sqlite_code()),
            ffi::SQLITE_ERROR
        );
    }
}
