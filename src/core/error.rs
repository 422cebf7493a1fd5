use thiserror::Error;

/// Errors raised while installing helpers on a connection
#[derive(Debug, Error)]
pub enum HelperError {
    #[error("failed to register {name}: {source}")]
    Registration {
        name: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

pub type HelperResult<T> = Result<T, HelperError>;

impl HelperError {
    pub fn registration(name: &'static str, source: rusqlite::Error) -> Self {
        HelperError::Registration { name, source }
    }

    /// SQLite extended result code carried by the underlying error, if any
    pub fn sqlite_code(&self) -> Option<i32> {
        match self {
            HelperError::Registration { source, .. } => source.sqlite_error().map(|e| e.extended_code),
        }
    }
}

/// Hands the loader back SQLite's own error, untranslated
impl From<HelperError> for rusqlite::Error {
    fn from(err: HelperError) -> Self {
        match err {
            HelperError::Registration { source, .. } => source,
        }
    }
}
