//! Error types for metadata persistence

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Backend connection error
    #[error("Backend connection error: {0}")]
    Connection(String),

    /// Operation timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<Error> for sharemeta_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidConfig(msg) => sharemeta_core::Error::Config(msg),
            other => sharemeta_core::Error::Store(other.to_string()),
        }
    }
}

#[cfg(feature = "postgres-backend")]
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => Error::Timeout("Pool timeout".to_string()),
            _ => Error::Backend(err.to_string()),
        }
    }
}
