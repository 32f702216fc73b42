//! Error types for sharemeta

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Message shown when a user lacks the capability for the settings page.
pub const PERMISSION_DENIED_MESSAGE: &str =
    "You do not have sufficient permissions to access this page.";

/// Main error type for sharemeta
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persistence backend failure (absence of a value is never an error)
    #[error("Store error: {0}")]
    Store(String),

    /// The acting user lacks the capability required for the page
    #[error("{}", PERMISSION_DENIED_MESSAGE)]
    PermissionDenied {
        /// Capability that was required
        capability: String,
    },

    /// Markup rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Convert error to HTTP status code
    pub fn to_status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            Error::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create a permission denied error for a capability
    pub fn permission_denied(capability: impl Into<String>) -> Self {
        Error::PermissionDenied {
            capability: capability.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            Error::permission_denied("manage_options").to_status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            Error::Store("connection reset".to_string()).to_status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            Error::Render("bad template".to_string()).to_status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_permission_denied_message() {
        let err = Error::permission_denied("manage_options");
        assert_eq!(err.to_string(), PERMISSION_DENIED_MESSAGE);
    }
}
