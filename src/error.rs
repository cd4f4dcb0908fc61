//! Error types for linkboard.

use thiserror::Error;

/// Common error type for linkboard.
#[derive(Error, Debug)]
pub enum LinkboardError {
    /// Persistent store failure (unavailable, timed out, unexpected fault).
    ///
    /// Errors from sqlx are converted into this variant automatically.
    #[error("store error: {0}")]
    Store(String),

    /// Validation failure for user input, including invalid URLs.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Template rendering error.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for LinkboardError {
    fn from(e: sqlx::Error) -> Self {
        LinkboardError::Store(e.to_string())
    }
}

/// Result type alias for linkboard operations.
pub type Result<T> = std::result::Result<T, LinkboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = LinkboardError::Store("connection refused".to_string());
        assert_eq!(err.to_string(), "store error: connection refused");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LinkboardError::Validation("title is required".to_string());
        assert_eq!(err.to_string(), "validation error: title is required");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = LinkboardError::NotFound("link".to_string());
        assert_eq!(err.to_string(), "link not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LinkboardError = io_err.into();
        assert!(matches!(err, LinkboardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(LinkboardError::NotFound("link".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
