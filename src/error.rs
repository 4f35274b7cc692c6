//! Error types for sheetgen

use thiserror::Error;

/// Main error type for generator and catalog operations
#[derive(Error, Debug)]
pub enum SheetgenError {
    /// Caller supplied an argument the operation cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operating system random source failed
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// Product not found in the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SheetgenError {
    /// Shorthand for building an `InvalidArgument` error
    pub fn invalid(msg: impl Into<String>) -> Self {
        SheetgenError::InvalidArgument(msg.into())
    }
}

impl From<rusqlite::Error> for SheetgenError {
    fn from(err: rusqlite::Error) -> Self {
        SheetgenError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for SheetgenError {
    fn from(err: serde_json::Error) -> Self {
        SheetgenError::SerializationError(err.to_string())
    }
}

/// Result type alias for sheetgen operations
pub type Result<T> = std::result::Result<T, SheetgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SheetgenError::InvalidArgument("charset must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid argument: charset must not be empty");

        let err = SheetgenError::ProductNotFound("prod_123".to_string());
        assert!(err.to_string().contains("prod_123"));

        let err = SheetgenError::invalid("odd length");
        assert!(matches!(err, SheetgenError::InvalidArgument(ref m) if m == "odd length"));
    }

    #[test]
    fn test_error_from_rusqlite() {
        let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let err: SheetgenError = sqlite_err.into();
        match err {
            SheetgenError::DatabaseError(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected DatabaseError"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SheetgenError = json_err.into();
        assert!(matches!(err, SheetgenError::SerializationError(_)));
    }
}
