//! # Parse Error Types
//!
//! Error types for reading and parsing cart files.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (reader)  ───────────────────┐                         │
//! │                                              │ unmodified               │
//! │  Vec<ValidationError> (cart-core)            │                         │
//! │       │ non-empty                            │                         │
//! │       ▼                                      ▼                         │
//! │  ParseError::ValidationFailed       ParseError::Io                     │
//! │       │                                      │                         │
//! │       └──────────────┬───────────────────────┘                         │
//! │                      ▼                                                  │
//! │               caller / CLI exit code                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cart_core::ValidationError;
use thiserror::Error;

/// Errors from [`CartParser::parse`](crate::CartParser::parse).
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file text failed validation; nothing was parsed.
    ///
    /// ## When This Occurs
    /// - Header names differ from `Product name,Price,Quantity`
    /// - A row does not have exactly 3 cells
    /// - A name is empty or a price/quantity is not a positive number
    #[error("Validation failed!")]
    ValidationFailed { errors: Vec<ValidationError> },

    /// Reading the file failed. The I/O error is passed through as is.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The validation records behind a `ValidationFailed`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ParseError::ValidationFailed { errors } => errors,
            ParseError::Io(_) => &[],
        }
    }
}

/// Convenience type alias for Results with ParseError.
pub type ParseOutcome<T> = Result<T, ParseError>;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::create_error;

    #[test]
    fn test_validation_failed_message() {
        let err = ParseError::ValidationFailed {
            errors: vec![create_error("row", 1, -1, "m")],
        };
        assert_eq!(err.to_string(), "Validation failed!");
        assert_eq!(err.validation_errors().len(), 1);
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ParseError = io.into();
        assert_eq!(err.to_string(), "no such file");
        assert!(err.validation_errors().is_empty());
    }
}
