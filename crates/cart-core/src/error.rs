//! # Error Records
//!
//! The structured record produced for every format violation in a cart file.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core (this file)                                                 │
//! │  └── ValidationError  - One violation: kind, row, column, message      │
//! │      ├── header       - Column name mismatch (row 0)                   │
//! │      ├── row          - Wrong number of cells (column -1)              │
//! │      └── cell         - Cell content fails its column rule             │
//! │                                                                         │
//! │  cart-parser (separate crate)                                          │
//! │  └── ParseError       - ValidationFailed / Io                          │
//! │                                                                         │
//! │  Flow: Vec<ValidationError> → ParseError::ValidationFailed → caller    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. A `ValidationError` is a value, never returned as `Err` on its own
//! 2. Position is always attached (row 0 = header, -1 = not applicable)
//! 3. The serialized form uses `type` for the kind label

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Error Kind
// =============================================================================

/// Category of a validation error.
///
/// Serialized as its lowercase label (`"header"`, `"row"`, `"cell"`).
/// Labels outside the three known categories are kept verbatim in
/// [`ErrorKind::Other`] so records built by callers round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorKind {
    /// Header cell does not match the schema.
    Header,
    /// Row has the wrong number of cells.
    Row,
    /// Cell content fails its column rule.
    Cell,
    /// Any other label.
    Other(String),
}

impl ErrorKind {
    /// Returns the label used in serialized records.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::Header => "header",
            ErrorKind::Row => "row",
            ErrorKind::Cell => "cell",
            ErrorKind::Other(label) => label,
        }
    }
}

impl From<&str> for ErrorKind {
    fn from(label: &str) -> Self {
        match label {
            "header" => ErrorKind::Header,
            "row" => ErrorKind::Row,
            "cell" => ErrorKind::Cell,
            other => ErrorKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ErrorKind {
    fn from(label: String) -> Self {
        ErrorKind::from(label.as_str())
    }
}

impl From<ErrorKind> for String {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// One format violation found in a cart file.
///
/// ## Position Convention
/// ```text
/// row 0          → header line
/// row 1..n       → data rows, 1-based, blank lines not counted
/// column 0..2    → cell index within the row
/// column -1      → whole-row problem (wrong cell count)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{kind} error at row {row}, column {column}: {message}")]
pub struct ValidationError {
    /// Category label, serialized as `type`.
    #[serde(rename = "type")]
    #[ts(type = "string")]
    pub kind: ErrorKind,

    /// Row index (0 = header).
    pub row: i64,

    /// Column index (-1 when not cell-specific).
    pub column: i64,

    /// Human-readable description.
    pub message: String,
}

/// Assembles a [`ValidationError`] from its parts.
///
/// Pure field assembly: nothing is checked here.
///
/// ## Example
/// ```rust
/// use cart_core::{create_error, ErrorKind};
///
/// let err = create_error("error", 1, 1, "typical error message");
/// assert_eq!(err.kind, ErrorKind::Other("error".to_string()));
/// assert_eq!(err.row, 1);
/// assert_eq!(err.column, 1);
/// assert_eq!(err.message, "typical error message");
/// ```
pub fn create_error(
    kind: impl Into<ErrorKind>,
    row: i64,
    column: i64,
    message: impl Into<String>,
) -> ValidationError {
    ValidationError {
        kind: kind.into(),
        row,
        column,
        message: message.into(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_assembles_fields() {
        let err = create_error("error", 1, 1, "typical error message");
        assert_eq!(
            err,
            ValidationError {
                kind: ErrorKind::Other("error".to_string()),
                row: 1,
                column: 1,
                message: "typical error message".to_string(),
            }
        );
    }

    #[test]
    fn test_create_error_serialized_shape() {
        let err = create_error("error", 1, 1, "typical error message");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "error",
                "row": 1,
                "column": 1,
                "message": "typical error message",
            })
        );
    }

    #[test]
    fn test_known_labels_map_to_variants() {
        assert_eq!(ErrorKind::from("header"), ErrorKind::Header);
        assert_eq!(ErrorKind::from("row"), ErrorKind::Row);
        assert_eq!(ErrorKind::from("cell"), ErrorKind::Cell);
        assert_eq!(ErrorKind::from("Header"), ErrorKind::Other("Header".into()));
    }

    #[test]
    fn test_deserialize_header_record() {
        let json = r#"{"type":"header","row":0,"column":1,"message":"m"}"#;
        let err: ValidationError = serde_json::from_str(json).unwrap();
        assert_eq!(err.kind, ErrorKind::Header);
        assert_eq!(err.column, 1);
    }

    #[test]
    fn test_display() {
        let err = create_error(ErrorKind::Row, 4, -1, "Expected row to have 3 cells but received 2.");
        assert_eq!(
            err.to_string(),
            "row error at row 4, column -1: Expected row to have 3 cells but received 2."
        );
    }
}
