//! # Validation Module
//!
//! Structural and content checks for cart text.
//!
//! ## Validation Passes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Passes                                  │
//! │                                                                         │
//! │  Pass 1: Header (row 0)                                                │
//! │  ├── Each schema column name must match exactly (case-sensitive)       │
//! │  └── Extra header cells are reported one by one                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Pass 2: Row shape (rows 1..n)                                         │
//! │  └── Cell count must equal the schema width, else skip the row         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Pass 3: Cell content                                                  │
//! │  └── Each cell checked against its column's CellKind                   │
//! │                                                                         │
//! │  Nothing short-circuits across rows: every error is collected          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::{validate, ErrorKind};
//!
//! let errors = validate("Product name,rice,Quantity\nMollis consequat,9.00,2");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].kind, ErrorKind::Header);
//! assert_eq!(errors[0].message, r#"Expected header to be named "Price" but received rice."#);
//! ```

use crate::error::{create_error, ErrorKind, ValidationError};
use crate::line::{content_lines, split_cells};
use crate::schema::{ColumnDef, CART_SCHEMA};
use crate::{HEADER_ROW, NO_COLUMN};

// =============================================================================
// Validator
// =============================================================================

/// Validates cart text against a column schema.
///
/// Holds nothing but a reference to the schema, so one value can be shared
/// freely and reused across any number of inputs.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    columns: &'static [ColumnDef],
}

impl Default for Validator {
    fn default() -> Self {
        Validator {
            columns: &CART_SCHEMA,
        }
    }
}

impl Validator {
    /// Creates a validator for the cart schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the schema this validator checks against.
    pub fn columns(&self) -> &'static [ColumnDef] {
        self.columns
    }

    /// Runs every pass and returns the errors in discovery order.
    ///
    /// An empty vector means the text is safe to hand to
    /// [`parse_line`](crate::parse_line) row by row.
    pub fn validate(&self, text: &str) -> Vec<ValidationError> {
        let mut lines = content_lines(text);
        let mut errors = Vec::new();

        let header = lines.next().map(split_cells).unwrap_or_default();
        self.check_header(&header, &mut errors);

        for (index, line) in lines.enumerate() {
            self.check_row(index as i64 + 1, &split_cells(line), &mut errors);
        }

        errors
    }

    fn check_header(&self, header: &[&str], errors: &mut Vec<ValidationError>) {
        for (index, column) in self.columns.iter().enumerate() {
            let received = header.get(index).copied().unwrap_or("");
            if received != column.name {
                errors.push(create_error(
                    ErrorKind::Header,
                    HEADER_ROW,
                    index as i64,
                    format!(
                        "Expected header to be named \"{}\" but received {}.",
                        column.name, received
                    ),
                ));
            }
        }

        for index in self.columns.len()..header.len() {
            errors.push(create_error(
                ErrorKind::Header,
                HEADER_ROW,
                index as i64,
                format!(
                    "Expected header to have {} columns but received {}.",
                    self.columns.len(),
                    header.len()
                ),
            ));
        }
    }

    fn check_row(&self, row: i64, cells: &[&str], errors: &mut Vec<ValidationError>) {
        if cells.len() != self.columns.len() {
            errors.push(create_error(
                ErrorKind::Row,
                row,
                NO_COLUMN,
                format!(
                    "Expected row to have {} cells but received {}.",
                    self.columns.len(),
                    cells.len()
                ),
            ));
            return;
        }

        for (index, (cell, column)) in cells.iter().zip(self.columns).enumerate() {
            if let Some(message) = column.kind.check(cell) {
                errors.push(create_error(ErrorKind::Cell, row, index as i64, message));
            }
        }
    }
}

/// Validates cart text against the cart schema.
///
/// Never fails: problems come back as records, in the order they were found.
pub fn validate(text: &str) -> Vec<ValidationError> {
    Validator::new().validate(text)
}

// =============================================================================
// Unit Tests
// =============================================================================
