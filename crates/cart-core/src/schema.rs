//! # Cart Schema
//!
//! The fixed column layout of a cart file.
//!
//! ```text
//! ┌──────────────┬────────────────┬────────────────┐
//! │ Product name │     Price      │    Quantity    │
//! ├──────────────┼────────────────┼────────────────┤
//! │ NonEmpty     │ PositiveNumber │ PositiveNumber │
//! └──────────────┴────────────────┴────────────────┘
//! ```

use serde::Serialize;

/// Content rule applied to every cell of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Trimmed value must not be empty.
    NonEmptyString,
    /// Trimmed value must parse to a finite number greater than zero.
    PositiveNumber,
}

impl CellKind {
    /// Checks a raw cell against this rule.
    ///
    /// Returns the message for the violation, or `None` when the cell passes.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::CellKind;
    ///
    /// assert!(CellKind::PositiveNumber.check("18.90").is_none());
    /// assert_eq!(
    ///     CellKind::PositiveNumber.check("ohwait").as_deref(),
    ///     Some(r#"Expected cell to be a positive number but received "ohwait"."#)
    /// );
    /// ```
    pub fn check(&self, raw: &str) -> Option<String> {
        let value = raw.trim();
        match self {
            CellKind::NonEmptyString if value.is_empty() => Some(format!(
                "Expected cell to be a nonempty string but received \"{}\".",
                value
            )),
            CellKind::PositiveNumber if !is_positive_number(value) => Some(format!(
                "Expected cell to be a positive number but received \"{}\".",
                value
            )),
            _ => None,
        }
    }
}

/// `inf` and `NaN` parse as `f64` but are not accepted as prices.
fn is_positive_number(value: &str) -> bool {
    value
        .parse::<f64>()
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}

/// One column of the schema: the expected header name and its cell rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: CellKind,
}

/// The cart layout: exactly three columns in this order.
pub const CART_SCHEMA: [ColumnDef; 3] = [
    ColumnDef {
        name: "Product name",
        kind: CellKind::NonEmptyString,
    },
    ColumnDef {
        name: "Price",
        kind: CellKind::PositiveNumber,
    },
    ColumnDef {
        name: "Quantity",
        kind: CellKind::PositiveNumber,
    },
];
