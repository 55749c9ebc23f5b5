//! # cart-core: Pure Parsing Logic for Cart Files
//!
//! This crate is the **heart** of the cart parser. It turns the text of a
//! cart CSV into validated, typed line items and a total, with zero I/O.
//!
//! ## Pipeline Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Parser Pipeline                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 cart-parser (Reader + Orchestrator)              │   │
//! │  │        read file ──► text                      CLI / logging     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &str                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  schema   │  │validation │  │   line    │  │   total   │  │   │
//! │  │   │ ColumnDef │─►│ validate  │─►│parse_line │─►│calc_total │  │   │
//! │  │   │ CellKind  │  │  (gate)   │  │ CartItem  │  │   f64     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - The fixed three-column cart layout
//! - [`validation`] - Header, row and cell checks producing error records
//! - [`line`] - Conversion of one validated line into a [`CartItem`]
//! - [`total`] - Sum of `price * quantity`
//! - [`types`] - Domain types ([`CartItem`], [`ParseResult`])
//! - [`error`] - The [`ValidationError`] record
//! - [`money`] - Cent-rounded display of totals
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{calc_total, parse_line, validate};
//!
//! let csv = "Product name,Price,Quantity\nMollis consequat,9.00,2";
//! assert!(validate(csv).is_empty());
//!
//! let item = parse_line("Mollis consequat,9.00,2");
//! assert_eq!(item.name, "Mollis consequat");
//! assert_eq!(calc_total([&item]), 18.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod line;
pub mod money;
pub mod schema;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cart_core::validate` instead of
// `use cart_core::validation::validate`

pub use error::{create_error, ErrorKind, ValidationError};
pub use line::parse_line;
pub use money::Money;
pub use schema::{CellKind, ColumnDef, CART_SCHEMA};
pub use total::{calc_total, Priced};
pub use types::*;
pub use validation::{validate, Validator};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Separator between cells of a row.
///
/// Quoting and escaping are not supported, so a plain comma split is the
/// whole tokenizer.
pub const CELL_SEPARATOR: char = ',';

/// Row index used for errors reported against the header line.
pub const HEADER_ROW: i64 = 0;

/// Column index used for errors that are not tied to a single cell.
pub const NO_COLUMN: i64 = -1;
