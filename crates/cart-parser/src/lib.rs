//! # cart-parser: Reading and Parsing Cart Files
//!
//! This crate connects the pure logic in `cart-core` to files on disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Parser Data Flow                            │
//! │                                                                         │
//! │  cart-parse binary / library caller                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  cart-parser (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    reader     │    │    parser     │    │    config    │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ CsvReader     │◄───│ CartParser    │    │ ParserConfig │  │   │
//! │  │   │ FsReader      │    │ parse()       │    │ CART_* env   │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                 cart-core: validate / parse_line / calc_total           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`reader`] - Where cart text comes from
//! - [`parser`] - The validate-then-parse orchestration
//! - [`config`] - Environment configuration for the binary
//! - [`error`] - Parse and config error types
//!
//! ## Usage
//!
//! ```rust
//! use cart_parser::{CartParser, ParseError, StaticReader};
//!
//! let parser = CartParser::with_reader(StaticReader::new(
//!     "Product name,Price,Quantity\nTvoluptatem,10.32,1",
//! ));
//! let result = parser.parse("cart.csv")?;
//! assert_eq!(result.items.len(), 1);
//! assert_eq!(result.total, 10.32);
//! # Ok::<(), ParseError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod parser;
pub mod reader;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart_core::{calc_total, create_error, parse_line, validate};
pub use cart_core::{CartItem, ErrorKind, Money, ParseResult, ValidationError};
pub use config::{OutputFormat, ParserConfig};
pub use error::{ConfigError, ParseError, ParseOutcome};
pub use parser::{parse, CartParser};
pub use reader::{CsvReader, FsReader, StaticReader};
