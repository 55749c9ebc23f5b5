//! # Cart Parser
//!
//! Orchestrates one parse: read → validate → parse lines → total.
//!
//! ## Parse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         parse(path)                                     │
//! │                                                                         │
//! │  CsvReader::read(path) ──── io::Error ────────────► Err(Io)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart_core::validate(text) ── non-empty ──────────► Err(ValidationFailed)
//! │       │ empty                                                           │
//! │       ▼                                                                 │
//! │  skip header, parse_line per row ──► Vec<CartItem>                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calc_total ──► Ok(ParseResult { items, total })                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation is a gate: when it reports anything, no row is parsed and no
//! partial result is returned.

use std::fmt;
use std::path::Path;

use cart_core::line::content_lines;
use cart_core::{parse_line, ParseResult, Validator};
use tracing::{debug, info};

use crate::error::{ParseError, ParseOutcome};
use crate::reader::{CsvReader, FsReader};

/// Parses cart files through a [`CsvReader`].
///
/// Keeps no state between calls; one parser can serve any number of files.
pub struct CartParser {
    reader: Box<dyn CsvReader>,
    validator: Validator,
}

impl Default for CartParser {
    fn default() -> Self {
        CartParser::with_reader(FsReader)
    }
}

impl fmt::Debug for CartParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartParser")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl CartParser {
    /// Creates a parser that reads from the filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that reads through `reader`.
    pub fn with_reader(reader: impl CsvReader + 'static) -> Self {
        CartParser {
            reader: Box::new(reader),
            validator: Validator::new(),
        }
    }

    /// Reads, validates and parses the cart file at `path`.
    ///
    /// ## Errors
    /// - [`ParseError::Io`] when the reader fails
    /// - [`ParseError::ValidationFailed`] when the text has any validation
    ///   error; the records are attached
    pub fn parse(&self, path: impl AsRef<Path>) -> ParseOutcome<ParseResult> {
        let path = path.as_ref();
        info!(path = %path.display(), "Parsing cart file");

        let text = self.reader.read(path)?;
        self.parse_text(&text)
    }

    /// Validates and parses cart text that is already in memory.
    pub fn parse_text(&self, text: &str) -> ParseOutcome<ParseResult> {
        let errors = self.validator.validate(text);
        if !errors.is_empty() {
            info!(errors = errors.len(), "Cart failed validation");
            for error in &errors {
                debug!(
                    kind = %error.kind,
                    row = error.row,
                    column = error.column,
                    "{}",
                    error.message
                );
            }
            return Err(ParseError::ValidationFailed { errors });
        }

        let items: Vec<_> = content_lines(text)
            .skip(1)
            .map(|line| {
                let item = parse_line(line);
                debug!(id = %item.id, name = %item.name, price = item.price, quantity = item.quantity, "Parsed line");
                item
            })
            .collect();

        let result = ParseResult::from_items(items);
        info!(items = result.items.len(), total = result.total, "Cart parsed");
        Ok(result)
    }
}

/// Parses the cart file at `path` from the filesystem.
///
/// ## Example
/// ```rust,no_run
/// let result = cart_parser::parse("samples/cart.csv")?;
/// println!("{} items, total {}", result.items.len(), result.total_money());
/// # Ok::<(), cart_parser::ParseError>(())
/// ```
pub fn parse(path: impl AsRef<Path>) -> ParseOutcome<ParseResult> {
    CartParser::new().parse(path)
}

// =============================================================================
// Unit Tests
// =============================================================================
