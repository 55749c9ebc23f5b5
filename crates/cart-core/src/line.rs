//! # Line Parsing
//!
//! Splitting cart text into lines and cells, and turning one validated line
//! into a [`CartItem`].
//!
//! ## Tokenizing Rules
//! ```text
//! "  Mollis consequat, 9.00 ,2  \n"
//!          │
//!          ▼ trim line
//! "Mollis consequat, 9.00 ,2"
//!          │
//!          ▼ split on ','
//! ["Mollis consequat", " 9.00 ", "2"]
//!          │
//!          ▼ trim cells (parse_line only)
//! ["Mollis consequat", "9.00", "2"]
//! ```
//!
//! No quoting or escaping: a comma always ends a cell.

use uuid::Uuid;

use crate::types::CartItem;
use crate::CELL_SEPARATOR;

/// Yields the trimmed, non-blank lines of `text`, header first.
///
/// Both `\n` and `\r\n` endings are accepted.
pub fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Splits an already trimmed line into its raw cells.
///
/// An empty line still yields one (empty) cell, matching how a plain string
/// split behaves.
pub fn split_cells(line: &str) -> Vec<&str> {
    line.split(CELL_SEPARATOR).collect()
}

/// Converts one validated data line into a [`CartItem`] with a fresh id.
///
/// The line must already have passed validation. Numeric cells that do not
/// parse become `NaN` and a missing cell reads as empty; neither panics.
///
/// ## Example
/// ```rust
/// use cart_core::parse_line;
///
/// let item = parse_line("Scelerisque lacinia,18.90,1");
/// assert_eq!(item.name, "Scelerisque lacinia");
/// assert_eq!(item.price, 18.9);
/// assert_eq!(item.quantity, 1.0);
/// assert!(!item.id.is_empty());
/// ```
pub fn parse_line(line: &str) -> CartItem {
    let cells = split_cells(line.trim());
    let cell = |index: usize| cells.get(index).copied().map(str::trim).unwrap_or("");

    CartItem {
        id: Uuid::new_v4().to_string(),
        name: cell(0).to_string(),
        price: parse_number(cell(1)),
        quantity: parse_number(cell(2)),
    }
}

fn parse_number(cell: &str) -> f64 {
    cell.parse().unwrap_or(f64::NAN)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let item = parse_line("Scelerisque lacinia,18.90,1");
        assert_eq!(item.name, "Scelerisque lacinia");
        assert_eq!(item.price, 18.9);
        assert_eq!(item.quantity, 1.0);
    }

    #[test]
    fn test_parse_line_trims_cells() {
        let item = parse_line("\t Mollis consequat , 9.00 , 2 ");
        assert_eq!(item.name, "Mollis consequat");
        assert_eq!(item.price, 9.0);
        assert_eq!(item.quantity, 2.0);
    }

    #[test]
    fn test_ids_are_uuids_and_unique() {
        let a = parse_line("A,1,1");
        let b = parse_line("A,1,1");
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_malformed_line_does_not_panic() {
        let item = parse_line("only a name");
        assert_eq!(item.name, "only a name");
        assert!(item.price.is_nan());
        assert!(item.quantity.is_nan());
    }

    #[test]
    fn test_content_lines_skips_blanks() {
        let text = "\n\t\tProduct name,Price,Quantity\r\n   \n\tA,1,2\n\t\t\t\n";
        let lines: Vec<_> = content_lines(text).collect();
        assert_eq!(lines, ["Product name,Price,Quantity", "A,1,2"]);
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(split_cells("a,b,c"), ["a", "b", "c"]);
        assert_eq!(split_cells(",9.00,2"), ["", "9.00", "2"]);
        assert_eq!(split_cells("x,28.72,"), ["x", "28.72", ""]);
        assert_eq!(split_cells(""), [""]);
    }
}
