//! # Domain Types
//!
//! The records produced by a successful parse.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────┐                    │
//! │  │    ParseResult      │ 1    n │    CartItem     │                    │
//! │  │  ─────────────────  │───────►│  ─────────────  │                    │
//! │  │  items              │        │  id (UUID)      │                    │
//! │  │  total              │        │  name           │                    │
//! │  └─────────────────────┘        │  price          │                    │
//! │                                 │  quantity       │                    │
//! │                                 └─────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::total::calc_total;

// =============================================================================
// Cart Item
// =============================================================================

/// One line of a cart file.
///
/// Created once per valid data row and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Unique identifier (UUID v4), generated at parse time.
    pub id: String,

    /// Product name, trimmed.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Quantity ordered.
    pub quantity: f64,
}

// =============================================================================
// Parse Result
// =============================================================================

/// Items of a cart file in file order, plus their total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParseResult {
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl ParseResult {
    /// Builds a result from parsed items, computing the total.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = calc_total(&items);
        ParseResult { items, total }
    }

    /// Total rounded to the cent, for display.
    pub fn total_money(&self) -> Money {
        Money::from_amount(self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
