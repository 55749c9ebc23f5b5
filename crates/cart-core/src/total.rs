//! # Cart Totals
//!
//! Sums `price * quantity` across parsed items.

use crate::types::CartItem;

/// Anything that carries a unit price and a quantity.
pub trait Priced {
    fn price(&self) -> f64;
    fn quantity(&self) -> f64;

    /// `price * quantity` for this line.
    fn line_total(&self) -> f64 {
        self.price() * self.quantity()
    }
}

impl Priced for CartItem {
    fn price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }
}

/// `(price, quantity)` pairs.
impl Priced for (f64, f64) {
    fn price(&self) -> f64 {
        self.0
    }

    fn quantity(&self) -> f64 {
        self.1
    }
}

impl<T: Priced + ?Sized> Priced for &T {
    fn price(&self) -> f64 {
        (**self).price()
    }

    fn quantity(&self) -> f64 {
        (**self).quantity()
    }
}

/// Sums `price * quantity` over `items`, in iteration order.
///
/// An empty input totals `0.0`.
///
/// ## Example
/// ```rust
/// use cart_core::calc_total;
///
/// let lines = [(0.5, 2.0), (3.0, 3.0), (1.0, 4.0), (2.0, 5.0)];
/// assert_eq!(calc_total(lines), 24.0);
/// assert_eq!(calc_total(Vec::<(f64, f64)>::new()), 0.0);
/// ```
pub fn calc_total<I>(items: I) -> f64
where
    I: IntoIterator,
    I::Item: Priced,
{
    items
        .into_iter()
        .fold(0.0, |total, item| total + item.line_total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::parse_line;

    #[test]
    fn test_calc_total() {
        let lines = vec![(0.5, 2.0), (3.0, 3.0), (1.0, 4.0), (2.0, 5.0)];
        assert_eq!(calc_total(&lines), 24.0);
    }

    #[test]
    fn test_calc_total_empty() {
        let items: Vec<CartItem> = Vec::new();
        assert_eq!(calc_total(&items), 0.0);
    }

    #[test]
    fn test_calc_total_over_items() {
        let items = vec![
            parse_line("Mollis consequat,9.00,2"),
            parse_line("Tvoluptatem,10.32,1"),
        ];
        let expected = 9.0 * 2.0 + 10.32 * 1.0;
        assert_eq!(calc_total(&items), expected);
        assert_eq!(calc_total(items.iter()), expected);
    }

    #[test]
    fn test_line_total() {
        assert_eq!((2.5, 4.0).line_total(), 10.0);
    }
}
