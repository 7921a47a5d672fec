//! Pricing

use rusty_money::iso::{self, Currency};

use crate::prices::Price;

/// The single currency the store trades in.
pub fn currency() -> &'static Currency {
    iso::INR
}

/// Calculates the total price of a list of `(unit price, quantity)` pairs.
///
/// An empty list totals to zero.
pub fn total_price(lines: impl IntoIterator<Item = (Price, u32)>) -> Price {
    lines
        .into_iter()
        .map(|(price, quantity)| price.times(quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_price() {
        let lines = [(Price::new(899), 1), (Price::new(249), 3)];

        assert_eq!(total_price(lines), Price::new(1646));
    }

    #[test]
    fn test_total_price_empty() {
        assert_eq!(total_price([]), Price::ZERO);
    }

    #[test]
    fn currency_is_rupees() {
        assert_eq!(currency().iso_alpha_code, "INR");
    }
}
