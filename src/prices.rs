//! Prices

use std::{fmt, iter::Sum, ops::Deref};

use rusty_money::{Money, iso::Currency};

use crate::pricing;

/// A price in whole currency units (rupees, no minor units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: u64,
}

impl Price {
    /// The zero price.
    pub const ZERO: Price = Price { value: 0 };

    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Multiplies the price by a quantity, saturating at `u64::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Price::new(self.value.saturating_mul(u64::from(quantity)))
    }

    /// Adds two prices, saturating at `u64::MAX`.
    #[must_use]
    pub fn saturating_add(self, other: Price) -> Self {
        Price::new(self.value.saturating_add(other.value))
    }

    /// Converts the price into a money amount in the store currency.
    ///
    /// Values beyond `i64::MAX` clamp to it; no catalog price comes close.
    pub fn to_money(self) -> Money<'static, Currency> {
        let major = i64::try_from(self.value).unwrap_or(i64::MAX);

        Money::from_major(major, pricing::currency())
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price::new(value)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_money())
    }
}
