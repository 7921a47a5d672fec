//! Products

use std::{fmt, num::NonZeroU32, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::prices::Price;

/// Errors raised while constructing product values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// Product ids start at 1.
    #[error("product id must be a positive integer, got {0}")]
    InvalidId(i64),

    /// Product id string was not a number.
    #[error("product id is not a number: {0}")]
    MalformedId(String),

    /// Category string did not name a known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Rating outside of `[0, 5]`.
    #[error("rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(Decimal),
}

/// Product identity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(NonZeroU32);

impl ProductId {
    /// Creates a product id.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::InvalidId`] for zero, negative or out of range values.
    pub fn new(id: i64) -> Result<Self, ProductError> {
        u32::try_from(id)
            .ok()
            .and_then(NonZeroU32::new)
            .map(ProductId)
            .ok_or(ProductError::InvalidId(id))
    }

    /// Returns the raw id.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for ProductId {
    fn from(id: NonZeroU32) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|_err| ProductError::MalformedId(s.to_string()))?;

        ProductId::new(id)
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Bags and totes
    Bags,

    /// Wearables and small carry items
    Accessories,

    /// Gift pieces
    Gifts,

    /// Home decor
    Decor,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Bags,
        Category::Accessories,
        Category::Gifts,
        Category::Decor,
    ];

    /// Display name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Bags => "Bags",
            Category::Accessories => "Accessories",
            Category::Gifts => "Gifts",
            Category::Decor => "Decor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProductError::UnknownCategory(s.to_string()))
    }
}

/// Catalog filter selected on the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,

    /// Only products in the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether the filter admits the given category.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }

        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

/// Customer rating, `0.0..=5.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(Decimal);

impl Rating {
    /// Highest possible rating.
    pub const MAX: Rating = Rating(Decimal::from_parts(5, 0, 0, false, 0));

    /// Creates a rating.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::RatingOutOfRange`] outside of `[0, 5]`.
    pub fn new(value: Decimal) -> Result<Self, ProductError> {
        if value < Decimal::ZERO || value > Self::MAX.0 {
            return Err(ProductError::RatingOutOfRange(value));
        }

        Ok(Rating(value.normalize()))
    }

    /// Rating from tenths of a star, `0..=50`.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::RatingOutOfRange`] above 50 tenths.
    pub fn from_tenths(tenths: u8) -> Result<Self, ProductError> {
        Rating::new(Decimal::new(i64::from(tenths), 1))
    }

    /// Round to `dp` decimal places. Stays within range.
    #[must_use]
    pub fn round_dp(self, dp: u32) -> Self {
        Rating(self.0.round_dp(dp).normalize())
    }

    /// The rating value.
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price
    pub price: Price,

    /// Product category
    pub category: Category,

    /// Display asset reference
    pub image: String,

    /// Product description
    pub description: String,

    /// Customer rating
    pub rating: Rating,
}
