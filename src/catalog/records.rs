//! Catalog data file records

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    prices::Price,
    products::{Product, ProductError, ProductId, Rating},
};

/// Catalog file format version this build reads.
pub const SUPPORTED_VERSION: u32 = 1;

/// Product record validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Wrapped product value error (id, category or rating).
    #[error(transparent)]
    Product(#[from] ProductError),

    /// Prices cannot be negative.
    #[error("price must not be negative, got {0}")]
    NegativePrice(i64),

    /// Rating was not a finite number.
    #[error("rating is not a finite number")]
    InvalidRating,

    /// Name is required.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
}

/// Top-level catalog file
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Format version
    pub version: u32,

    /// Products in declaration order
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// Product record, as written in the data file
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    /// Product id
    pub id: i64,

    /// Product name
    pub name: String,

    /// Price in whole rupees
    pub price: i64,

    /// Category name (e.g. `Bags`)
    pub category: String,

    /// Display asset reference
    #[serde(default)]
    pub image: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Customer rating, `0..=5`
    pub rating: f64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = RecordError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = ProductId::new(record.id)?;

        if record.name.trim().is_empty() {
            return Err(RecordError::EmptyName(id));
        }

        let price = u64::try_from(record.price)
            .map(Price::new)
            .map_err(|_err| RecordError::NegativePrice(record.price))?;

        let category = record.category.parse()?;

        let rating = Decimal::try_from(record.rating).map_err(|_err| RecordError::InvalidRating)?;
        let rating = Rating::new(rating)?.round_dp(2);

        Ok(Product {
            id,
            name: record.name,
            price,
            category,
            image: record.image,
            description: record.description,
            rating,
        })
    }
}
