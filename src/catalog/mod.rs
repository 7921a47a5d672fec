//! Catalog

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::info;

use crate::products::{Category, CategoryFilter, Product, ProductError, ProductId};

mod builtin;
pub mod records;

pub use records::{CatalogFile, ProductRecord, RecordError, SUPPORTED_VERSION};

/// Catalog Errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Catalog file version is not understood
    #[error("unsupported catalog version {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Version this build reads
        expected: u32,
    },

    /// A product record failed validation (record index, reason)
    #[error("invalid product record #{0}: {1}")]
    InvalidRecord(usize, RecordError),

    /// Two products share an id
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// Product lookup failed
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// A built-in product failed validation
    #[error("invalid built-in product: {0}")]
    Builtin(#[from] ProductError),
}

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: impl Into<Vec<Product>>) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Catalog { products, index })
    }

    /// The catalog compiled into the crate, checked like any loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Builtin`] if a built-in product is invalid and
    /// [`CatalogError::DuplicateId`] if two share an id.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::products()?)
    }

    /// Load a catalog from a YAML data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if its version is
    /// unsupported, or if any record fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&contents)?;

        info!(
            path = %path.display(),
            products = catalog.len(),
            "loaded catalog"
        );

        Ok(catalog)
    }

    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// See [`Catalog::load`].
    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_norway::from_str(contents)?;

        Self::try_from(file)
    }

    /// All products, in declaration order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id.
    pub fn find_by_id(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.get(id).ok_or(CatalogError::NotFound(id))
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|position| self.products.get(*position))
    }

    /// Products admitted by the filter, in declaration order.
    pub fn filter_by_category(&self, filter: impl Into<CategoryFilter>) -> Vec<&Product> {
        let filter = filter.into();

        self.products
            .iter()
            .filter(|product| filter.matches(product.category))
            .collect()
    }

    /// The first `n` products, as shown on the home page.
    pub fn featured(&self, n: usize) -> &[Product] {
        self.products
            .get(..n.min(self.products.len()))
            .unwrap_or_default()
    }

    /// Distinct categories present, in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::with_capacity(Category::ALL.len());

        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }

        categories
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        if file.version != SUPPORTED_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: file.version,
                expected: SUPPORTED_VERSION,
            });
        }

        let products = file
            .products
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                Product::try_from(record)
                    .map_err(|source| CatalogError::InvalidRecord(position, source))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Catalog::new(products)
    }
}
