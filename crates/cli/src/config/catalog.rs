//! Catalog Config

use std::path::PathBuf;

use clap::Args;
use knit_basket::catalog::{Catalog, CatalogError};

/// Catalog source settings.
#[derive(Debug, Args)]
pub(crate) struct CatalogConfig {
    /// YAML catalog file; the built-in catalog is used when omitted
    #[arg(long = "catalog", env = "KNIT_BASKET_CATALOG")]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Open the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be loaded.
    pub(crate) fn open(&self) -> Result<Catalog, CatalogError> {
        match &self.path {
            Some(path) => Catalog::load(path),
            None => Catalog::builtin(),
        }
    }
}
