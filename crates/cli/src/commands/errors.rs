//! CLI errors

use knit_basket::{
    cart::CartError, catalog::CatalogError, checkout::CheckoutError, receipt::ReceiptError,
    routes::RouteError,
};
use thiserror::Error;

/// Errors raised while running a command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog could not be loaded or a product lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A cart action was rejected.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The order could not be placed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Navigation failed.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Output could not be written.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}
