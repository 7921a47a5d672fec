//! Knit Basket prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartEngine, CartError, CartLine, LineItem, QuantityUpdate},
    catalog::{Catalog, CatalogError},
    checkout::{
        Checkout, CheckoutError, OrderConfirmation, OrderSummary, ShippingDetails, ShippingError,
        ShippingField,
    },
    prices::Price,
    products::{Category, CategoryFilter, Product, ProductError, ProductId, Rating},
    receipt::ReceiptError,
    routes::{Route, RouteError},
    session::{Session, View},
};
