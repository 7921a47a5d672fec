//! Knit Basket
//!
//! Storefront core for a small hand-made crochet shop: a read-only product
//! catalog, an in-memory cart engine, checkout, and the view routing table a
//! presentation layer dispatches on.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod routes;
pub mod session;
