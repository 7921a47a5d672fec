//! Routes
//!
//! The storefront's view routing table.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::products::{ProductError, ProductId};

/// Route parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// No view is mounted at this path.
    #[error("no route for {0}")]
    Unknown(String),

    /// The product segment is not a valid product id.
    #[error("invalid product id in {path}: {source}")]
    InvalidProductId {
        /// Requested path
        path: String,
        /// Why the id was rejected
        source: ProductError,
    },
}

/// A storefront view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Landing page with featured products
    #[default]
    Home,

    /// Full catalog with category filters
    Shop,

    /// A single product
    Product(ProductId),

    /// Cart contents
    Cart,

    /// Shipping details and order summary
    Checkout,

    /// About the store
    About,
}

impl Route {
    /// Parse a path such as `/product/3`.
    ///
    /// A single trailing slash is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unknown`] for unmounted paths and
    /// [`RouteError::InvalidProductId`] for bad product segments.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };

        match normalized {
            "" | "/" => Ok(Route::Home),
            "/shop" => Ok(Route::Shop),
            "/cart" => Ok(Route::Cart),
            "/checkout" => Ok(Route::Checkout),
            "/about" => Ok(Route::About),
            other => {
                let Some(segment) = other.strip_prefix("/product/") else {
                    return Err(RouteError::Unknown(path.to_string()));
                };

                if segment.contains('/') {
                    return Err(RouteError::Unknown(path.to_string()));
                }

                segment
                    .parse()
                    .map(Route::Product)
                    .map_err(|source| RouteError::InvalidProductId {
                        path: path.to_string(),
                        source,
                    })
            }
        }
    }

    /// Canonical path of the route.
    pub fn path(self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Shop => "/shop".to_string(),
            Route::Product(id) => format!("/product/{id}"),
            Route::Cart => "/cart".to_string(),
            Route::Checkout => "/checkout".to_string(),
            Route::About => "/about".to_string(),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_static_routes() -> TestResult {
        assert_eq!(Route::parse("/")?, Route::Home);
        assert_eq!(Route::parse("")?, Route::Home);
        assert_eq!(Route::parse("/shop")?, Route::Shop);
        assert_eq!(Route::parse("/cart/")?, Route::Cart);
        assert_eq!(Route::parse("/checkout")?, Route::Checkout);
        assert_eq!(Route::parse("/about")?, Route::About);

        Ok(())
    }

    #[test]
    fn parses_product_route() -> TestResult {
        assert_eq!(
            Route::parse("/product/3")?,
            Route::Product(ProductId::new(3)?)
        );

        Ok(())
    }

    #[test]
    fn bad_product_ids_are_rejected() {
        assert!(matches!(
            Route::parse("/product/abc"),
            Err(RouteError::InvalidProductId { .. })
        ));
        assert!(matches!(
            Route::parse("/product/0"),
            Err(RouteError::InvalidProductId {
                source: ProductError::InvalidId(0),
                ..
            })
        ));
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(
            Route::parse("/blog"),
            Err(RouteError::Unknown("/blog".to_string()))
        );
        assert_eq!(
            Route::parse("/product/1/reviews"),
            Err(RouteError::Unknown("/product/1/reviews".to_string()))
        );
        assert_eq!(
            Route::parse("/product/"),
            Err(RouteError::Unknown("/product/".to_string()))
        );
    }

    #[test]
    fn path_round_trips() -> TestResult {
        let routes = [
            Route::Home,
            Route::Shop,
            Route::Product(ProductId::new(6)?),
            Route::Cart,
            Route::Checkout,
            Route::About,
        ];

        for route in routes {
            assert_eq!(route.path().parse::<Route>()?, route);
        }

        Ok(())
    }
}
