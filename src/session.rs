//! Session
//!
//! The top-level owner of per-shopper state. A session borrows the catalog
//! and owns the cart engine, the current route, the shop filter and the
//! checkout, and hands them to whatever renders the views.

use tracing::debug;

use crate::{
    cart::CartEngine,
    catalog::Catalog,
    checkout::{Checkout, CheckoutError, OrderConfirmation, OrderSummary, ShippingDetails},
    products::{CategoryFilter, Product, ProductId},
    routes::{Route, RouteError},
};

/// Number of products featured on the home page.
pub const FEATURED_COUNT: usize = 4;

/// What the current route resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'s> {
    /// Featured products
    Home(&'s [Product]),

    /// Filtered catalog
    Shop {
        /// Active filter
        filter: CategoryFilter,
        /// Products admitted by the filter
        products: Vec<&'s Product>,
    },

    /// Product detail
    Product(&'s Product),

    /// Product detail for an id the catalog doesn't have
    ProductNotFound(ProductId),

    /// Cart contents (read them from [`Session::cart`])
    Cart,

    /// Checkout form with the order summary
    Checkout(OrderSummary),

    /// Order placed
    Confirmed(&'s OrderConfirmation),

    /// About page
    About,
}

/// One shopper's session.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    engine: CartEngine<'c>,
    route: Route,
    filter: CategoryFilter,
    checkout: Checkout,
}

impl<'c> Session<'c> {
    /// Start a session on the home page with an empty cart.
    pub fn new(catalog: &'c Catalog) -> Self {
        Session {
            engine: CartEngine::new(catalog),
            route: Route::Home,
            filter: CategoryFilter::All,
            checkout: Checkout::new(),
        }
    }

    /// The current route.
    pub fn route(&self) -> Route {
        self.route
    }

    /// The cart engine.
    pub fn cart(&self) -> &CartEngine<'c> {
        &self.engine
    }

    /// The cart engine, for mutation.
    pub fn cart_mut(&mut self) -> &mut CartEngine<'c> {
        &mut self.engine
    }

    /// The checkout state.
    pub fn checkout_state(&self) -> &Checkout {
        &self.checkout
    }

    /// Navigate to a path.
    ///
    /// Entering the checkout from another view starts a fresh checkout.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] if the path does not name a view. The current
    /// route is kept in that case.
    pub fn navigate(&mut self, path: &str) -> Result<Route, RouteError> {
        let route = Route::parse(path)?;

        self.go(route);

        Ok(route)
    }

    /// Navigate to a route.
    pub fn go(&mut self, route: Route) {
        if route == Route::Checkout && self.route != Route::Checkout {
            self.checkout = Checkout::new();
        }

        debug!(from = %self.route, to = %route, "navigate");

        self.route = route;
    }

    /// Set the shop page category filter.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// The shop page category filter.
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Submit the checkout form.
    ///
    /// # Errors
    ///
    /// See [`Checkout::submit`].
    pub fn checkout(
        &mut self,
        details: ShippingDetails,
    ) -> Result<&OrderConfirmation, CheckoutError> {
        self.checkout.submit(&mut self.engine, details)
    }

    /// Resolve the current route against the catalog and session state.
    pub fn view(&self) -> View<'_> {
        let catalog = self.engine.catalog();

        match self.route {
            Route::Home => View::Home(catalog.featured(FEATURED_COUNT)),
            Route::Shop => View::Shop {
                filter: self.filter,
                products: catalog.filter_by_category(self.filter),
            },
            Route::Product(id) => catalog
                .get(id)
                .map_or(View::ProductNotFound(id), View::Product),
            Route::Cart => View::Cart,
            Route::Checkout => match self.checkout.confirmation() {
                Some(confirmation) => View::Confirmed(confirmation),
                None => View::Checkout(OrderSummary::from_cart(&self.engine)),
            },
            Route::About => View::About,
        }
    }
}
