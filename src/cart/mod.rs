//! Cart
//!
//! The cart engine is the single source of truth for basket state. It borrows
//! the catalog to resolve products and owns the ordered list of cart lines.
//! Every mutation is synchronous; derived values (`cart_count`, `cart_total`)
//! are recomputed from the lines on each read.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{catalog::Catalog, prices::Price, pricing::total_price, products::ProductId};

mod line;

pub use line::{CartLine, LineItem};

/// Errors raised by cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product id does not resolve in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
}

/// Outcome of [`CartEngine::update_quantity`].
///
/// Updating a product with no line is a silent no-op reported as
/// [`QuantityUpdate::Missing`]; quantities that fall to zero or below remove
/// the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// Line kept with the new quantity.
    Updated(u32),

    /// Line removed because its quantity reached zero.
    Removed,

    /// No line for the product; cart unchanged.
    Missing,
}

/// Cart aggregate: ordered lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a product, if present.
    pub fn line(&self, product: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product)
    }

    /// Whether the product has a line.
    pub fn contains(&self, product: ProductId) -> bool {
        self.line(product).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities.
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    fn position(&self, product: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id() == product)
    }
}

/// Cart engine: one cart bound to the catalog it draws products from.
#[derive(Debug, Clone)]
pub struct CartEngine<'c> {
    catalog: &'c Catalog,
    cart: Cart,
}

impl<'c> CartEngine<'c> {
    /// Create an engine with an empty cart.
    pub fn new(catalog: &'c Catalog) -> Self {
        CartEngine {
            catalog,
            cart: Cart::new(),
        }
    }

    /// The catalog this engine resolves products against.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line or appends a new line with quantity 1,
    /// and returns a copy of the line as it now stands.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotFound`] if the id is not in the catalog.
    /// The cart is left untouched in that case.
    pub fn add_to_cart(&mut self, product: ProductId) -> Result<CartLine, CartError> {
        if self.catalog.get(product).is_none() {
            return Err(CartError::ProductNotFound(product));
        }

        let line = match self
            .cart
            .lines
            .iter_mut()
            .find(|line| line.product_id() == product)
        {
            Some(line) => {
                line.increment();
                *line
            }
            None => {
                let line = CartLine::new(product);
                self.cart.lines.push(line);
                line
            }
        };

        debug!(
            product = %product,
            quantity = line.quantity(),
            "added to cart"
        );

        Ok(line)
    }

    /// Remove a product's line. Absent products are a no-op.
    ///
    /// Returns the removed line, if there was one.
    pub fn remove_from_cart(&mut self, product: ProductId) -> Option<CartLine> {
        let position = self.cart.position(product)?;
        let removed = self.cart.lines.remove(position);

        debug!(product = %product, "removed from cart");

        Some(removed)
    }

    /// Adjust a line's quantity by `delta`.
    ///
    /// A resulting quantity of zero or below removes the line. A product with
    /// no line leaves the cart unchanged.
    pub fn update_quantity(&mut self, product: ProductId, delta: i64) -> QuantityUpdate {
        let Some(position) = self.cart.position(product) else {
            debug!(product = %product, delta, "quantity update for missing line ignored");

            return QuantityUpdate::Missing;
        };

        let adjusted = self
            .cart
            .lines
            .get_mut(position)
            .and_then(|line| line.adjust(delta));

        let outcome = match adjusted {
            Some(quantity) => QuantityUpdate::Updated(quantity),
            None => {
                self.cart.lines.remove(position);

                QuantityUpdate::Removed
            }
        };

        debug!(product = %product, delta, ?outcome, "updated cart quantity");

        outcome
    }

    /// Sum over lines of `price * quantity`.
    pub fn cart_total(&self) -> Price {
        total_price(
            self.line_items()
                .map(|item| (item.product.price, item.quantity)),
        )
    }

    /// Sum of all line quantities.
    pub fn cart_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Cart total as a money amount in the store currency.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.cart_total().to_money()
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        let cleared = self.cart.len();

        self.cart.lines.clear();

        debug!(lines = cleared, "cleared cart");
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The line for a product, if present.
    pub fn line(&self, product: ProductId) -> Option<&CartLine> {
        self.cart.line(product)
    }

    /// Lines joined with their catalog products, in insertion order.
    pub fn line_items(&self) -> impl Iterator<Item = LineItem<'c>> + '_ {
        let catalog = self.catalog;

        self.cart.lines.iter().filter_map(move |line| {
            catalog.get(line.product_id()).map(|product| LineItem {
                product,
                quantity: line.quantity(),
            })
        })
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn id(raw: i64) -> TestResult<ProductId> {
        Ok(ProductId::new(raw)?)
    }

    #[test]
    fn new_engine_is_empty() -> TestResult {
        let catalog = Catalog::builtin()?;
        let engine = CartEngine::new(&catalog);

        assert!(engine.is_empty());
        assert_eq!(engine.cart_count(), 0);
        assert_eq!(engine.cart_total(), Price::ZERO);

        Ok(())
    }

    #[test]
    fn repeated_adds_share_one_line() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        for _ in 0..5 {
            engine.add_to_cart(id(4)?)?;
        }

        assert_eq!(engine.lines().len(), 1);
        assert_eq!(engine.line(id(4)?).map(CartLine::quantity), Some(5));

        Ok(())
    }

    #[test]
    fn add_returns_the_updated_line() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(1)?)?;
        let line = engine.add_to_cart(id(1)?)?;

        assert_eq!(line.quantity(), 2);

        Ok(())
    }

    #[test]
    fn add_unknown_product_fails_without_mutation() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(1)?)?;
        let before = engine.cart().clone();

        let result = engine.add_to_cart(id(42)?);

        assert_eq!(result, Err(CartError::ProductNotFound(id(42)?)));
        assert_eq!(engine.cart(), &before);

        Ok(())
    }

    #[test]
    fn keychain_scenario() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);
        let keychain = id(3)?;

        engine.add_to_cart(keychain)?;
        engine.add_to_cart(keychain)?;

        assert_eq!(engine.cart_count(), 2);
        assert_eq!(engine.cart_total(), Price::new(498));

        assert_eq!(
            engine.update_quantity(keychain, -1),
            QuantityUpdate::Updated(1)
        );
        assert_eq!(engine.cart_count(), 1);
        assert_eq!(engine.cart_total(), Price::new(249));

        assert!(engine.remove_from_cart(keychain).is_some());
        assert!(engine.is_empty());
        assert_eq!(engine.cart_total(), Price::ZERO);

        Ok(())
    }

    #[test]
    fn distinct_products_keep_insertion_order() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(1)?)?;
        engine.add_to_cart(id(2)?)?;

        let order: Vec<u32> = engine
            .lines()
            .iter()
            .map(|line| line.product_id().get())
            .collect();

        assert_eq!(order, vec![1, 2]);
        assert_eq!(engine.cart_total(), Price::new(2198));

        Ok(())
    }

    #[test]
    fn re_adding_after_removal_appends_at_the_end() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(1)?)?;
        engine.add_to_cart(id(2)?)?;
        engine.remove_from_cart(id(1)?);
        engine.add_to_cart(id(1)?)?;

        let order: Vec<u32> = engine
            .lines()
            .iter()
            .map(|line| line.product_id().get())
            .collect();

        assert_eq!(order, vec![2, 1]);

        Ok(())
    }

    #[test]
    fn decrement_by_full_quantity_removes_line() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(5)?)?;
        engine.add_to_cart(id(5)?)?;
        engine.add_to_cart(id(5)?)?;

        assert_eq!(engine.update_quantity(id(5)?, -3), QuantityUpdate::Removed);
        assert!(!engine.cart().contains(id(5)?));

        Ok(())
    }

    #[test]
    fn decrement_past_zero_removes_line() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(5)?)?;

        assert_eq!(
            engine.update_quantity(id(5)?, -10),
            QuantityUpdate::Removed
        );
        assert!(engine.is_empty());

        Ok(())
    }

    #[test]
    fn update_missing_line_is_a_no_op() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(2)?)?;
        let before = engine.cart().clone();

        assert_eq!(engine.update_quantity(id(3)?, 1), QuantityUpdate::Missing);
        assert_eq!(engine.update_quantity(id(3)?, -1), QuantityUpdate::Missing);
        assert_eq!(engine.cart(), &before);

        Ok(())
    }

    #[test]
    fn zero_delta_keeps_line() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(2)?)?;

        assert_eq!(engine.update_quantity(id(2)?, 0), QuantityUpdate::Updated(1));

        Ok(())
    }

    #[test]
    fn remove_missing_is_a_no_op() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(2)?)?;
        let before = engine.cart().clone();

        assert_eq!(engine.remove_from_cart(id(6)?), None);
        assert_eq!(engine.cart(), &before);

        Ok(())
    }

    #[test]
    fn clear_resets_totals() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(1)?)?;
        engine.add_to_cart(id(6)?)?;
        engine.clear_cart();

        assert_eq!(engine.cart_total(), Price::ZERO);
        assert_eq!(engine.cart_count(), 0);
        assert!(engine.lines().is_empty());

        Ok(())
    }

    #[test]
    fn line_items_carry_line_totals() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(4)?)?;
        engine.update_quantity(id(4)?, 2);

        let items: Vec<LineItem<'_>> = engine.line_items().collect();

        assert_eq!(items.len(), 1);
        assert_eq!(
            items.first().map(LineItem::line_total),
            Some(Price::new(1497))
        );

        Ok(())
    }

    #[test]
    fn subtotal_is_in_rupees() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(1)?)?;

        assert_eq!(engine.subtotal(), Price::new(899).to_money());
        assert_eq!(engine.subtotal().currency().iso_alpha_code, "INR");

        Ok(())
    }
}
