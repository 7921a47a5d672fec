//! Cart lines

use crate::{
    prices::Price,
    products::{Product, ProductId},
};

/// One product's presence in the cart. Quantity is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    product_id: ProductId,
    quantity: u32,
}

impl CartLine {
    pub(super) fn new(product_id: ProductId) -> Self {
        CartLine {
            product_id,
            quantity: 1,
        }
    }

    /// Product this line refers to
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Quantity on this line
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(super) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Applies `delta` and returns the new quantity, or `None` if the line
    /// should be dropped.
    pub(super) fn adjust(&mut self, delta: i64) -> Option<u32> {
        let adjusted = i64::from(self.quantity).saturating_add(delta);

        if adjusted <= 0 {
            return None;
        }

        self.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);

        Some(self.quantity)
    }
}

/// A cart line joined with its catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem<'c> {
    /// Catalog product
    pub product: &'c Product,

    /// Quantity in the cart
    pub quantity: u32,
}

impl LineItem<'_> {
    /// `price * quantity` for this line.
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}
