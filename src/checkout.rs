//! Checkout
//!
//! Collects shipping details, summarises the order and, once the order is
//! submitted, sends the commit signal that empties the cart. The commit is
//! sent at most once per checkout.

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;
use tracing::info;

use crate::{cart::CartEngine, prices::Price, products::ProductId};

/// A shipping details field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingField {
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Email address
    Email,
    /// Street address
    Address,
    /// City
    City,
    /// Postal code
    Pincode,
}

impl fmt::Display for ShippingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShippingField::FirstName => "first name",
            ShippingField::LastName => "last name",
            ShippingField::Email => "email",
            ShippingField::Address => "address",
            ShippingField::City => "city",
            ShippingField::Pincode => "pincode",
        })
    }
}

/// Why a shipping field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShippingError {
    /// The field is blank.
    #[error("{0} is required")]
    Missing(ShippingField),

    /// The field is present but malformed.
    #[error("{0} is invalid")]
    Invalid(ShippingField),
}

/// Shipping details entered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingDetails {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Six digit postal code
    pub pincode: String,
}

impl ShippingDetails {
    /// Check every field, reporting all problems at once.
    ///
    /// # Errors
    ///
    /// Returns the list of rejected fields when any field is blank or malformed.
    pub fn validate(&self) -> Result<(), SmallVec<[ShippingError; 6]>> {
        let mut errors = SmallVec::new();

        let required = [
            (ShippingField::FirstName, &self.first_name),
            (ShippingField::LastName, &self.last_name),
            (ShippingField::Email, &self.email),
            (ShippingField::Address, &self.address),
            (ShippingField::City, &self.city),
            (ShippingField::Pincode, &self.pincode),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(ShippingError::Missing(field));
            }
        }

        if !self.email.trim().is_empty() && !is_valid_email(self.email.trim()) {
            errors.push(ShippingError::Invalid(ShippingField::Email));
        }

        if !self.pincode.trim().is_empty() && !is_valid_pincode(self.pincode.trim()) {
            errors.push(ShippingError::Invalid(ShippingField::Pincode));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

fn is_valid_pincode(pincode: &str) -> bool {
    pincode.len() == 6 && pincode.bytes().all(|byte| byte.is_ascii_digit())
}

/// One line of an order summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// Product id
    pub product: ProductId,
    /// Product name
    pub name: String,
    /// Unit price
    pub unit_price: Price,
    /// Quantity ordered
    pub quantity: u32,
    /// `unit_price * quantity`
    pub line_total: Price,
}

/// Order summary shown beside the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Lines in cart order
    pub lines: Vec<SummaryLine>,
    /// Sum of line totals
    pub subtotal: Price,
    /// Shipping charge; always zero, the store ships free
    pub shipping: Price,
    /// `subtotal + shipping`
    pub total: Price,
}

impl OrderSummary {
    /// Summarise the current cart. Shipping is free.
    pub fn from_cart(engine: &CartEngine<'_>) -> Self {
        let lines: Vec<SummaryLine> = engine
            .line_items()
            .map(|item| SummaryLine {
                product: item.product.id,
                name: item.product.name.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        let subtotal = engine.cart_total();
        let shipping = Price::ZERO;

        OrderSummary {
            lines,
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
        }
    }

    /// Total number of units ordered.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// A confirmed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// What was ordered
    pub summary: OrderSummary,
    /// Where it ships
    pub shipping: ShippingDetails,
}

/// Checkout errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// Shipping details were rejected.
    #[error("invalid shipping details: {}", join_errors(.0))]
    InvalidDetails(SmallVec<[ShippingError; 6]>),

    /// The order was already placed.
    #[error("order already confirmed")]
    AlreadyConfirmed,
}

fn join_errors(errors: &[ShippingError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checkout state: pending until an order is placed, then confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkout {
    confirmation: Option<OrderConfirmation>,
}

impl Checkout {
    /// Start a new checkout.
    pub fn new() -> Self {
        Checkout::default()
    }

    /// Submit the order.
    ///
    /// On success the confirmation is stored, the commit signal is sent to the
    /// cart engine (clearing it) and the confirmation is returned.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::AlreadyConfirmed`]: this checkout already committed.
    /// - [`CheckoutError::EmptyCart`]: there is nothing to order.
    /// - [`CheckoutError::InvalidDetails`]: shipping details were rejected.
    ///
    /// The cart is untouched on every error.
    pub fn submit(
        &mut self,
        engine: &mut CartEngine<'_>,
        details: ShippingDetails,
    ) -> Result<&OrderConfirmation, CheckoutError> {
        if self.is_confirmed() {
            return Err(CheckoutError::AlreadyConfirmed);
        }

        if engine.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        details.validate().map_err(CheckoutError::InvalidDetails)?;

        let summary = OrderSummary::from_cart(engine);

        info!(
            lines = summary.lines.len(),
            items = summary.item_count(),
            total = *summary.total,
            "order confirmed"
        );

        engine.clear_cart();

        let confirmation: &OrderConfirmation = self.confirmation.insert(OrderConfirmation {
            summary,
            shipping: details,
        });

        Ok(confirmation)
    }

    /// The confirmation, once the order is placed.
    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// Whether the order was placed.
    pub fn is_confirmed(&self) -> bool {
        self.confirmation.is_some()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::Catalog;

    use super::*;

    fn details() -> ShippingDetails {
        ShippingDetails {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.in".to_string(),
            address: "12 Lake Road".to_string(),
            city: "Pune".to_string(),
            pincode: "411001".to_string(),
        }
    }

    fn id(raw: i64) -> TestResult<ProductId> {
        Ok(ProductId::new(raw)?)
    }

    #[test]
    fn valid_details_pass() {
        assert_eq!(details().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_all_reported() {
        let result = ShippingDetails::default().validate();

        let errors = result.err().unwrap_or_default();

        assert_eq!(errors.len(), 6);
        assert!(errors.contains(&ShippingError::Missing(ShippingField::City)));
    }

    #[test]
    fn malformed_email_and_pincode_are_invalid() {
        let result = ShippingDetails {
            email: "asha.example.in".to_string(),
            pincode: "41100".to_string(),
            ..details()
        }
        .validate();

        let errors = result.err().unwrap_or_default();

        assert_eq!(
            errors.as_slice(),
            &[
                ShippingError::Invalid(ShippingField::Email),
                ShippingError::Invalid(ShippingField::Pincode)
            ]
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn summary_has_free_shipping() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);

        engine.add_to_cart(id(1)?)?;
        engine.add_to_cart(id(2)?)?;

        let summary = OrderSummary::from_cart(&engine);

        assert_eq!(summary.subtotal, Price::new(2198));
        assert_eq!(summary.shipping, Price::ZERO);
        assert_eq!(summary.total, Price::new(2198));
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.item_count(), 2);

        Ok(())
    }

    #[test]
    fn submit_clears_cart_and_confirms() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);
        let mut checkout = Checkout::new();

        engine.add_to_cart(id(3)?)?;
        engine.add_to_cart(id(3)?)?;

        let confirmation = checkout.submit(&mut engine, details())?.clone();

        assert_eq!(confirmation.summary.total, Price::new(498));
        assert_eq!(confirmation.shipping, details());
        assert!(engine.is_empty());
        assert!(checkout.is_confirmed());
        assert_eq!(checkout.confirmation(), Some(&confirmation));

        Ok(())
    }

    #[test]
    fn second_submit_does_not_touch_cart() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);
        let mut checkout = Checkout::new();

        engine.add_to_cart(id(3)?)?;
        checkout.submit(&mut engine, details())?;

        engine.add_to_cart(id(5)?)?;

        let result = checkout.submit(&mut engine, details()).err();

        assert_eq!(result, Some(CheckoutError::AlreadyConfirmed));
        assert_eq!(engine.cart_count(), 1);

        Ok(())
    }

    #[test]
    fn empty_cart_cannot_be_submitted() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);
        let mut checkout = Checkout::new();

        let result = checkout.submit(&mut engine, details()).err();

        assert_eq!(result, Some(CheckoutError::EmptyCart));
        assert!(!checkout.is_confirmed());

        Ok(())
    }

    #[test]
    fn invalid_details_keep_cart() -> TestResult {
        let catalog = Catalog::builtin()?;
        let mut engine = CartEngine::new(&catalog);
        let mut checkout = Checkout::new();

        engine.add_to_cart(id(6)?)?;

        let result = checkout
            .submit(
                &mut engine,
                ShippingDetails {
                    city: String::new(),
                    ..details()
                },
            )
            .err();

        assert!(matches!(result, Some(CheckoutError::InvalidDetails(_))));
        assert_eq!(engine.cart_count(), 1);
        assert_eq!(checkout, Checkout::new());
        assert_eq!(checkout.confirmation(), None);

        Ok(())
    }

    #[test]
    fn invalid_details_message_lists_fields() {
        let error = CheckoutError::InvalidDetails(
            [
                ShippingError::Missing(ShippingField::City),
                ShippingError::Invalid(ShippingField::Pincode),
            ]
            .into_iter()
            .collect(),
        );

        assert_eq!(
            error.to_string(),
            "invalid shipping details: city is required, pincode is invalid"
        );
    }
}
