//! Cart actions given on the command line

use std::{fmt, num::ParseIntError, str::FromStr};

use knit_basket::{
    cart::{CartEngine, CartError, QuantityUpdate},
    products::{ProductError, ProductId},
};
use thiserror::Error;
use tracing::warn;

/// Cart action parse errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ActionError {
    /// Verb is not one of `add`, `remove`, `update` or `clear`.
    #[error("unknown cart action {0:?}")]
    Unknown(String),

    /// The action needs a product id.
    #[error("missing product id in {0:?}")]
    MissingId(String),

    /// The product id did not parse.
    #[error("invalid product id in {action:?}: {source}")]
    InvalidId {
        /// Action as given
        action: String,
        /// Why the id was rejected
        source: ProductError,
    },

    /// `update` needs a delta.
    #[error("missing quantity delta in {0:?}")]
    MissingDelta(String),

    /// The delta did not parse.
    #[error("invalid quantity delta in {action:?}: {source}")]
    InvalidDelta {
        /// Action as given
        action: String,
        /// Why the delta was rejected
        source: ParseIntError,
    },

    /// Extra `:` segments after a complete action.
    #[error("unexpected trailing input in {0:?}")]
    Trailing(String),
}

/// A single cart mutation: `add:<id>`, `remove:<id>`, `update:<id>:<delta>`
/// or `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CartAction {
    Add(ProductId),
    Remove(ProductId),
    Update(ProductId, i64),
    Clear,
}

impl CartAction {
    /// Apply the action to a cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotFound`] when adding an unknown product.
    pub(crate) fn apply(self, engine: &mut CartEngine<'_>) -> Result<(), CartError> {
        match self {
            CartAction::Add(id) => {
                engine.add_to_cart(id)?;
            }
            CartAction::Remove(id) => {
                if engine.remove_from_cart(id).is_none() {
                    warn!(product = %id, "remove ignored, product not in cart");
                }
            }
            CartAction::Update(id, delta) => {
                if engine.update_quantity(id, delta) == QuantityUpdate::Missing {
                    warn!(product = %id, delta, "update ignored, product not in cart");
                }
            }
            CartAction::Clear => engine.clear_cart(),
        }

        Ok(())
    }
}

fn product_id(action: &str, segment: Option<&str>) -> Result<ProductId, ActionError> {
    let segment = segment
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ActionError::MissingId(action.to_string()))?;

    segment.parse().map_err(|source| ActionError::InvalidId {
        action: action.to_string(),
        source,
    })
}

impl FromStr for CartAction {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.trim().split(':');
        let verb = segments.next().unwrap_or_default().to_ascii_lowercase();

        let action = match verb.as_str() {
            "add" => CartAction::Add(product_id(s, segments.next())?),
            "remove" => CartAction::Remove(product_id(s, segments.next())?),
            "update" => {
                let id = product_id(s, segments.next())?;
                let delta = segments
                    .next()
                    .ok_or_else(|| ActionError::MissingDelta(s.to_string()))?
                    .parse()
                    .map_err(|source| ActionError::InvalidDelta {
                        action: s.to_string(),
                        source,
                    })?;

                CartAction::Update(id, delta)
            }
            "clear" => CartAction::Clear,
            _ => return Err(ActionError::Unknown(s.to_string())),
        };

        if segments.next().is_some() {
            return Err(ActionError::Trailing(s.to_string()));
        }

        Ok(action)
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartAction::Add(id) => write!(f, "add:{id}"),
            CartAction::Remove(id) => write!(f, "remove:{id}"),
            CartAction::Update(id, delta) => write!(f, "update:{id}:{delta}"),
            CartAction::Clear => f.write_str("clear"),
        }
    }
}
