//! CLI commands

use std::io;

use clap::{Args, Subcommand};
use knit_basket::{
    catalog::Catalog,
    checkout::ShippingDetails,
    products::{CategoryFilter, ProductId},
    receipt,
    routes::Route,
    session::Session,
};

mod actions;
mod errors;

pub(crate) use actions::CartAction;
pub(crate) use errors::CliError;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List catalog products
    List {
        /// Category to show, or `all`
        #[arg(long, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,
    },

    /// Show a single product
    Show {
        /// Product id
        id: ProductId,
    },

    /// Apply cart actions and print the cart
    Cart {
        /// Actions: add:<id>, remove:<id>, update:<id>:<delta>, clear
        actions: Vec<CartAction>,
    },

    /// Fill a cart, then place the order
    Checkout(CheckoutArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Actions applied before checking out
    actions: Vec<CartAction>,

    #[command(flatten)]
    shipping: ShippingArgs,
}

#[derive(Debug, Args)]
struct ShippingArgs {
    /// First name
    #[arg(long)]
    first_name: String,

    /// Last name
    #[arg(long)]
    last_name: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// Street address
    #[arg(long)]
    address: String,

    /// City
    #[arg(long)]
    city: String,

    /// Six digit postal code
    #[arg(long)]
    pincode: String,
}

impl From<ShippingArgs> for ShippingDetails {
    fn from(args: ShippingArgs) -> Self {
        ShippingDetails {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            address: args.address,
            city: args.city,
            pincode: args.pincode,
        }
    }
}

impl Command {
    /// Run the command against a catalog, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if a lookup, cart action or checkout fails, or if the
    /// output cannot be written.
    pub(crate) fn run(self, catalog: &Catalog, mut out: impl io::Write) -> Result<(), CliError> {
        let mut session = Session::new(catalog);

        match self {
            Command::List { category } => {
                session.go(Route::Shop);
                session.set_filter(category);

                receipt::write_catalog(&mut out, catalog.filter_by_category(session.filter()))?;
            }
            Command::Show { id } => {
                session.navigate(&Route::Product(id).path())?;

                receipt::write_product(&mut out, catalog.find_by_id(id)?)?;
            }
            Command::Cart { actions } => {
                apply_all(&mut session, actions)?;
                session.navigate("/cart")?;

                receipt::write_cart(&mut out, session.cart())?;
            }
            Command::Checkout(CheckoutArgs { actions, shipping }) => {
                apply_all(&mut session, actions)?;
                session.navigate("/checkout")?;

                let confirmation = session.checkout(shipping.into())?;

                receipt::write_confirmation(&mut out, confirmation)?;
            }
        }

        Ok(())
    }
}

fn apply_all(session: &mut Session<'_>, actions: Vec<CartAction>) -> Result<(), CliError> {
    for action in actions {
        action.apply(session.cart_mut())?;
    }

    Ok(())
}
