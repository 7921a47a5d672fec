//! Receipt
//!
//! Plain-text tables for the catalog, the cart and confirmed orders.

use std::{io, ops::Range};

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::CartEngine,
    checkout::{OrderConfirmation, OrderSummary},
    prices::Price,
    products::Product,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Writes a product listing table.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_catalog<'p>(
    mut out: impl io::Write,
    products: impl IntoIterator<Item = &'p Product>,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Category", "Price", "Rating"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.category.to_string(),
            product.price.to_string(),
            product.rating.to_string(),
        ]);
    }

    write_table(&mut out, builder, 3..5)
}

/// Writes the detail view of a single product.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_product(mut out: impl io::Write, product: &Product) -> Result<(), ReceiptError> {
    writeln!(out, "{} (#{})", product.name, product.id)?;
    writeln!(out, "{}  ·  {} / 5.0", product.category, product.rating)?;
    writeln!(out)?;
    writeln!(out, "{}", product.description)?;
    writeln!(out)?;
    writeln!(out, "{}", product.price)?;

    Ok(())
}

/// Writes the cart view: one row per line, then the item count and subtotal.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_cart(mut out: impl io::Write, engine: &CartEngine<'_>) -> Result<(), ReceiptError> {
    if engine.is_empty() {
        writeln!(out, "Your cart is empty")?;

        return Ok(());
    }

    write_summary_table(&mut out, &OrderSummary::from_cart(engine))?;

    write_summary_line(&mut out, "Items:", &engine.cart_count().to_string())?;
    write_summary_line(&mut out, "Subtotal:", &engine.cart_total().to_string())?;

    Ok(())
}

/// Writes an order confirmation.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_confirmation(
    mut out: impl io::Write,
    confirmation: &OrderConfirmation,
) -> Result<(), ReceiptError> {
    let summary = &confirmation.summary;
    let details = &confirmation.shipping;

    writeln!(out, "Order Confirmed!")?;

    write_summary_table(&mut out, summary)?;

    write_summary_line(&mut out, "Subtotal:", &summary.subtotal.to_string())?;
    let shipping = if summary.shipping == Price::ZERO {
        "Free".to_string()
    } else {
        summary.shipping.to_string()
    };

    write_summary_line(&mut out, "Shipping:", &shipping)?;
    write_summary_line(&mut out, "Total:", &summary.total.to_string())?;

    writeln!(out)?;
    writeln!(out, "Ships to {} {}", details.first_name, details.last_name)?;
    writeln!(out, "{}, {} {}", details.address, details.city, details.pincode)?;

    Ok(())
}

fn write_summary_table(
    out: &mut impl io::Write,
    summary: &OrderSummary,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Price", "Qty", "Total"]);

    for (idx, line) in summary.lines.iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            line.name.clone(),
            line.unit_price.to_string(),
            line.quantity.to_string(),
            line.line_total.to_string(),
        ]);
    }

    write_table(out, builder, 2..5)
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    numeric: Range<usize>,
) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Columns::new(numeric), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
) -> Result<(), ReceiptError> {
    writeln!(out, "{label:>12} {value:>14}")?;

    Ok(())
}
