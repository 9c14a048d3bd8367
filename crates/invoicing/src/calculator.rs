//! Invoice computation.
//!
//! A stateless, synchronous pricing pass: resolve every order line against
//! the catalog, extend it, accumulate exact totals, apply tax. Touches no
//! shared mutable state and performs no logging of its own, so it is safe
//! to invoke concurrently from multiple form sessions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use billcraft_catalog::Catalog;

use crate::config::{BillingConfig, TaxSplit};
use crate::error::InvoiceError;
use crate::invoice::{Invoice, InvoiceLine, TaxBreakdown, TaxComponent};
use crate::order::Order;

/// Price an order against the catalog, producing an immutable [`Invoice`].
///
/// All-or-nothing: a blank customer name, an empty order, a non-positive
/// quantity, an out-of-range tax rate, or a failed catalog lookup fails the
/// whole computation and no invoice value is produced.
///
/// `issued_at` is supplied by the caller rather than read from the clock,
/// so the result is fully deterministic for a given input. Line totals
/// accumulate unrounded; display rounding happens once, in the invoice's
/// `*_display` accessors.
pub fn compute_invoice(
    order: &Order,
    catalog: &Catalog,
    config: &BillingConfig,
    issued_at: DateTime<Utc>,
) -> Result<Invoice, InvoiceError> {
    order.validate()?;
    config.validate()?;

    let mut lines = Vec::with_capacity(order.lines.len());
    let mut subtotal = Decimal::ZERO;

    for line in &order.lines {
        let product =
            catalog
                .find_product(&line.product_name)
                .map_err(|source| InvoiceError::LineResolution {
                    product_name: line.product_name.clone(),
                    source,
                })?;

        let line_total = product.effective_unit_price() * Decimal::from(line.quantity);
        subtotal += line_total;

        lines.push(InvoiceLine {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            category: product.category.clone(),
            unit_price: product.unit_price,
            discount_percent: product.discount_percent,
            discounted_unit_price: product.discounted_price,
            quantity: line.quantity,
            line_total,
        });
    }

    let tax_amount = subtotal * config.tax_rate;
    let tax = match &config.tax_split {
        TaxSplit::None => TaxBreakdown::Single { amount: tax_amount },
        TaxSplit::Even { labels } => {
            let half = tax_amount / Decimal::TWO;
            TaxBreakdown::Split {
                components: [
                    TaxComponent {
                        label: labels[0].clone(),
                        amount: half,
                    },
                    TaxComponent {
                        label: labels[1].clone(),
                        amount: half,
                    },
                ],
            }
        }
    };
    let grand_total = subtotal + tax_amount;

    Ok(Invoice::new(
        order.customer.clone(),
        lines,
        subtotal,
        config.tax_rate,
        tax,
        grand_total,
        issued_at,
    ))
}
