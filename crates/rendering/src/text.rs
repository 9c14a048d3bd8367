use rust_decimal::Decimal;

use billcraft_core::money;
use billcraft_invoicing::{Invoice, InvoiceLine, TaxBreakdown};

use crate::profile::{DocumentProfile, LineColumn, RenderError, TaxPresentation};

/// Renders a computed invoice into a document artifact.
pub trait InvoiceRenderer {
    fn render(&self, invoice: &Invoice, profile: &DocumentProfile) -> Result<String, RenderError>;
}

/// Plain-text reference renderer: letterhead, the configured line-item
/// table, totals block, footer. Richer formats (PDF) are produced by
/// external collaborators consuming the same profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

fn format_amount(value: Decimal) -> String {
    format!("{:.2}", money::round_display(value))
}

fn cell(line: &InvoiceLine, column: LineColumn) -> String {
    match column {
        LineColumn::ProductId => line.product_id.clone(),
        LineColumn::ProductName => line.product_name.clone(),
        LineColumn::Category => line.category.clone(),
        LineColumn::Quantity => line.quantity.to_string(),
        LineColumn::UnitPrice => format_amount(line.unit_price),
        LineColumn::DiscountPercent => match line.discount_percent {
            Some(percent) => format!("{}%", percent.normalize()),
            None => "-".to_string(),
        },
        LineColumn::DiscountedPrice => match line.discounted_unit_price {
            Some(price) => format_amount(price),
            None => "-".to_string(),
        },
        LineColumn::LineTotal => format_amount(line.line_total_display()),
    }
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn push_total(out: &mut String, label: &str, amount: Decimal) {
    out.push_str(&format!("{:>24} {:>12}\n", label, format_amount(amount)));
}

impl InvoiceRenderer for TextRenderer {
    fn render(&self, invoice: &Invoice, profile: &DocumentProfile) -> Result<String, RenderError> {
        profile.validate()?;

        let actual = if invoice.tax().is_split() {
            TaxPresentation::Split
        } else {
            TaxPresentation::Single
        };
        if actual != profile.tax_presentation {
            return Err(RenderError::TaxShapeMismatch {
                expected: profile.tax_presentation,
                actual,
            });
        }

        let mut out = String::new();

        out.push_str(&profile.letterhead.company_name);
        out.push('\n');
        for address_line in profile.letterhead.address.lines() {
            out.push_str(address_line);
            out.push('\n');
        }
        if let Some(gst) = &profile.letterhead.gst_number {
            out.push_str(&format!("GSTIN/UIN: {gst}\n"));
        }
        out.push_str("\nINVOICE\n\n");

        out.push_str(&format!("Invoice Number: {}\n", invoice.number()));
        out.push_str(&format!("Customer Name: {}\n", invoice.customer().name));
        if let Some(gst) = &invoice.customer().gst_number {
            out.push_str(&format!("GST: {gst}\n"));
        }
        if let Some(contact) = &invoice.customer().contact {
            out.push_str(&format!("Contact: {contact}\n"));
        }
        if let Some(address) = &invoice.customer().address {
            out.push_str(&format!("Address: {address}\n"));
        }
        out.push_str(&format!(
            "Date: {}\n\n",
            invoice.issued_at().format("%d-%m-%Y")
        ));

        let rows: Vec<Vec<String>> = invoice
            .lines()
            .iter()
            .map(|line| {
                profile
                    .columns
                    .iter()
                    .map(|column| cell(line, *column))
                    .collect()
            })
            .collect();
        let widths: Vec<usize> = profile
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                rows.iter()
                    .map(|row| row[index].len())
                    .chain([column.header().len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header = profile
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| pad(column.header(), *width, column.is_numeric()))
            .collect::<Vec<_>>()
            .join("  ");
        let header = header.trim_end();
        out.push_str(header);
        out.push('\n');
        out.push_str(&"-".repeat(header.len()));
        out.push('\n');
        for row in &rows {
            let rendered = profile
                .columns
                .iter()
                .zip(&widths)
                .zip(row)
                .map(|((column, width), value)| pad(value, *width, column.is_numeric()))
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(rendered.trim_end());
            out.push('\n');
        }
        out.push('\n');

        push_total(&mut out, "Subtotal", invoice.subtotal_display());
        match invoice.tax() {
            TaxBreakdown::Single { amount } => {
                let percent = (invoice.tax_rate() * Decimal::ONE_HUNDRED).normalize();
                push_total(&mut out, &format!("Tax ({percent}%)"), *amount);
            }
            TaxBreakdown::Split { components } => {
                for component in components {
                    push_total(&mut out, &component.label, component.amount);
                }
            }
        }
        push_total(&mut out, "Grand Total", invoice.grand_total());

        if profile.letterhead.bank_details.is_some() || profile.letterhead.footer_note.is_some() {
            out.push('\n');
        }
        if let Some(bank_details) = &profile.letterhead.bank_details {
            for bank_line in bank_details.lines() {
                out.push_str(bank_line);
                out.push('\n');
            }
        }
        if let Some(note) = &profile.letterhead.footer_note {
            out.push_str(note);
            out.push('\n');
        }

        tracing::debug!(invoice = %invoice.number(), "invoice rendered");
        Ok(out)
    }
}
