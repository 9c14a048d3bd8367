use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::invoice::Invoice;

/// One row of the external append-only invoice history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub issued_at: DateTime<Utc>,
    pub invoice_number: String,
    pub customer_name: String,
    /// Product/quantity summary, e.g. `Lip Balm x2; Face Wash x1`.
    pub items_summary: String,
    /// Display-rounded grand total.
    pub grand_total: Decimal,
    /// Where the rendered document landed, when the host produced one.
    pub document_path: Option<PathBuf>,
}

impl InvoiceRecord {
    pub fn from_invoice(invoice: &Invoice, document_path: Option<PathBuf>) -> Self {
        let items_summary = invoice
            .lines()
            .iter()
            .map(|line| format!("{} x{}", line.product_name, line.quantity))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            issued_at: invoice.issued_at(),
            invoice_number: invoice.number().to_string(),
            customer_name: invoice.customer().name.clone(),
            items_summary,
            grand_total: invoice.grand_total_display(),
            document_path,
        }
    }
}

/// Append-only sink for invoice history.
///
/// Implemented by the hosting application (typically a CSV or database
/// appender); this core only defines the seam.
pub trait InvoiceLog {
    type Error;

    fn append(&mut self, record: &InvoiceRecord) -> Result<(), Self::Error>;
}
