use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use billcraft_core::money;

use crate::order::CustomerInfo;

/// Invoice identifier, derived from the issue timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// `INV-YYYYMMDDHHMMSS` from the supplied timestamp. Uniqueness under
    /// concurrent generation is a non-goal; the numbering scheme is carried
    /// over from the source system.
    pub fn from_issued_at(issued_at: DateTime<Utc>) -> Self {
        Self(format!("INV-{}", issued_at.format("%Y%m%d%H%M%S")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One priced line of an invoice, derived from an order line and its
/// catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub discount_percent: Option<Decimal>,
    pub discounted_unit_price: Option<Decimal>,
    pub quantity: i64,
    /// Exact extension (effective unit price × quantity); round with
    /// [`InvoiceLine::line_total_display`].
    pub line_total: Decimal,
}

impl InvoiceLine {
    /// Unit price the extension was computed from.
    pub fn effective_unit_price(&self) -> Decimal {
        self.discounted_unit_price.unwrap_or(self.unit_price)
    }

    pub fn line_total_display(&self) -> Decimal {
        money::round_display(self.line_total)
    }
}

/// One named share of the tax amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComponent {
    pub label: String,
    pub amount: Decimal,
}

/// Tax amount as carried on the invoice: a single combined line, or two
/// equal named halves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxBreakdown {
    Single { amount: Decimal },
    Split { components: [TaxComponent; 2] },
}

impl TaxBreakdown {
    /// The full tax amount regardless of presentation.
    pub fn total(&self) -> Decimal {
        match self {
            TaxBreakdown::Single { amount } => *amount,
            TaxBreakdown::Split { components } => components[0].amount + components[1].amount,
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, TaxBreakdown::Split { .. })
    }
}

/// The fully computed, immutable result of pricing an order.
///
/// All amounts are exact decimals; display rounding happens once, in the
/// `*_display` accessors. Never mutated after creation; it is handed to
/// the external renderer/sink as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    number: InvoiceNumber,
    customer: CustomerInfo,
    lines: Vec<InvoiceLine>,
    subtotal: Decimal,
    tax_rate: Decimal,
    tax: TaxBreakdown,
    grand_total: Decimal,
    issued_at: DateTime<Utc>,
}

impl Invoice {
    pub(crate) fn new(
        customer: CustomerInfo,
        lines: Vec<InvoiceLine>,
        subtotal: Decimal,
        tax_rate: Decimal,
        tax: TaxBreakdown,
        grand_total: Decimal,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            number: InvoiceNumber::from_issued_at(issued_at),
            customer,
            lines,
            subtotal,
            tax_rate,
            tax,
            grand_total,
            issued_at,
        }
    }

    pub fn number(&self) -> &InvoiceNumber {
        &self.number
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Exact sum of line totals (no per-line rounding).
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn tax(&self) -> &TaxBreakdown {
        &self.tax
    }

    /// Exact subtotal + tax.
    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn subtotal_display(&self) -> Decimal {
        money::round_display(self.subtotal)
    }

    pub fn tax_total_display(&self) -> Decimal {
        money::round_display(self.tax.total())
    }

    pub fn grand_total_display(&self) -> Decimal {
        money::round_display(self.grand_total)
    }
}
