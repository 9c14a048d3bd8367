use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InvoiceError;

/// How the computed tax amount is presented on the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxSplit {
    /// One combined tax line.
    None,
    /// Two equal named components (e.g. CGST/SGST). Cosmetic labelling of
    /// the same tax amount, not a distinct computation.
    Even { labels: [String; 2] },
}

impl TaxSplit {
    pub fn even(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::Even {
            labels: [first.into(), second.into()],
        }
    }
}

/// Pricing configuration supplied by the hosting application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Tax rate as a fraction in [0, 1].
    pub tax_rate: Decimal,
    pub tax_split: TaxSplit,
}

impl BillingConfig {
    /// Build a validated configuration.
    pub fn new(tax_rate: Decimal, tax_split: TaxSplit) -> Result<Self, InvoiceError> {
        let config = Self {
            tax_rate,
            tax_split,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject tax rates outside [0, 1].
    pub fn validate(&self) -> Result<(), InvoiceError> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(InvoiceError::InvalidTaxRate(self.tax_rate));
        }
        Ok(())
    }
}

impl Default for BillingConfig {
    /// 18% single-line tax, the rate the shipped form variants apply.
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(18, 2),
            tax_split: TaxSplit::None,
        }
    }
}
