//! Invoice computation error model.
//!
//! Every failure is a deterministic user-input error surfaced synchronously
//! to the caller; nothing here is retried or silently defaulted, and no
//! partial invoice is ever produced.

use billcraft_catalog::CatalogError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the invoicing layer.
pub type InvoiceResult<T> = Result<T, InvoiceError>;

/// Invoice computation failure.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// The order carries no lines.
    #[error("order has no lines")]
    EmptyOrder,

    /// Required customer fields are missing or blank.
    #[error("invalid order: {0}")]
    InvalidOrder(String),

    /// A line quantity is not a positive integer.
    #[error("invalid quantity {quantity} for \"{product_name}\"")]
    InvalidQuantity { product_name: String, quantity: f64 },

    /// The configured tax rate is outside [0, 1].
    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidTaxRate(Decimal),

    /// An order line failed to resolve against the catalog.
    #[error("could not resolve order line for \"{product_name}\"")]
    LineResolution {
        product_name: String,
        #[source]
        source: CatalogError,
    },
}

impl InvoiceError {
    pub fn invalid_order(msg: impl Into<String>) -> Self {
        Self::InvalidOrder(msg.into())
    }
}
