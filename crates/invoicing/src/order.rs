use serde::{Deserialize, Serialize};

use crate::error::InvoiceError;

/// Customer details captured by the order form.
///
/// Only the name is required; the optional fields exist on some form
/// variants and not others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    #[serde(default)]
    pub gst_number: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl CustomerInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gst_number: None,
            contact: None,
            address: None,
        }
    }
}

/// One requested product/quantity pairing, pre-computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Catalog lookup key.
    pub product_name: String,
    pub quantity: i64,
}

/// A customer's requested set of products and quantities.
///
/// Line order is display order only; totals do not depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer: CustomerInfo,
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(customer: CustomerInfo, lines: Vec<OrderLine>) -> Self {
        Self { customer, lines }
    }

    /// Check the intake invariants: non-blank customer name, at least one
    /// line, every quantity >= 1.
    pub fn validate(&self) -> Result<(), InvoiceError> {
        if self.customer.name.trim().is_empty() {
            return Err(InvoiceError::invalid_order(
                "customer name must not be empty",
            ));
        }
        if self.lines.is_empty() {
            return Err(InvoiceError::EmptyOrder);
        }
        for line in &self.lines {
            if line.quantity < 1 {
                return Err(InvoiceError::InvalidQuantity {
                    product_name: line.product_name.clone(),
                    quantity: line.quantity as f64,
                });
            }
        }
        Ok(())
    }
}

/// Raw order payload as submitted by the external form, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    pub customer: CustomerInfo,
    pub lines: Vec<OrderLineRequest>,
}

/// Raw order line; form number widgets submit quantities as floats.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineRequest {
    pub product_name: String,
    pub quantity: f64,
}

impl OrderRequest {
    /// Re-validate the raw payload into an [`Order`].
    ///
    /// Quantities must be positive integers; fractional, zero, negative and
    /// non-finite values are rejected with
    /// [`InvoiceError::InvalidQuantity`].
    pub fn try_into_order(self) -> Result<Order, InvoiceError> {
        let mut lines = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            if !line.quantity.is_finite() || line.quantity.fract() != 0.0 || line.quantity < 1.0 {
                return Err(InvoiceError::InvalidQuantity {
                    product_name: line.product_name,
                    quantity: line.quantity,
                });
            }
            lines.push(OrderLine {
                product_name: line.product_name,
                quantity: line.quantity as i64,
            });
        }

        let order = Order::new(self.customer, lines);
        order.validate()?;
        Ok(order)
    }
}
