use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchasable product, as loaded from the catalog source.
///
/// Attribute values are carried verbatim from the source table: a discount
/// percent outside [0, 100] or a discounted price above `unit_price` is
/// accepted as-is, matching the behavior of the catalog files this system
/// bills from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Lookup key; unique in well-formed catalogs (duplicates resolve to
    /// the first row in source order).
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    /// Percent on a 0–100 scale; `None` when the source schema has no
    /// discount column.
    pub discount_percent: Option<Decimal>,
    /// Pre-computed unit price after discount; `None` when the source
    /// schema has no discounted-price column.
    pub discounted_price: Option<Decimal>,
}

impl Product {
    /// Unit price used for line extension: the discounted price when the
    /// catalog carries one, otherwise the undiscounted price.
    pub fn effective_unit_price(&self) -> Decimal {
        self.discounted_price.unwrap_or(self.unit_price)
    }
}
