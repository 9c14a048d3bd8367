use std::io;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::product::Product;

/// Catalog failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No row matches the requested product name exactly.
    #[error("product not found: {name}")]
    NotFound { name: String },

    /// The catalog source could not be read or a row failed to parse.
    #[error("failed to load catalog: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the tabular catalog source.
///
/// The discount columns are optional: older catalog exports carry only
/// `Price`, newer ones add `Discount` and `Disc Price` (also seen spelled
/// `Discounted Price`).
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Product ID")]
    id: String,
    #[serde(rename = "Product Name")]
    name: String,
    #[serde(rename = "Product Category")]
    category: String,
    #[serde(rename = "Price")]
    unit_price: Decimal,
    #[serde(rename = "Discount", default)]
    discount_percent: Option<Decimal>,
    #[serde(rename = "Disc Price", alias = "Discounted Price", default)]
    discounted_price: Option<Decimal>,
}

impl From<CatalogRow> for Product {
    fn from(row: CatalogRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            category: row.category,
            unit_price: row.unit_price,
            discount_percent: row.discount_percent,
            discounted_price: row.discounted_price,
        }
    }
}

/// Read-only product repository.
///
/// Loaded once at process start; queried thereafter. Lookup is exact-match
/// and case-sensitive, and duplicate names resolve to the first row in
/// source order. Both behaviors are preserved from the source system
/// rather than "improved" here.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-materialized products, preserving order.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a CSV source with headers
    /// `Product ID, Product Name, Product Category, Price[, Discount, Disc Price]`.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut products = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            products.push(Product::from(row?));
        }
        tracing::info!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// Load a catalog from a CSV file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::Reader::from_path(path.as_ref())?;
        let mut products = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            products.push(Product::from(row?));
        }
        tracing::info!(
            products = products.len(),
            path = %path.as_ref().display(),
            "catalog loaded"
        );
        Ok(Self { products })
    }

    /// Resolve a product by name: exact equality, case-sensitive, first
    /// matching row wins.
    pub fn find_product(&self, name: &str) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|product| product.name == name)
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const FULL_SCHEMA: &str = "\
Product ID,Product Name,Product Category,Price,Discount,Disc Price
BL-001,Lip Balm,Skin Care,100.00,10,90.00
BL-002,Face Wash,Skin Care,150.00,20,120.00
BL-003,Sunscreen SPF50,Sun Care,450.00,0,450.00
";

    const PRICE_ONLY_SCHEMA: &str = "\
Product ID,Product Name,Product Category,Price
BL-001,Lip Balm,Skin Care,100.00
BL-002,Face Wash,Skin Care,150.00
";

    #[test]
    fn loads_full_schema() {
        let catalog = Catalog::from_csv_reader(FULL_SCHEMA.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        let product = catalog.find_product("Lip Balm").unwrap();
        assert_eq!(product.id, "BL-001");
        assert_eq!(product.category, "Skin Care");
        assert_eq!(product.unit_price, dec!(100.00));
        assert_eq!(product.discount_percent, Some(dec!(10)));
        assert_eq!(product.discounted_price, Some(dec!(90.00)));
    }

    #[test]
    fn tolerates_missing_discount_columns() {
        let catalog = Catalog::from_csv_reader(PRICE_ONLY_SCHEMA.as_bytes()).unwrap();
        let product = catalog.find_product("Face Wash").unwrap();
        assert_eq!(product.discount_percent, None);
        assert_eq!(product.discounted_price, None);
        assert_eq!(product.effective_unit_price(), dec!(150.00));
    }

    #[test]
    fn accepts_discounted_price_column_spelling() {
        let csv = "\
Product ID,Product Name,Product Category,Price,Discount,Discounted Price
BL-001,Lip Balm,Skin Care,100.00,10,90.00
";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        let product = catalog.find_product("Lip Balm").unwrap();
        assert_eq!(product.discounted_price, Some(dec!(90.00)));
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let catalog = Catalog::from_csv_reader(FULL_SCHEMA.as_bytes()).unwrap();

        assert!(catalog.find_product("Lip Balm").is_ok());
        for miss in ["lip balm", "Lip", "Lip Balm ", "LIP BALM"] {
            let err = catalog.find_product(miss).unwrap_err();
            match err {
                CatalogError::NotFound { name } => assert_eq!(name, miss),
                other => panic!("expected NotFound, got {other:?}"),
            }
        }
    }

    #[test]
    fn duplicate_names_resolve_to_first_row() {
        let csv = "\
Product ID,Product Name,Product Category,Price,Discount,Disc Price
BL-001,Lip Balm,Skin Care,100.00,10,90.00
BL-009,Lip Balm,Skin Care,80.00,0,80.00
";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        let product = catalog.find_product("Lip Balm").unwrap();
        assert_eq!(product.id, "BL-001");
        assert_eq!(product.effective_unit_price(), dec!(90.00));
    }

    #[test]
    fn out_of_range_discounts_are_accepted_as_is() {
        let csv = "\
Product ID,Product Name,Product Category,Price,Discount,Disc Price
BL-010,Mystery Cream,Skin Care,100.00,150,250.00
";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        let product = catalog.find_product("Mystery Cream").unwrap();
        assert_eq!(product.discount_percent, Some(dec!(150)));
        assert_eq!(product.effective_unit_price(), dec!(250.00));
    }

    #[test]
    fn malformed_price_is_a_load_error() {
        let csv = "\
Product ID,Product Name,Product Category,Price
BL-001,Lip Balm,Skin Care,not-a-price
";
        let err = Catalog::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Csv(_)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Lookup always returns the first row carrying the queried
            /// name, regardless of how many duplicates follow it.
            #[test]
            fn find_returns_first_match(dup_count in 1usize..5, price_cents in 1i64..100_000) {
                let mut products = vec![Product {
                    id: "P-0".to_string(),
                    name: "Target".to_string(),
                    category: "Misc".to_string(),
                    unit_price: Decimal::new(price_cents, 2),
                    discount_percent: None,
                    discounted_price: None,
                }];
                for n in 1..=dup_count {
                    products.push(Product {
                        id: format!("P-{n}"),
                        name: "Target".to_string(),
                        category: "Misc".to_string(),
                        unit_price: Decimal::new(price_cents + n as i64, 2),
                        discount_percent: None,
                        discounted_price: None,
                    });
                }

                let catalog = Catalog::from_products(products);
                let found = catalog.find_product("Target").unwrap();
                prop_assert_eq!(found.id.as_str(), "P-0");
            }
        }
    }
}
