//! `billcraft-catalog` — read-only product catalog and lookup.
//!
//! The catalog is loaded once at process start from a tabular source and
//! never mutated afterwards, so it is safe to share across concurrent form
//! sessions without locking.

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CatalogError};
pub use product::Product;
