//! `billcraft-invoicing` — pure invoice pricing.
//!
//! Business rules for turning a validated order into an immutable invoice:
//! line extension against the catalog, exact subtotal accumulation, tax and
//! optional even split, grand total. No IO, no HTTP, no storage: document
//! rendering and history persistence are external collaborators.

pub mod calculator;
pub mod config;
pub mod error;
pub mod invoice;
pub mod order;
pub mod record;

pub use calculator::compute_invoice;
pub use config::{BillingConfig, TaxSplit};
pub use error::{InvoiceError, InvoiceResult};
pub use invoice::{Invoice, InvoiceLine, InvoiceNumber, TaxBreakdown, TaxComponent};
pub use order::{CustomerInfo, Order, OrderLine, OrderLineRequest, OrderRequest};
pub use record::{InvoiceLog, InvoiceRecord};
