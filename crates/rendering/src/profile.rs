use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Branding block printed at the top of a document variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letterhead {
    pub company_name: String,
    /// Registered address; may span multiple lines.
    pub address: String,
    #[serde(default)]
    pub gst_number: Option<String>,
    #[serde(default)]
    pub bank_details: Option<String>,
    #[serde(default)]
    pub footer_note: Option<String>,
}

/// Invoice line fields a document variant may display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineColumn {
    ProductId,
    ProductName,
    Category,
    Quantity,
    UnitPrice,
    DiscountPercent,
    DiscountedPrice,
    LineTotal,
}

impl LineColumn {
    pub fn header(&self) -> &'static str {
        match self {
            LineColumn::ProductId => "ID",
            LineColumn::ProductName => "Product",
            LineColumn::Category => "Category",
            LineColumn::Quantity => "Qty",
            LineColumn::UnitPrice => "Unit Price",
            LineColumn::DiscountPercent => "Discount",
            LineColumn::DiscountedPrice => "Disc Price",
            LineColumn::LineTotal => "Total",
        }
    }

    /// Numeric columns are right-aligned in tabular output.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            LineColumn::Quantity
                | LineColumn::UnitPrice
                | LineColumn::DiscountPercent
                | LineColumn::DiscountedPrice
                | LineColumn::LineTotal
        )
    }
}

/// How the totals block presents tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxPresentation {
    /// One combined tax line.
    Single,
    /// Two named component lines (e.g. CGST/SGST).
    Split,
}

/// One document variant: letterhead, column set, tax presentation.
///
/// The source system shipped a full template copy per cosmetic variant;
/// the same differences are expressed here as data driving one renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProfile {
    pub letterhead: Letterhead,
    pub columns: Vec<LineColumn>,
    pub tax_presentation: TaxPresentation,
}

impl DocumentProfile {
    /// A profile must name at least one line column.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.columns.is_empty() {
            return Err(RenderError::EmptyColumns);
        }
        Ok(())
    }
}

/// Rendering failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("document profile has no columns")]
    EmptyColumns,

    /// The invoice's tax breakdown does not match the profile. The split
    /// is decided at computation time; the renderer never re-derives
    /// halves or collapses them.
    #[error("profile expects {expected:?} tax presentation but invoice carries {actual:?}")]
    TaxShapeMismatch {
        expected: TaxPresentation,
        actual: TaxPresentation,
    },
}
