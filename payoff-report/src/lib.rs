//! Rendering a [`FinancialModel`] for people to read.
//!
//! | Renderer               | Output |
//! |------------------------|--------|
//! | [`WorkbookRenderer`]   | `.xlsx` workbook with the snapshot, debt detail, budget, projection and action plan sheets |
//! | [`SnapshotCsvWriter`]  | the month-by-month projection as CSV |

use payoff_core::FinancialModel;
use rust_decimal::Decimal;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

pub mod snapshot_csv;
pub mod workbook;

pub use snapshot_csv::SnapshotCsvWriter;
pub use workbook::WorkbookRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} cannot be written as a spreadsheet number")]
    NumberOutOfRange(Decimal),
}

/// Turns a computed model into some presentable output.
pub trait Renderer {
    type Output;

    fn render(
        &self,
        model: &FinancialModel,
    ) -> Result<Self::Output, RenderError>;
}
