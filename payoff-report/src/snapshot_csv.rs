//! CSV export of the monthly projection.
//!
//! One header row, then one row per month in projection order. Money columns
//! are rounded half-up to cents; the projection itself keeps full precision.
use std::io::Write;

use payoff_core::calculations::common::round_half_up;
use payoff_core::{FinancialModel, MonthlySnapshot};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::{RenderError, Renderer};

// ---------------------------------------------------------------------------
// Row layout
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct SnapshotRow<'a> {
    month: u32,
    calendar_month: &'a str,
    income: Decimal,
    bills: Decimal,
    debt_minimums: Decimal,
    bnpl_payment: Decimal,
    living_expenses: Decimal,
    extra_toward_debt: Decimal,
    extra_toward_savings: Decimal,
    credit_card_balance: Decimal,
    auto_loan_balance: Decimal,
    student_loan_balance: Decimal,
    bnpl_balance: Decimal,
    total_debt: Decimal,
    emergency_fund: Decimal,
}

impl<'a> From<&'a MonthlySnapshot> for SnapshotRow<'a> {
    fn from(s: &'a MonthlySnapshot) -> Self {
        Self {
            month: s.month_index,
            calendar_month: &s.calendar_label,
            income: round_half_up(s.income),
            bills: round_half_up(s.bills),
            debt_minimums: round_half_up(s.debt_minimums),
            bnpl_payment: round_half_up(s.bnpl_payment),
            living_expenses: round_half_up(s.living_expenses),
            extra_toward_debt: round_half_up(s.extra_toward_debt),
            extra_toward_savings: round_half_up(s.extra_toward_savings),
            credit_card_balance: round_half_up(s.credit_card_balance),
            auto_loan_balance: round_half_up(s.auto_loan_balance),
            student_loan_balance: round_half_up(s.student_loan_balance),
            bnpl_balance: round_half_up(s.bnpl_balance),
            total_debt: round_half_up(s.total_debt),
            emergency_fund: round_half_up(s.emergency_fund_balance),
        }
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotCsvWriter;

impl SnapshotCsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Streams `snapshots` as CSV into `writer`.
    pub fn write_to<W: Write>(
        &self,
        snapshots: &[MonthlySnapshot],
        writer: W,
    ) -> Result<(), RenderError> {
        let mut csv = csv::Writer::from_writer(writer);
        for snapshot in snapshots {
            csv.serialize(SnapshotRow::from(snapshot))?;
        }
        csv.flush()?;
        debug!(rows = snapshots.len(), "wrote projection CSV");
        Ok(())
    }
}

impl Renderer for SnapshotCsvWriter {
    type Output = String;

    fn render(
        &self,
        model: &FinancialModel,
    ) -> Result<String, RenderError> {
        let mut buffer = Vec::new();
        self.write_to(&model.snapshots, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| RenderError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
