//! Excel workbook renderer.
//!
//! | Sheet                 | Contents |
//! |-----------------------|----------|
//! | Snapshot              | income, debt by category, monthly cash flow, true surplus |
//! | Debt Detail           | every account in avalanche order |
//! | Every Dollar Budget   | one paycheck, fully assigned |
//! | Projections           | the month-by-month projection and progress summaries |
//! | Action Plan           | narrative steps |
//!
//! Money cells use `"$"#,##0.00` and rates `0.00%`. Red fills mark past-due
//! accounts, flagged budget lines and alert categories; green fills mark the
//! surplus figures and success rows of the action plan.

mod action_plan_sheet;
mod budget_sheet;
mod cursor;
mod debt_detail_sheet;
mod formats;
mod projection_sheet;
mod snapshot_sheet;

use std::path::Path;

use payoff_core::{FinancialModel, HIGH_PRIORITY_THRESHOLD};
use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::info;

use self::cursor::SheetCursor;
use self::formats::WorkbookFormats;
use crate::{RenderError, Renderer};

/// Sheet names in workbook order.
pub const SHEET_NAMES: [&str; 5] = [
    snapshot_sheet::SHEET_NAME,
    debt_detail_sheet::SHEET_NAME,
    budget_sheet::SHEET_NAME,
    projection_sheet::SHEET_NAME,
    action_plan_sheet::SHEET_NAME,
];

#[derive(Debug, Clone)]
pub struct WorkbookRenderer {
    /// Accounts with a priority at or below this get an orange name cell.
    pub high_priority_threshold: u32,
}

impl Default for WorkbookRenderer {
    fn default() -> Self {
        Self {
            high_priority_threshold: HIGH_PRIORITY_THRESHOLD,
        }
    }
}

impl WorkbookRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn high_priority_threshold(
        mut self,
        threshold: u32,
    ) -> Self {
        self.high_priority_threshold = threshold;
        self
    }

    /// Renders the workbook into memory.
    pub fn render_to_bytes(
        &self,
        model: &FinancialModel,
    ) -> Result<Vec<u8>, RenderError> {
        let mut workbook = self.build(model)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Renders the workbook and writes it to `path`.
    pub fn save(
        &self,
        model: &FinancialModel,
        path: &Path,
    ) -> Result<(), RenderError> {
        let mut workbook = self.build(model)?;
        workbook.save(path)?;
        info!(path = %path.display(), months = model.snapshots.len(), "workbook saved");
        Ok(())
    }

    fn build(
        &self,
        model: &FinancialModel,
    ) -> Result<Workbook, RenderError> {
        let formats = WorkbookFormats::new();
        let mut workbook = Workbook::new();

        let mut sheet = named_sheet(snapshot_sheet::SHEET_NAME)?;
        snapshot_sheet::write(&mut SheetCursor::new(&mut sheet, &formats), model.as_of, &model.cash_flow)?;
        workbook.push_worksheet(sheet);

        let mut sheet = named_sheet(debt_detail_sheet::SHEET_NAME)?;
        debt_detail_sheet::write(
            &mut SheetCursor::new(&mut sheet, &formats),
            &model.inventory,
            &model.cash_flow,
            self.high_priority_threshold,
        )?;
        workbook.push_worksheet(sheet);

        let mut sheet = named_sheet(budget_sheet::SHEET_NAME)?;
        budget_sheet::write(&mut SheetCursor::new(&mut sheet, &formats), &model.budget)?;
        workbook.push_worksheet(sheet);

        let mut sheet = named_sheet(projection_sheet::SHEET_NAME)?;
        projection_sheet::write(&mut SheetCursor::new(&mut sheet, &formats), model)?;
        workbook.push_worksheet(sheet);

        let mut sheet = named_sheet(action_plan_sheet::SHEET_NAME)?;
        action_plan_sheet::write(
            &mut SheetCursor::new(&mut sheet, &formats),
            &model.title,
            &model.action_plan,
        )?;
        workbook.push_worksheet(sheet);

        Ok(workbook)
    }
}

impl Renderer for WorkbookRenderer {
    type Output = Vec<u8>;

    fn render(
        &self,
        model: &FinancialModel,
    ) -> Result<Vec<u8>, RenderError> {
        self.render_to_bytes(model)
    }
}

fn named_sheet(name: &str) -> Result<Worksheet, RenderError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;
    Ok(sheet)
}
