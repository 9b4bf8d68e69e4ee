//! "Projections": the month-by-month run, followed by progress summaries.
use payoff_core::calculations::{ProjectionConfig, ProjectionSummary};
use payoff_core::{FinancialModel, MonthlySnapshot};
use rust_decimal::Decimal;
use rust_xlsxwriter::Format;

use super::cursor::SheetCursor;
use super::formats::WorkbookFormats;
use crate::RenderError;

pub(crate) const SHEET_NAME: &str = "Projections";

const HEADERS: [&str; 15] = [
    "#",
    "Month",
    "Income",
    "Bills",
    "Debt Mins",
    "BNPL",
    "Living",
    "Extra Debt $",
    "Savings $",
    "Credit Cards",
    "Auto Loans",
    "Student Loans",
    "BNPL Bal",
    "Total Debt",
    "Emergency Fund",
];

pub(crate) fn write(
    cursor: &mut SheetCursor<'_>,
    model: &FinancialModel,
) -> Result<(), RenderError> {
    let mut widths = [14.0; HEADERS.len()];
    widths[0] = 5.0;
    widths[1] = 10.0;
    cursor.column_widths(&widths)?;

    cursor.title(&title(&model.projection), (HEADERS.len() - 1) as u16)?;
    cursor.headers(&HEADERS)?;
    let header_row = cursor.row();
    cursor.sheet().set_freeze_panes(header_row, 2)?;

    for snapshot in &model.snapshots {
        write_month(cursor, snapshot)?;
    }
    cursor.next_row();

    if let Some(first_year) = &model.first_year {
        write_summary(cursor, "END OF YEAR 1 SUMMARY", first_year)?;
    }
    if let Some(final_month) = &model.final_month {
        let already_shown = model
            .first_year
            .as_ref()
            .is_some_and(|s| s.month_index == final_month.month_index);
        if !already_shown {
            cursor.next_row();
            write_summary(cursor, "END OF PROJECTION SUMMARY", final_month)?;
        }
    }

    Ok(())
}

fn title(config: &ProjectionConfig) -> String {
    let debt = (config.allocation.debt_share * Decimal::ONE_HUNDRED).normalize();
    let savings = (Decimal::ONE_HUNDRED - debt).normalize();
    format!(
        "{}-MONTH PROJECTION - Debt Avalanche with {debt}/{savings} Split",
        config.horizon_months
    )
}

fn write_month(
    cursor: &mut SheetCursor<'_>,
    s: &MonthlySnapshot,
) -> Result<(), RenderError> {
    let formats = cursor.formats;

    cursor.number(0, Decimal::from(s.month_index), &formats.integer)?;
    cursor.text(1, &s.calendar_label, &formats.text)?;
    let amounts = [
        (s.income, &formats.money),
        (s.bills, &formats.money),
        (s.debt_minimums, &formats.money),
        (s.bnpl_payment, &formats.money),
        (s.living_expenses, &formats.money),
        (s.extra_toward_debt, &formats.money),
        (s.extra_toward_savings, &formats.money),
        (s.credit_card_balance, balance_format(formats, s.credit_card_balance)),
        (s.auto_loan_balance, balance_format(formats, s.auto_loan_balance)),
        (s.student_loan_balance, balance_format(formats, s.student_loan_balance)),
        (s.bnpl_balance, balance_format(formats, s.bnpl_balance)),
        (s.total_debt, &formats.money_bold),
        (s.emergency_fund_balance, &formats.money),
    ];
    for (col, (amount, format)) in (2u16..).zip(amounts) {
        cursor.number(col, amount, format)?;
    }
    cursor.next_row();
    Ok(())
}

/// Paid-off balances show in green.
fn balance_format(
    formats: &WorkbookFormats,
    balance: Decimal,
) -> &Format {
    if balance.is_zero() {
        &formats.money_green
    } else {
        &formats.money
    }
}

fn write_summary(
    cursor: &mut SheetCursor<'_>,
    heading: &str,
    summary: &ProjectionSummary,
) -> Result<(), RenderError> {
    let formats = cursor.formats;
    cursor.section(heading)?;
    cursor.labelled_amount(
        &format!("Projected Total Debt ({})", summary.calendar_label),
        summary.total_debt,
        &formats.text,
        &formats.money_bold,
    )?;
    cursor.labelled_amount("Debt Paid Off", summary.debt_paid_off, &formats.text, &formats.money_green)?;
    cursor.labelled_amount("Emergency Fund", summary.emergency_fund, &formats.text, &formats.money)?;
    Ok(())
}
