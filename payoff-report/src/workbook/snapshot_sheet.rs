//! "Snapshot": where the household stands today.
//!
//! ```text
//! FINANCIAL SNAPSHOT - December 27, 2025
//!
//! CURRENT REALITY          cash, paycheck, monthly and annual income
//! TOTAL DEBT BREAKDOWN     one row per category, then TOTAL
//! MONTHLY CASH FLOW        income - fixed bills - minimums
//! ESTIMATED LIVING EXPENSES
//! TRUE MONTHLY SURPLUS FOR DEBT ATTACK
//! ```
use chrono::NaiveDate;
use payoff_core::calculations::CashFlowSnapshot;
use rust_decimal::Decimal;

use super::cursor::SheetCursor;
use crate::RenderError;

pub(crate) const SHEET_NAME: &str = "Snapshot";

pub(crate) fn write(
    cursor: &mut SheetCursor<'_>,
    as_of: NaiveDate,
    snapshot: &CashFlowSnapshot,
) -> Result<(), RenderError> {
    let formats = cursor.formats;
    cursor.column_widths(&[42.0, 16.0, 16.0, 40.0])?;

    cursor.title(&format!("FINANCIAL SNAPSHOT - {}", as_of.format("%B %-d, %Y")), 3)?;

    cursor.section("CURRENT REALITY")?;
    cursor.labelled_amount("Cash on Hand", snapshot.cash_on_hand, &formats.text, &formats.input_money)?;
    cursor.labelled_amount("Net Paycheck", snapshot.net_paycheck, &formats.text, &formats.input_money)?;
    cursor.labelled_amount(
        &format!("Monthly Income ({} paychecks / 12)", snapshot.paychecks_per_year),
        snapshot.monthly_income,
        &formats.text,
        &formats.money,
    )?;
    cursor.labelled_amount("Annual Income", snapshot.annual_income, &formats.text, &formats.money)?;
    cursor.next_row();

    cursor.section("TOTAL DEBT BREAKDOWN")?;
    cursor.headers(&["Debt Category", "Balance", "Min Monthly", "Notes"])?;
    for category in &snapshot.categories {
        let name_format = if category.alert {
            &formats.alert_text
        } else {
            &formats.text
        };
        cursor.text(0, &category.label, name_format)?;
        cursor.number(1, category.balance, &formats.money)?;
        cursor.number(2, category.minimum_payment, &formats.money)?;
        cursor.text(3, &category.note, &formats.note)?;
        cursor.next_row();
    }
    cursor.text(0, "TOTAL", &formats.bold)?;
    cursor.number(1, snapshot.total_debt, &formats.money_bold)?;
    cursor.number(2, snapshot.total_minimum_payments, &formats.money_bold)?;
    cursor.skip_rows(2);

    cursor.section("MONTHLY CASH FLOW")?;
    cursor.labelled_amount("Monthly Income", snapshot.monthly_income, &formats.text, &formats.money)?;
    cursor.labelled_amount("(-) Fixed Bills", snapshot.monthly_fixed_bills, &formats.text, &formats.money)?;
    cursor.labelled_amount(
        "(-) Minimum Debt Payments",
        snapshot.total_minimum_payments,
        &formats.text,
        &formats.money,
    )?;
    let available_format = if snapshot.available_after_obligations < Decimal::ZERO {
        &formats.alert_money
    } else {
        &formats.money_green
    };
    cursor.labelled_amount(
        "= Available for Living + Extra Debt",
        snapshot.available_after_obligations,
        &formats.bold,
        available_format,
    )?;
    cursor.next_row();

    cursor.section("ESTIMATED LIVING EXPENSES")?;
    for line in &snapshot.living_expenses {
        cursor.labelled_amount(&line.name, line.amount, &formats.text, &formats.money)?;
    }
    cursor.labelled_amount(
        "Total Living Expenses",
        snapshot.total_living_expenses,
        &formats.bold,
        &formats.money_bold,
    )?;
    cursor.next_row();

    let (label_format, amount_format) = if snapshot.true_monthly_surplus < Decimal::ZERO {
        (&formats.alert_text, &formats.alert_money)
    } else {
        (&formats.success_text, &formats.success_money)
    };
    cursor.labelled_amount(
        "TRUE MONTHLY SURPLUS FOR DEBT ATTACK",
        snapshot.true_monthly_surplus,
        label_format,
        amount_format,
    )?;

    Ok(())
}
