//! "Every Dollar Budget": one biweekly paycheck, fully assigned.
use payoff_core::calculations::{BudgetLineResult, PaycheckBudgetResult};
use rust_decimal::Decimal;

use super::cursor::SheetCursor;
use crate::RenderError;

pub(crate) const SHEET_NAME: &str = "Every Dollar Budget";

pub(crate) fn write(
    cursor: &mut SheetCursor<'_>,
    budget: &PaycheckBudgetResult,
) -> Result<(), RenderError> {
    let formats = cursor.formats;
    cursor.column_widths(&[42.0, 16.0, 16.0, 44.0])?;

    cursor.title("BIWEEKLY PAY PERIOD BUDGET - Every Dollar Assigned", 3)?;
    cursor.text(
        0,
        &format!(
            "Amounts are for ONE pay period; monthly equivalents assume {} paychecks a month.",
            budget.paychecks_per_month.normalize()
        ),
        &formats.note,
    )?;
    cursor.skip_rows(2);

    cursor.section("INCOME")?;
    cursor.labelled_amount("Net Paycheck", budget.net_paycheck, &formats.text, &formats.input_money)?;
    cursor.next_row();

    cursor.section("ALLOCATIONS")?;
    cursor.headers(&["Expense", "Per Paycheck", "Monthly Equiv", "Notes"])?;
    write_lines(cursor, &budget.allocations)?;
    cursor.text(0, "Total Allocations", &formats.bold)?;
    cursor.number(1, budget.total_allocations, &formats.money_bold)?;
    cursor.skip_rows(2);

    cursor.text(
        0,
        &format!("BNPL PAYMENTS (avg ${}/mo)", budget.bnpl_monthly_average),
        &formats.bold,
    )?;
    cursor.number(1, budget.bnpl_per_paycheck, &formats.money)?;
    cursor.number(2, budget.bnpl_monthly_average, &formats.money)?;
    cursor.text(3, &budget.bnpl_note, &formats.note)?;
    cursor.skip_rows(2);

    cursor.section("LIVING EXPENSES")?;
    write_lines(cursor, &budget.living)?;
    cursor.text(0, "Total Living", &formats.bold)?;
    cursor.number(1, budget.total_living, &formats.money_bold)?;
    cursor.skip_rows(2);

    cursor.section("SUMMARY")?;
    cursor.labelled_amount("Net Paycheck", budget.net_paycheck, &formats.text, &formats.money)?;
    cursor.labelled_amount("(-) Allocations", budget.total_allocations, &formats.text, &formats.money)?;
    cursor.labelled_amount("(-) BNPL", budget.bnpl_per_paycheck, &formats.text, &formats.money)?;
    cursor.labelled_amount("(-) Living", budget.total_living, &formats.text, &formats.money)?;

    let (label_format, amount_format) = if budget.extra_per_paycheck < Decimal::ZERO {
        (&formats.alert_text, &formats.alert_money)
    } else {
        (&formats.success_text, &formats.success_money)
    };
    cursor.labelled_amount(
        "= EXTRA FOR DEBT ATTACK OR SAVINGS",
        budget.extra_per_paycheck,
        label_format,
        amount_format,
    )?;

    Ok(())
}

fn write_lines(
    cursor: &mut SheetCursor<'_>,
    lines: &[BudgetLineResult],
) -> Result<(), RenderError> {
    let formats = cursor.formats;
    for line in lines {
        let name_format = if line.flagged {
            &formats.alert_text
        } else {
            &formats.text
        };
        cursor.text(0, &line.name, name_format)?;
        cursor.number(1, line.per_paycheck, &formats.money)?;
        cursor.number(2, line.monthly_equivalent, &formats.money)?;
        cursor.text(3, &line.note, &formats.note)?;
        cursor.next_row();
    }
    Ok(())
}
