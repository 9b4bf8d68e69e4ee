//! "Debt Detail": every account in avalanche order.
//!
//! Past-due accounts are filled red across the row. Accounts at or above the
//! high-priority threshold get an orange name cell.
use payoff_core::DebtInventory;
use payoff_core::calculations::CashFlowSnapshot;
use rust_decimal::Decimal;

use super::cursor::SheetCursor;
use crate::RenderError;

pub(crate) const SHEET_NAME: &str = "Debt Detail";

const HEADERS: [&str; 7] = [
    "Account Name",
    "Balance",
    "APR %",
    "Min Payment",
    "Due Day",
    "Status",
    "Priority",
];

pub(crate) fn write(
    cursor: &mut SheetCursor<'_>,
    inventory: &DebtInventory,
    cash_flow: &CashFlowSnapshot,
    high_priority_threshold: u32,
) -> Result<(), RenderError> {
    let formats = cursor.formats;
    cursor.column_widths(&[36.0, 14.0, 10.0, 14.0, 10.0, 24.0, 10.0])?;

    cursor.title(
        "COMPLETE DEBT INVENTORY - Sorted by Interest Rate (Avalanche Method)",
        6,
    )?;
    cursor.headers(&HEADERS)?;

    for account in inventory.by_priority() {
        let past_due = account.is_past_due();
        let (text, money, percent, integer) = if past_due {
            (
                &formats.alert_text,
                &formats.alert_money,
                &formats.alert_percent,
                &formats.alert_integer,
            )
        } else {
            (&formats.text, &formats.money, &formats.percent, &formats.integer)
        };
        let name_format = if !past_due && account.is_high_priority(high_priority_threshold) {
            &formats.priority_text
        } else {
            text
        };

        cursor.text(0, &account.name, name_format)?;
        cursor.number(1, account.balance, money)?;
        cursor.number(2, account.apr, percent)?;
        cursor.number(3, account.minimum_payment, money)?;
        cursor.number(4, Decimal::from(account.due_day), integer)?;
        cursor.text(5, &account.status_label(), text)?;
        cursor.number(6, Decimal::from(account.priority), integer)?;
        cursor.next_row();
    }

    cursor.text(0, "TOTAL", &formats.bold)?;
    cursor.number(1, cash_flow.total_debt, &formats.money_bold)?;
    cursor.number(3, cash_flow.total_minimum_payments, &formats.money_bold)?;

    Ok(())
}
