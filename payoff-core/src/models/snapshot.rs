use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// State of the household's debts and savings at the end of one projected month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// 1-based position in the projection.
    pub month_index: u32,
    /// Calendar month, e.g. "Jan 2026".
    pub calendar_label: String,

    // Cash flow for the month
    pub income: Decimal,
    pub bills: Decimal,
    pub debt_minimums: Decimal,
    pub bnpl_payment: Decimal,
    pub living_expenses: Decimal,
    pub extra_toward_debt: Decimal,
    pub extra_toward_savings: Decimal,

    // Balances after the month's payments
    pub credit_card_balance: Decimal,
    pub auto_loan_balance: Decimal,
    pub student_loan_balance: Decimal,
    pub bnpl_balance: Decimal,
    pub total_debt: Decimal,
    pub emergency_fund_balance: Decimal,
}

impl MonthlySnapshot {
    /// Income minus every fixed outflow, before the floor at zero.
    pub fn raw_surplus(&self) -> Decimal {
        self.income - self.bills - self.debt_minimums - self.bnpl_payment - self.living_expenses
    }

    pub fn sum_of_buckets(&self) -> Decimal {
        self.credit_card_balance + self.auto_loan_balance + self.student_loan_balance + self.bnpl_balance
    }
}
