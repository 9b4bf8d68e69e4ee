use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often a budget amount is stated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    #[default]
    PerPaycheck,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub cadence: Cadence,
    #[serde(default)]
    pub note: String,
    /// Rendered with the alert fill (e.g. a past-due account).
    #[serde(default)]
    pub flagged: bool,
}

/// Inputs of the "every dollar" paycheck budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckBudget {
    pub net_paycheck: Decimal,
    /// Biweekly-to-monthly factor, 2.17 for 26 paychecks a year.
    pub paychecks_per_month: Decimal,
    pub allocations: Vec<BudgetLine>,
    pub bnpl_monthly_average: Decimal,
    #[serde(default)]
    pub bnpl_note: String,
    pub living: Vec<BudgetLine>,
}
