use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::checked_sum;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub name: String,
    pub amount: Decimal,
}

/// Income and recurring costs of the household, as of the plan date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub cash_on_hand: Decimal,
    /// Take-home pay per paycheck.
    pub net_paycheck: Decimal,
    pub paychecks_per_year: u32,
    pub monthly_fixed_bills: Decimal,
    /// Monthly living costs (food, gas, personal).
    #[serde(default)]
    pub living_expenses: Vec<ExpenseLine>,
}

impl Household {
    /// Sum of the living-expense lines, or `None` if it overflows.
    pub fn total_living_expenses(&self) -> Option<Decimal> {
        checked_sum(self.living_expenses.iter().map(|line| line.amount))
    }
}
