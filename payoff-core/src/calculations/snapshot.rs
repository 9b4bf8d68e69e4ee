//! Current cash-flow snapshot of the household.
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Monthly income: net paycheck × paychecks per year ÷ 12 |
//! | 2    | Available after obligations: income − fixed bills − debt minimums |
//! | 3    | True monthly surplus: available − living expenses (may be negative) |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{MONTHS_PER_YEAR, round_half_up};
use crate::{CategorySummary, DebtInventory, ExpenseLine, Household};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("paychecks per year must be at least one")]
    InvalidPaychecksPerYear,

    #[error("arithmetic overflow while calculating {0}")]
    ArithmeticOverflow(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSnapshot {
    pub cash_on_hand: Decimal,
    pub net_paycheck: Decimal,
    pub paychecks_per_year: u32,
    pub monthly_income: Decimal,
    pub annual_income: Decimal,
    pub monthly_fixed_bills: Decimal,
    pub total_minimum_payments: Decimal,
    pub available_after_obligations: Decimal,
    pub living_expenses: Vec<ExpenseLine>,
    pub total_living_expenses: Decimal,
    pub true_monthly_surplus: Decimal,
    pub total_debt: Decimal,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone)]
pub struct CashFlowWorksheet<'a> {
    household: &'a Household,
    inventory: &'a DebtInventory,
}

impl<'a> CashFlowWorksheet<'a> {
    pub fn new(
        household: &'a Household,
        inventory: &'a DebtInventory,
    ) -> Self {
        Self {
            household,
            inventory,
        }
    }

    /// # Errors
    ///
    /// Returns [`SnapshotError::InvalidPaychecksPerYear`] for a household paid
    /// zero times a year, and [`SnapshotError::ArithmeticOverflow`] naming the
    /// line whose value leaves the range of [`Decimal`].
    pub fn calculate(&self) -> Result<CashFlowSnapshot, SnapshotError> {
        let household = self.household;
        if household.paychecks_per_year == 0 {
            return Err(SnapshotError::InvalidPaychecksPerYear);
        }

        let annual = household
            .net_paycheck
            .checked_mul(Decimal::from(household.paychecks_per_year))
            .ok_or(SnapshotError::ArithmeticOverflow("annual income"))?;
        let monthly_income = round_half_up(annual / MONTHS_PER_YEAR);
        let total_minimum_payments = round_half_up(
            self.inventory
                .total_minimum_payment()
                .ok_or(SnapshotError::ArithmeticOverflow("minimum payments"))?,
        );
        let available_after_obligations = round_half_up(
            monthly_income
                .checked_sub(household.monthly_fixed_bills)
                .and_then(|v| v.checked_sub(total_minimum_payments))
                .ok_or(SnapshotError::ArithmeticOverflow("available after obligations"))?,
        );
        let total_living_expenses = round_half_up(
            household
                .total_living_expenses()
                .ok_or(SnapshotError::ArithmeticOverflow("living expenses"))?,
        );
        let true_monthly_surplus = available_after_obligations
            .checked_sub(total_living_expenses)
            .ok_or(SnapshotError::ArithmeticOverflow("true monthly surplus"))?;
        let total_debt = self
            .inventory
            .total_balance()
            .ok_or(SnapshotError::ArithmeticOverflow("total debt"))?;
        let categories = self
            .inventory
            .category_summaries()
            .ok_or(SnapshotError::ArithmeticOverflow("category totals"))?;

        if true_monthly_surplus < Decimal::ZERO {
            warn!(
                true_monthly_surplus = %true_monthly_surplus,
                monthly_income = %monthly_income,
                "monthly obligations exceed income"
            );
        }

        Ok(CashFlowSnapshot {
            cash_on_hand: round_half_up(household.cash_on_hand),
            net_paycheck: round_half_up(household.net_paycheck),
            paychecks_per_year: household.paychecks_per_year,
            monthly_income,
            annual_income: round_half_up(annual),
            monthly_fixed_bills: round_half_up(household.monthly_fixed_bills),
            total_minimum_payments,
            available_after_obligations,
            living_expenses: household.living_expenses.clone(),
            total_living_expenses,
            true_monthly_surplus,
            total_debt: round_half_up(total_debt),
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{AccountStatus, DebtAccount, DebtCategory};

    fn household() -> Household {
        Household {
            cash_on_hand: dec!(250.00),
            net_paycheck: dec!(3049.00),
            paychecks_per_year: 26,
            monthly_fixed_bills: dec!(287.97),
            living_expenses: vec![
                ExpenseLine {
                    name: "Food/Groceries".to_string(),
                    amount: dec!(400.00),
                },
                ExpenseLine {
                    name: "Gas/Transportation".to_string(),
                    amount: dec!(200.00),
                },
                ExpenseLine {
                    name: "Personal/Misc".to_string(),
                    amount: dec!(150.00),
                },
            ],
        }
    }

    fn inventory(minimum_payment: Decimal) -> DebtInventory {
        DebtInventory::new(vec![DebtAccount {
            name: "All debts".to_string(),
            category: DebtCategory::CreditCard,
            balance: dec!(82108.87),
            apr: dec!(0.2499),
            minimum_payment,
            due_day: 1,
            status: AccountStatus::Current,
            status_note: None,
            priority: 1,
        }])
    }

    #[test]
    fn monthly_income_converts_biweekly_pay() {
        let inventory = inventory(dec!(3529.99));
        let snapshot = CashFlowWorksheet::new(&household(), &inventory).calculate().unwrap();

        assert_eq!(snapshot.monthly_income, dec!(6606.17));
        assert_eq!(snapshot.annual_income, dec!(79274.00));
    }

    #[test]
    fn surplus_subtracts_obligations_then_living() {
        let inventory = inventory(dec!(3529.99));
        let snapshot = CashFlowWorksheet::new(&household(), &inventory).calculate().unwrap();

        assert_eq!(snapshot.total_minimum_payments, dec!(3529.99));
        assert_eq!(snapshot.available_after_obligations, dec!(2788.21));
        assert_eq!(snapshot.total_living_expenses, dec!(750.00));
        assert_eq!(snapshot.true_monthly_surplus, dec!(2038.21));
        assert_eq!(snapshot.total_debt, dec!(82108.87));
    }

    #[test]
    fn negative_surplus_is_reported_not_floored() {
        let inventory = inventory(dec!(6000.00));
        let snapshot = CashFlowWorksheet::new(&household(), &inventory).calculate().unwrap();

        assert_eq!(snapshot.available_after_obligations, dec!(318.20));
        assert_eq!(snapshot.true_monthly_surplus, dec!(-431.80));
    }

    #[test]
    fn categories_are_summarised() {
        let inventory = inventory(dec!(3529.99));
        let snapshot = CashFlowWorksheet::new(&household(), &inventory).calculate().unwrap();

        assert_eq!(snapshot.categories.len(), 4);
        assert_eq!(snapshot.categories[0].balance, dec!(82108.87));
    }

    #[test]
    fn zero_paychecks_per_year_is_rejected() {
        let household = Household {
            paychecks_per_year: 0,
            ..household()
        };
        let inventory = inventory(dec!(3529.99));

        assert_eq!(
            CashFlowWorksheet::new(&household, &inventory).calculate(),
            Err(SnapshotError::InvalidPaychecksPerYear)
        );
    }

    #[test]
    fn huge_paycheck_is_an_overflow_not_a_panic() {
        let household = Household {
            net_paycheck: Decimal::MAX,
            ..household()
        };
        let inventory = inventory(dec!(3529.99));

        assert_eq!(
            CashFlowWorksheet::new(&household, &inventory).calculate(),
            Err(SnapshotError::ArithmeticOverflow("annual income"))
        );
    }

    #[test]
    fn overflowing_minimums_are_reported() {
        let mut inventory = inventory(Decimal::MAX);
        let mut second = inventory.accounts[0].clone();
        second.name = "Second".to_string();
        inventory.accounts.push(second);

        assert_eq!(
            CashFlowWorksheet::new(&household(), &inventory).calculate(),
            Err(SnapshotError::ArithmeticOverflow("minimum payments"))
        );
    }
}
