//! "Every dollar" paycheck budget.
//!
//! Assigns each paycheck to debt payments, BNPL installments and living costs,
//! leaving whatever is unassigned as extra.
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Per-paycheck amount: as given, or monthly ÷ paychecks per month |
//! | 2    | Monthly equivalent: per-paycheck × paychecks per month |
//! | 3    | BNPL per paycheck: monthly BNPL average ÷ paychecks per month |
//! | 4    | Extra: paycheck − allocations − BNPL − living (may be negative) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payoff_core::calculations::PaycheckBudgetWorksheet;
//! use payoff_core::{BudgetLine, Cadence, PaycheckBudget};
//!
//! let budget = PaycheckBudget {
//!     net_paycheck: dec!(2000.00),
//!     paychecks_per_month: dec!(2.17),
//!     allocations: vec![BudgetLine {
//!         name: "Car insurance".to_string(),
//!         amount: dec!(239.00),
//!         cadence: Cadence::Monthly,
//!         note: String::new(),
//!         flagged: false,
//!     }],
//!     bnpl_monthly_average: dec!(0.00),
//!     bnpl_note: String::new(),
//!     living: vec![],
//! };
//!
//! let result = PaycheckBudgetWorksheet::new(&budget).calculate().unwrap();
//!
//! assert_eq!(result.allocations[0].per_paycheck, dec!(110.14));
//! assert_eq!(result.extra_per_paycheck, dec!(1889.86));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{checked_sum, round_half_up};
use crate::{BudgetLine, Cadence, PaycheckBudget};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error("paychecks per month must be positive, got {0}")]
    InvalidPaychecksPerMonth(Decimal),

    #[error("budget amount for {name} must be non-negative, got {amount}")]
    NegativeAmount { name: String, amount: Decimal },

    #[error("arithmetic overflow while budgeting {0}")]
    ArithmeticOverflow(String),
}

/// A budget line expressed both per paycheck and per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLineResult {
    pub name: String,
    pub per_paycheck: Decimal,
    pub monthly_equivalent: Decimal,
    pub note: String,
    pub flagged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckBudgetResult {
    pub net_paycheck: Decimal,
    pub paychecks_per_month: Decimal,
    pub allocations: Vec<BudgetLineResult>,
    pub total_allocations: Decimal,
    pub bnpl_monthly_average: Decimal,
    pub bnpl_per_paycheck: Decimal,
    pub bnpl_note: String,
    pub living: Vec<BudgetLineResult>,
    pub total_living: Decimal,
    /// Unassigned money per paycheck; negative when the paycheck is over-assigned.
    pub extra_per_paycheck: Decimal,
}

#[derive(Debug, Clone)]
pub struct PaycheckBudgetWorksheet<'a> {
    budget: &'a PaycheckBudget,
}

impl<'a> PaycheckBudgetWorksheet<'a> {
    pub fn new(budget: &'a PaycheckBudget) -> Self {
        Self { budget }
    }

    /// # Errors
    ///
    /// Returns [`BudgetError`] if `paychecks_per_month` is not positive, if
    /// the paycheck, the BNPL average or any line amount is negative, or if a
    /// figure leaves the range of [`Decimal`].
    pub fn calculate(&self) -> Result<PaycheckBudgetResult, BudgetError> {
        let budget = self.budget;
        if budget.paychecks_per_month <= Decimal::ZERO {
            return Err(BudgetError::InvalidPaychecksPerMonth(budget.paychecks_per_month));
        }
        check_amount("net paycheck", budget.net_paycheck)?;
        check_amount("BNPL monthly average", budget.bnpl_monthly_average)?;

        let allocations = self.lines(&budget.allocations)?;
        let living = self.lines(&budget.living)?;

        let total_allocations = sum_per_paycheck("allocations", &allocations)?;
        let total_living = sum_per_paycheck("living expenses", &living)?;
        let bnpl_per_paycheck =
            self.per_paycheck("BNPL", budget.bnpl_monthly_average, Cadence::Monthly)?;
        let extra_per_paycheck = round_half_up(
            checked_sum([
                budget.net_paycheck,
                -total_allocations,
                -bnpl_per_paycheck,
                -total_living,
            ])
            .ok_or_else(|| overflow("extra per paycheck"))?,
        );

        if extra_per_paycheck < Decimal::ZERO {
            warn!(
                extra_per_paycheck = %extra_per_paycheck,
                net_paycheck = %budget.net_paycheck,
                "paycheck is over-assigned"
            );
        }

        Ok(PaycheckBudgetResult {
            net_paycheck: round_half_up(budget.net_paycheck),
            paychecks_per_month: budget.paychecks_per_month,
            allocations,
            total_allocations,
            bnpl_monthly_average: round_half_up(budget.bnpl_monthly_average),
            bnpl_per_paycheck,
            bnpl_note: budget.bnpl_note.clone(),
            living,
            total_living,
            extra_per_paycheck,
        })
    }

    fn lines(
        &self,
        lines: &[BudgetLine],
    ) -> Result<Vec<BudgetLineResult>, BudgetError> {
        lines
            .iter()
            .map(|line| {
                check_amount(&line.name, line.amount)?;
                let per_paycheck = self.per_paycheck(&line.name, line.amount, line.cadence)?;
                Ok(BudgetLineResult {
                    name: line.name.clone(),
                    per_paycheck,
                    monthly_equivalent: self.monthly_equivalent(&line.name, per_paycheck)?,
                    note: line.note.clone(),
                    flagged: line.flagged,
                })
            })
            .collect()
    }

    fn per_paycheck(
        &self,
        name: &str,
        amount: Decimal,
        cadence: Cadence,
    ) -> Result<Decimal, BudgetError> {
        let per_paycheck = match cadence {
            Cadence::PerPaycheck => Some(amount),
            Cadence::Monthly => amount.checked_div(self.budget.paychecks_per_month),
        };
        per_paycheck.map(round_half_up).ok_or_else(|| overflow(name))
    }

    fn monthly_equivalent(
        &self,
        name: &str,
        per_paycheck: Decimal,
    ) -> Result<Decimal, BudgetError> {
        per_paycheck
            .checked_mul(self.budget.paychecks_per_month)
            .map(round_half_up)
            .ok_or_else(|| overflow(name))
    }
}

fn overflow(name: &str) -> BudgetError {
    BudgetError::ArithmeticOverflow(name.to_string())
}

fn check_amount(
    name: &str,
    amount: Decimal,
) -> Result<(), BudgetError> {
    if amount < Decimal::ZERO {
        return Err(BudgetError::NegativeAmount {
            name: name.to_string(),
            amount,
        });
    }
    Ok(())
}

fn sum_per_paycheck(
    name: &str,
    lines: &[BudgetLineResult],
) -> Result<Decimal, BudgetError> {
    checked_sum(lines.iter().map(|line| line.per_paycheck)).ok_or_else(|| overflow(name))
}
