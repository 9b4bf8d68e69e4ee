use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A permanent change to the monthly debt minimums, effective from
/// `starting_month` (1-based) onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumStep {
    pub starting_month: u32,
    pub amount: Decimal,
}

/// Step function for the required debt minimums.
///
/// The minimum for month `m` is `base` plus every step whose
/// `starting_month` is at or before `m`. Lookups return `None` when that sum
/// leaves the range of [`Decimal`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumsSchedule {
    pub base: Decimal,
    #[serde(default)]
    pub steps: Vec<MinimumStep>,
}

impl MinimumsSchedule {
    pub fn flat(base: Decimal) -> Self {
        Self {
            base,
            steps: Vec::new(),
        }
    }

    pub fn minimum_for(
        &self,
        month: u32,
    ) -> Option<Decimal> {
        self.steps
            .iter()
            .filter(|step| step.starting_month <= month)
            .try_fold(self.base, |total, step| total.checked_add(step.amount))
    }
}

/// Fixed monthly cash flows feeding a projection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowAssumptions {
    pub monthly_income: Decimal,
    pub monthly_fixed_bills: Decimal,
    pub monthly_living_expenses: Decimal,
    /// BNPL installments due, index 0 being month 1.
    pub bnpl_scheduled_payments: Vec<Decimal>,
    pub debt_minimums: MinimumsSchedule,
}

impl CashFlowAssumptions {
    /// Scheduled BNPL payment for a 1-based month. Zero once the schedule runs out.
    pub fn bnpl_payment(
        &self,
        month: u32,
    ) -> Decimal {
        month
            .checked_sub(1)
            .and_then(|index| self.bnpl_scheduled_payments.get(index as usize))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn debt_minimum(
        &self,
        month: u32,
    ) -> Option<Decimal> {
        self.debt_minimums.minimum_for(month)
    }
}
