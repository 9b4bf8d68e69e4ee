use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::MonthlySnapshot;

/// Progress made by a given month of the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub month_index: u32,
    pub calendar_label: String,
    pub total_debt: Decimal,
    /// Starting total debt minus the total at this month.
    pub debt_paid_off: Decimal,
    pub emergency_fund: Decimal,
}

impl ProjectionSummary {
    /// Summarises the progress made by one month of a projection.
    ///
    /// # Arguments
    ///
    /// * `snapshots` - The projected months, as returned by the engine
    /// * `month` - The 1-based month to summarise
    /// * `starting_total_debt` - Total debt before month 1
    ///
    /// # Returns
    ///
    /// The month's total debt, the debt paid off since the start and the
    /// emergency fund balance, or `None` when `month` lies outside the
    /// projection.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal_macros::dec;
    /// use payoff_core::calculations::{
    ///     AllocationPolicy, EmergencyFundGoal, InstallmentTerms, ProjectionConfig,
    ///     ProjectionSummary, RevolvingTerms, project,
    /// };
    /// use payoff_core::{BucketBalances, CashFlowAssumptions, MinimumsSchedule};
    ///
    /// let config = ProjectionConfig {
    ///     horizon_months: 3,
    ///     start_month: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    ///     starting_balances: BucketBalances {
    ///         credit_card: dec!(5000.00),
    ///         auto_loan: dec!(10000.00),
    ///         student_loan: dec!(0.00),
    ///         bnpl: dec!(0.00),
    ///     },
    ///     credit_card: RevolvingTerms { apr: dec!(0.24) },
    ///     auto_loan: InstallmentTerms { apr: dec!(0.06), fixed_payment: dec!(300.00) },
    ///     student_loan: InstallmentTerms { apr: dec!(0.00), fixed_payment: dec!(0.00) },
    ///     cash_flow: CashFlowAssumptions {
    ///         monthly_income: dec!(4000.00),
    ///         monthly_fixed_bills: dec!(1000.00),
    ///         monthly_living_expenses: dec!(1000.00),
    ///         bnpl_scheduled_payments: vec![],
    ///         debt_minimums: MinimumsSchedule::flat(dec!(1000.00)),
    ///     },
    ///     allocation: AllocationPolicy { debt_share: dec!(0.8) },
    ///     emergency_fund: EmergencyFundGoal { starting_balance: dec!(0.00), ceiling: dec!(1000.00) },
    /// };
    /// let snapshots = project(&config).unwrap();
    /// let starting_debt = config.starting_total_debt().unwrap();
    ///
    /// let summary = ProjectionSummary::at_month(&snapshots, 2, starting_debt).unwrap();
    ///
    /// assert_eq!(summary.calendar_label, "Feb 2026");
    /// // 3484.00 on the cards plus 9750.00 on the car
    /// assert_eq!(summary.total_debt, dec!(13234.00));
    /// assert_eq!(summary.debt_paid_off, dec!(1766.00));
    /// assert_eq!(summary.emergency_fund, dec!(400.00));
    /// assert!(ProjectionSummary::at_month(&snapshots, 12, starting_debt).is_none());
    /// ```
    pub fn at_month(
        snapshots: &[MonthlySnapshot],
        month: u32,
        starting_total_debt: Decimal,
    ) -> Option<Self> {
        let snapshot = snapshots.iter().find(|s| s.month_index == month)?;
        Some(Self {
            month_index: snapshot.month_index,
            calendar_label: snapshot.calendar_label.clone(),
            total_debt: snapshot.total_debt,
            debt_paid_off: starting_total_debt - snapshot.total_debt,
            emergency_fund: snapshot.emergency_fund_balance,
        })
    }
}
