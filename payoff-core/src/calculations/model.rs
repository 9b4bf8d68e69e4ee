use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::budget::{BudgetError, PaycheckBudgetResult, PaycheckBudgetWorksheet};
use super::projection::{ProjectionConfig, ProjectionEngine, ProjectionError};
use super::snapshot::{CashFlowSnapshot, CashFlowWorksheet, SnapshotError};
use super::summary::ProjectionSummary;
use crate::{ActionItem, DebtInventory, MonthlySnapshot, Plan};

/// Month reported as the end of the first projected year.
pub const FIRST_YEAR_MONTH: u32 = 12;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("cash-flow snapshot failed: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("paycheck budget failed: {0}")]
    Budget(#[from] BudgetError),

    #[error("projection failed: {0}")]
    Projection(#[from] ProjectionError),
}

/// Every computed artefact of a plan, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialModel {
    pub title: String,
    pub as_of: NaiveDate,
    pub inventory: DebtInventory,
    pub cash_flow: CashFlowSnapshot,
    pub budget: PaycheckBudgetResult,
    pub projection: ProjectionConfig,
    pub snapshots: Vec<MonthlySnapshot>,
    pub starting_total_debt: Decimal,
    pub first_year: Option<ProjectionSummary>,
    pub final_month: Option<ProjectionSummary>,
    pub action_plan: Vec<ActionItem>,
}

impl FinancialModel {
    /// Runs every calculation for a plan.
    ///
    /// The cash-flow snapshot, the paycheck budget and the projection are
    /// computed independently; the year-end and final-month summaries are then
    /// read off the projection.
    ///
    /// # Arguments
    ///
    /// * `plan` - The household plan to model
    ///
    /// # Returns
    ///
    /// The complete model, ready for a renderer. `first_year` is `None` when
    /// the horizon is shorter than [`FIRST_YEAR_MONTH`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] wrapping the first calculation that fails:
    /// [`SnapshotError`], [`BudgetError`] or [`ProjectionError`].
    pub fn build(plan: &Plan) -> Result<Self, ModelError> {
        let cash_flow = CashFlowWorksheet::new(&plan.household, &plan.inventory).calculate()?;
        let budget = PaycheckBudgetWorksheet::new(&plan.budget).calculate()?;
        let snapshots = ProjectionEngine::new(&plan.projection).project()?;

        let starting_total_debt = plan
            .projection
            .starting_total_debt()
            .map_err(ProjectionError::from)?;
        let first_year = ProjectionSummary::at_month(&snapshots, FIRST_YEAR_MONTH, starting_total_debt);
        let final_month =
            ProjectionSummary::at_month(&snapshots, plan.projection.horizon_months, starting_total_debt);

        info!(
            title = %plan.title,
            accounts = plan.inventory.accounts.len(),
            months = snapshots.len(),
            "financial model built"
        );

        Ok(Self {
            title: plan.title.clone(),
            as_of: plan.as_of,
            inventory: plan.inventory.clone(),
            cash_flow,
            budget,
            projection: plan.projection.clone(),
            snapshots,
            starting_total_debt,
            first_year,
            final_month,
            action_plan: plan.action_plan.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::budget::BudgetError;
    use crate::calculations::projection::{
        AllocationPolicy, ConfigError, EmergencyFundGoal, InstallmentTerms, RevolvingTerms,
    };
    use crate::{
        AccountStatus, CashFlowAssumptions, DebtAccount, DebtCategory, ExpenseLine, Household,
        MinimumsSchedule, PaycheckBudget,
    };

    fn account(
        name: &str,
        category: DebtCategory,
        balance: Decimal,
        status: AccountStatus,
        priority: u32,
    ) -> DebtAccount {
        DebtAccount {
            name: name.to_string(),
            category,
            balance,
            apr: dec!(0.10),
            minimum_payment: dec!(100.00),
            due_day: 1,
            status,
            status_note: None,
            priority,
        }
    }

    fn plan(horizon_months: u32) -> Plan {
        let inventory = DebtInventory::new(vec![
            account("Visa", DebtCategory::CreditCard, dec!(2500.00), AccountStatus::Current, 1),
            account("Car", DebtCategory::AutoLoan, dec!(9000.00), AccountStatus::PastDue, 2),
        ]);

        Plan {
            title: "Test plan".to_string(),
            as_of: NaiveDate::from_ymd_opt(2025, 12, 27).unwrap(),
            household: Household {
                cash_on_hand: dec!(100.00),
                net_paycheck: dec!(2000.00),
                paychecks_per_year: 26,
                monthly_fixed_bills: dec!(300.00),
                living_expenses: vec![ExpenseLine {
                    name: "Food".to_string(),
                    amount: dec!(800.00),
                }],
            },
            budget: PaycheckBudget {
                net_paycheck: dec!(2000.00),
                paychecks_per_month: dec!(2.17),
                allocations: vec![],
                bnpl_monthly_average: Decimal::ZERO,
                bnpl_note: String::new(),
                living: vec![],
            },
            projection: ProjectionConfig {
                horizon_months,
                start_month: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                starting_balances: inventory.bucket_balances().unwrap(),
                credit_card: RevolvingTerms { apr: dec!(0.24) },
                auto_loan: InstallmentTerms {
                    apr: dec!(0.07),
                    fixed_payment: dec!(350.00),
                },
                student_loan: InstallmentTerms {
                    apr: Decimal::ZERO,
                    fixed_payment: Decimal::ZERO,
                },
                cash_flow: CashFlowAssumptions {
                    monthly_income: dec!(4333.33),
                    monthly_fixed_bills: dec!(300.00),
                    monthly_living_expenses: dec!(800.00),
                    bnpl_scheduled_payments: vec![],
                    debt_minimums: MinimumsSchedule::flat(dec!(450.00)),
                },
                allocation: AllocationPolicy {
                    debt_share: dec!(0.80),
                },
                emergency_fund: EmergencyFundGoal {
                    starting_balance: Decimal::ZERO,
                    ceiling: dec!(1000.00),
                },
            },
            inventory,
            action_plan: vec![ActionItem {
                period: "WEEK 1".to_string(),
                text: "Call the lender".to_string(),
                emphasis: crate::Emphasis::Alert,
            }],
        }
    }

    // =========================================================================
    // Assembly
    // =========================================================================

    #[test]
    fn build_runs_every_calculation() {
        let model = FinancialModel::build(&plan(12)).unwrap();

        assert_eq!(model.title, "Test plan");
        assert_eq!(model.cash_flow.monthly_income, dec!(4333.33));
        assert_eq!(model.cash_flow.total_debt, dec!(11500.00));
        assert_eq!(model.budget.extra_per_paycheck, dec!(2000.00));
        assert_eq!(model.snapshots.len(), 12);
        assert_eq!(model.starting_total_debt, dec!(11500.00));
        assert_eq!(model.action_plan.len(), 1);
    }

    #[test]
    fn summaries_report_progress_against_starting_debt() {
        let model = FinancialModel::build(&plan(12)).unwrap();
        let first_year = model.first_year.clone().unwrap();

        assert_eq!(first_year.month_index, FIRST_YEAR_MONTH);
        assert_eq!(first_year.calendar_label, "Dec 2026");
        assert_eq!(
            first_year.debt_paid_off,
            model.starting_total_debt - model.snapshots[11].total_debt
        );
        assert_eq!(model.final_month, Some(first_year));
    }

    #[test]
    fn short_horizon_has_no_first_year_summary() {
        let model = FinancialModel::build(&plan(6)).unwrap();

        assert_eq!(model.first_year, None);
        assert_eq!(model.final_month.map(|s| s.month_index), Some(6));
    }

    // =========================================================================
    // Errors
    // =========================================================================

    #[test]
    fn snapshot_error_is_wrapped() {
        let mut plan = plan(12);
        plan.household.paychecks_per_year = 0;

        assert_eq!(
            FinancialModel::build(&plan),
            Err(ModelError::Snapshot(SnapshotError::InvalidPaychecksPerYear))
        );
    }

    #[test]
    fn budget_error_is_wrapped() {
        let mut plan = plan(12);
        plan.budget.paychecks_per_month = Decimal::ZERO;

        assert_eq!(
            FinancialModel::build(&plan),
            Err(ModelError::Budget(BudgetError::InvalidPaychecksPerMonth(Decimal::ZERO)))
        );
    }

    #[test]
    fn projection_error_is_wrapped() {
        let mut plan = plan(12);
        plan.projection.horizon_months = 0;

        assert_eq!(
            FinancialModel::build(&plan),
            Err(ModelError::Projection(ProjectionError::InvalidConfiguration(
                ConfigError::ZeroHorizon
            )))
        );
    }

    #[test]
    fn overlong_horizon_is_rejected_before_projecting() {
        let mut plan = plan(12);
        plan.projection.horizon_months = u32::MAX;

        assert_eq!(
            FinancialModel::build(&plan),
            Err(ModelError::Projection(ProjectionError::InvalidConfiguration(
                ConfigError::HorizonTooLong {
                    months: u32::MAX,
                    max: crate::calculations::projection::MAX_HORIZON_MONTHS,
                }
            )))
        );
    }
}
