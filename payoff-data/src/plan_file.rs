//! TOML plan files.
//!
//! ## Layout
//!
//! | Section                        | Contents |
//! |--------------------------------|----------|
//! | top level                      | `title`, `as_of` (`"YYYY-MM-DD"`) |
//! | `[household]`                  | cash on hand, net paycheck, paychecks per year, fixed bills |
//! | `[[household.living_expenses]]`| monthly living costs |
//! | `[[categories]]`               | snapshot label, note and high-priority flag per category |
//! | `[budget]`                     | paychecks per month, BNPL monthly average, optional `net_paycheck` |
//! | `[[budget.allocations]]`       | bills and debt payments per paycheck |
//! | `[[budget.living]]`            | living costs per paycheck |
//! | `[projection]`                 | horizon, start month, cash flow, rates, fixed payments, BNPL schedule, allocation |
//! | `[projection.starting_balances]` | optional; derived from the debts when omitted |
//! | `[[projection.minimum_steps]]` | changes to the debt minimums from a given month |
//! | `[[action_plan]]`              | narrative rows |
//! | `[[debts]]`                    | the debt inventory |
//!
//! The built-in plan in `data/default_plan.toml` shows every section.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use payoff_core::calculations::{
    AllocationPolicy, ConfigError, EmergencyFundGoal, InstallmentTerms, ProjectionConfig,
    RevolvingTerms,
};
use payoff_core::{
    ActionItem, BucketBalances, BudgetLine, CashFlowAssumptions, CategoryProfile, DebtAccount,
    DebtInventory, Household, MinimumStep, MinimumsSchedule, PaycheckBudget, Plan,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::debt_record::{DebtRecord, DebtRecordError};

/// The household plan shipped with the crate.
pub const DEFAULT_PLAN_TOML: &str = include_str!("../data/default_plan.toml");

#[derive(Debug, Error)]
pub enum PlanLoadError {
    #[error("failed to read plan file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid plan file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid debt '{name}': {source}")]
    InvalidDebt {
        name: String,
        #[source]
        source: DebtRecordError,
    },

    #[error("invalid projection start {year}-{month:02}")]
    InvalidStartMonth { year: i32, month: u32 },

    #[error("debt balances are too large to add up")]
    BalanceOverflow,

    #[error("invalid projection settings: {0}")]
    Projection(#[from] ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct BudgetSection {
    /// Defaults to the household's net paycheck.
    pub net_paycheck: Option<Decimal>,
    pub paychecks_per_month: Decimal,
    pub bnpl_monthly_average: Decimal,
    #[serde(default)]
    pub bnpl_note: String,
    #[serde(default)]
    pub allocations: Vec<BudgetLine>,
    #[serde(default)]
    pub living: Vec<BudgetLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionSection {
    pub horizon_months: u32,
    pub start_year: i32,
    pub start_month: u32,
    /// Defaults to the bucket totals of the debt inventory.
    pub starting_balances: Option<BucketBalances>,
    pub monthly_income: Decimal,
    pub monthly_fixed_bills: Decimal,
    pub monthly_living_expenses: Decimal,
    pub debt_minimums: Decimal,
    #[serde(default)]
    pub minimum_steps: Vec<MinimumStep>,
    #[serde(default)]
    pub bnpl_schedule: Vec<Decimal>,
    pub credit_card_apr: Decimal,
    pub auto_loan_apr: Decimal,
    pub auto_loan_payment: Decimal,
    pub student_loan_apr: Decimal,
    pub student_loan_payment: Decimal,
    pub debt_share: Decimal,
    #[serde(default)]
    pub emergency_fund_start: Decimal,
    pub emergency_fund_ceiling: Decimal,
}

/// A plan file as written, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFile {
    pub title: String,
    pub as_of: NaiveDate,
    pub household: Household,
    #[serde(default)]
    pub categories: Vec<CategoryProfile>,
    pub budget: BudgetSection,
    pub projection: ProjectionSection,
    #[serde(default)]
    pub action_plan: Vec<ActionItem>,
    #[serde(default)]
    pub debts: Vec<DebtRecord>,
}

impl PlanFile {
    pub fn from_toml_str(input: &str) -> Result<Self, PlanLoadError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, PlanLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PlanLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), title = %file.title, "loaded plan file");
        Ok(file)
    }

    /// The plan shipped with the crate.
    pub fn default_file() -> Result<Self, PlanLoadError> {
        Self::from_toml_str(DEFAULT_PLAN_TOML)
    }

    /// Converts the file into a validated [`Plan`] using its own `[[debts]]`.
    pub fn into_plan(mut self) -> Result<Plan, PlanLoadError> {
        let accounts = std::mem::take(&mut self.debts)
            .into_iter()
            .map(|record| {
                let name = record.name.clone();
                record
                    .into_account()
                    .map_err(|source| PlanLoadError::InvalidDebt { name, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.into_plan_with_accounts(accounts)
    }

    /// Converts the file into a validated [`Plan`], replacing its
    /// `[[debts]]` with `accounts` (e.g. loaded from an inventory CSV).
    pub fn into_plan_with_accounts(
        self,
        accounts: Vec<DebtAccount>,
    ) -> Result<Plan, PlanLoadError> {
        let inventory = DebtInventory::new(accounts).with_profiles(self.categories);

        let budget = PaycheckBudget {
            net_paycheck: self
                .budget
                .net_paycheck
                .unwrap_or(self.household.net_paycheck),
            paychecks_per_month: self.budget.paychecks_per_month,
            allocations: self.budget.allocations,
            bnpl_monthly_average: self.budget.bnpl_monthly_average,
            bnpl_note: self.budget.bnpl_note,
            living: self.budget.living,
        };

        let projection = projection_config(self.projection, &inventory)?;
        projection.validate()?;
        let starting_debt = projection.starting_total_debt()?;

        debug!(
            accounts = inventory.accounts.len(),
            horizon = projection.horizon_months,
            starting_debt = %starting_debt,
            "plan validated"
        );

        Ok(Plan {
            title: self.title,
            as_of: self.as_of,
            household: self.household,
            inventory,
            budget,
            projection,
            action_plan: self.action_plan,
        })
    }
}

fn projection_config(
    section: ProjectionSection,
    inventory: &DebtInventory,
) -> Result<ProjectionConfig, PlanLoadError> {
    let start_month = NaiveDate::from_ymd_opt(section.start_year, section.start_month, 1).ok_or(
        PlanLoadError::InvalidStartMonth {
            year: section.start_year,
            month: section.start_month,
        },
    )?;

    let starting_balances = match section.starting_balances {
        Some(balances) => balances,
        None => inventory
            .bucket_balances()
            .ok_or(PlanLoadError::BalanceOverflow)?,
    };

    Ok(ProjectionConfig {
        horizon_months: section.horizon_months,
        start_month,
        starting_balances,
        credit_card: RevolvingTerms {
            apr: section.credit_card_apr,
        },
        auto_loan: InstallmentTerms {
            apr: section.auto_loan_apr,
            fixed_payment: section.auto_loan_payment,
        },
        student_loan: InstallmentTerms {
            apr: section.student_loan_apr,
            fixed_payment: section.student_loan_payment,
        },
        cash_flow: CashFlowAssumptions {
            monthly_income: section.monthly_income,
            monthly_fixed_bills: section.monthly_fixed_bills,
            monthly_living_expenses: section.monthly_living_expenses,
            bnpl_scheduled_payments: section.bnpl_schedule,
            debt_minimums: MinimumsSchedule {
                base: section.debt_minimums,
                steps: section.minimum_steps,
            },
        },
        allocation: AllocationPolicy {
            debt_share: section.debt_share,
        },
        emergency_fund: EmergencyFundGoal {
            starting_balance: section.emergency_fund_start,
            ceiling: section.emergency_fund_ceiling,
        },
    })
}

/// Parses and validates the plan shipped with the crate.
pub fn default_plan() -> Result<Plan, PlanLoadError> {
    PlanFile::default_file()?.into_plan()
}
