//! Debt payoff calculations.
//!
//! Each calculator borrows its inputs and produces a result value; none of
//! them perform I/O. [`FinancialModel::build`] runs all of them for a plan.

pub mod budget;
pub mod common;
pub mod model;
pub mod projection;
pub mod snapshot;
pub mod summary;

pub use budget::{BudgetError, BudgetLineResult, PaycheckBudgetResult, PaycheckBudgetWorksheet};
pub use model::{FIRST_YEAR_MONTH, FinancialModel, ModelError};
pub use projection::{
    AllocationPolicy, ConfigError, EmergencyFundGoal, InstallmentTerms, MAX_HORIZON_MONTHS,
    ProjectionConfig, ProjectionEngine, ProjectionError, RevolvingTerms, project,
};
pub use snapshot::{CashFlowSnapshot, CashFlowWorksheet, SnapshotError};
pub use summary::ProjectionSummary;
