//! Loading household plans and debt inventories from disk.
//!
//! A plan is a TOML file describing the household, its debts, the paycheck
//! budget, the projection settings and the action plan. The debt inventory can
//! also be supplied separately as a CSV file.

pub mod debt_record;
pub mod inventory_csv;
pub mod plan_file;

pub use debt_record::{DebtRecord, DebtRecordError};
pub use inventory_csv::InventoryCsvError;
pub use plan_file::{DEFAULT_PLAN_TOML, PlanFile, PlanLoadError, default_plan};
