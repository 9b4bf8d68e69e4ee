mod action_plan;
mod budget;
mod cash_flow;
mod debt_account;
mod debt_inventory;
mod household;
mod plan;
mod snapshot;

pub use action_plan::{ActionItem, Emphasis};
pub use budget::{BudgetLine, Cadence, PaycheckBudget};
pub use cash_flow::{CashFlowAssumptions, MinimumStep, MinimumsSchedule};
pub use debt_account::{AccountStatus, DebtAccount, DebtCategory, HIGH_PRIORITY_THRESHOLD};
pub use debt_inventory::{BucketBalances, CategoryProfile, CategorySummary, DebtInventory};
pub use household::{ExpenseLine, Household};
pub use plan::Plan;
pub use snapshot::MonthlySnapshot;
