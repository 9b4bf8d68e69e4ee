use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ActionItem, DebtInventory, Household, PaycheckBudget};
use crate::calculations::ProjectionConfig;

/// Everything needed to build a financial model for one household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub title: String,
    pub as_of: NaiveDate,
    pub household: Household,
    pub inventory: DebtInventory,
    pub budget: PaycheckBudget,
    pub projection: ProjectionConfig,
    pub action_plan: Vec<ActionItem>,
}
