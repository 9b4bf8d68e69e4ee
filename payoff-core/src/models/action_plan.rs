use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    #[default]
    None,
    Alert,
    Success,
}

/// One row of the narrative action plan. An empty `period` continues the
/// previous period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    #[serde(default)]
    pub period: String,
    pub text: String,
    #[serde(default)]
    pub emphasis: Emphasis,
}
