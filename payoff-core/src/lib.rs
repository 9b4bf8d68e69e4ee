pub mod calculations;
pub mod models;

pub use calculations::{FinancialModel, ModelError, ProjectionError, project};
pub use models::*;
