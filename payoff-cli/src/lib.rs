//! The `payoff` command-line tool.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Command, OutputFormat, PlanSource};
pub use commands::{load_plan, projection_table, run};
