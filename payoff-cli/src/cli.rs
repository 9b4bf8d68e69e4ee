use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Debt payoff planner.
///
/// Loads a household plan (the built-in one unless `--plan` is given),
/// projects the debt avalanche month by month and renders the results.
#[derive(Debug, Parser)]
#[command(name = "payoff", version, about)]
pub struct Cli {
    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the Excel workbook.
    Workbook {
        #[command(flatten)]
        source: PlanSource,

        /// Where to write the workbook.
        #[arg(short, long, default_value = "financial_model.xlsx")]
        output: PathBuf,
    },

    /// Print the month-by-month projection.
    Project {
        #[command(flatten)]
        source: PlanSource,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Override the plan's projection horizon, in months.
        #[arg(long)]
        horizon: Option<u32>,
    },

    /// Validate the plan and print the snapshot and year-end summary.
    Check {
        #[command(flatten)]
        source: PlanSource,
    },
}

/// Where the plan and its debts come from.
#[derive(Debug, Clone, Default, Args)]
pub struct PlanSource {
    /// Plan file (TOML). Defaults to the built-in plan.
    #[arg(short, long)]
    pub plan: Option<PathBuf>,

    /// Debt inventory CSV, replacing the plan's `[[debts]]`.
    #[arg(short, long)]
    pub debts: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn workbook_defaults_output_path() {
        let cli = Cli::try_parse_from(["payoff", "workbook"]).unwrap();

        match cli.command {
            Command::Workbook { source, output } => {
                assert_eq!(output, PathBuf::from("financial_model.xlsx"));
                assert_eq!(source.plan, None);
                assert_eq!(source.debts, None);
            }
            other => panic!("expected workbook, got {other:?}"),
        }
    }

    #[test]
    fn project_accepts_format_and_horizon() {
        let cli = Cli::try_parse_from([
            "payoff", "project", "--format", "csv", "--horizon", "12", "--plan", "plan.toml",
        ])
        .unwrap();

        match cli.command {
            Command::Project {
                source,
                format,
                horizon,
            } => {
                assert_eq!(format, OutputFormat::Csv);
                assert_eq!(horizon, Some(12));
                assert_eq!(source.plan, Some(PathBuf::from("plan.toml")));
            }
            other => panic!("expected project, got {other:?}"),
        }
    }

    #[test]
    fn log_file_is_global() {
        let cli =
            Cli::try_parse_from(["payoff", "check", "--debts", "debts.csv", "--log-file", "payoff.log"])
                .unwrap();

        assert_eq!(cli.log_file, Some(PathBuf::from("payoff.log")));
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["payoff", "project", "--format", "pdf"]).is_err());
    }
}
