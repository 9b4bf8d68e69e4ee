use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use payoff_core::calculations::ProjectionSummary;
use payoff_core::calculations::common::round_half_up;
use payoff_core::{FinancialModel, MonthlySnapshot, Plan};
use payoff_data::{PlanFile, inventory_csv};
use payoff_report::{SnapshotCsvWriter, WorkbookRenderer};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::cli::{Cli, Command, OutputFormat, PlanSource};

/// Runs `cli`, writing command output to `out`.
pub fn run(
    cli: Cli,
    out: &mut impl Write,
) -> Result<()> {
    match cli.command {
        Command::Workbook { source, output } => write_workbook(&source, &output, out),
        Command::Project {
            source,
            format,
            horizon,
        } => print_projection(&source, format, horizon, out),
        Command::Check { source } => check(&source, out),
    }
}

/// Loads the plan named by `source`, or the built-in plan.
pub fn load_plan(source: &PlanSource) -> Result<Plan> {
    let file = match &source.plan {
        Some(path) => PlanFile::from_file(path)
            .with_context(|| format!("Failed to load plan: {}", path.display()))?,
        None => PlanFile::default_file().context("Failed to load the built-in plan")?,
    };

    let plan = match &source.debts {
        Some(path) => {
            let accounts = inventory_csv::load_from_file(path)
                .with_context(|| format!("Failed to load debts: {}", path.display()))?;
            debug!(accounts = accounts.len(), "replacing plan debts with CSV inventory");
            file.into_plan_with_accounts(accounts)
        }
        None => file.into_plan(),
    };
    plan.context("Plan is invalid")
}

fn build_model(plan: &Plan) -> Result<FinancialModel> {
    FinancialModel::build(plan).context("Failed to calculate the financial model")
}

fn write_workbook(
    source: &PlanSource,
    output: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let model = build_model(&load_plan(source)?)?;

    WorkbookRenderer::new()
        .save(&model, output)
        .with_context(|| format!("Failed to write workbook: {}", output.display()))?;

    writeln!(out, "Wrote {}", output.display())?;
    Ok(())
}

fn print_projection(
    source: &PlanSource,
    format: OutputFormat,
    horizon: Option<u32>,
    out: &mut impl Write,
) -> Result<()> {
    let mut plan = load_plan(source)?;
    if let Some(months) = horizon {
        info!(months, "overriding projection horizon");
        plan.projection.horizon_months = months;
    }
    let model = build_model(&plan)?;

    match format {
        OutputFormat::Csv => SnapshotCsvWriter::new()
            .write_to(&model.snapshots, out)
            .context("Failed to write projection CSV")?,
        OutputFormat::Table => write!(out, "{}", projection_table(&model.snapshots))?,
    }
    Ok(())
}

fn check(
    source: &PlanSource,
    out: &mut impl Write,
) -> Result<()> {
    let model = build_model(&load_plan(source)?)?;
    let cash_flow = &model.cash_flow;

    writeln!(out, "{} (as of {})", model.title, model.as_of)?;
    writeln!(out, "  accounts                  {:>12}", model.inventory.accounts.len())?;
    writeln!(out, "  total debt                {:>12}", money(cash_flow.total_debt))?;
    writeln!(out, "  monthly income            {:>12}", money(cash_flow.monthly_income))?;
    writeln!(out, "  minimum payments          {:>12}", money(cash_flow.total_minimum_payments))?;
    writeln!(out, "  true monthly surplus      {:>12}", money(cash_flow.true_monthly_surplus))?;
    writeln!(out, "  extra per paycheck        {:>12}", money(model.budget.extra_per_paycheck))?;

    if let Some(first_year) = &model.first_year {
        write_summary(out, first_year)?;
    }
    if let Some(final_month) = &model.final_month {
        if model.first_year.as_ref() != Some(final_month) {
            write_summary(out, final_month)?;
        }
    }
    Ok(())
}

fn write_summary(
    out: &mut impl Write,
    summary: &ProjectionSummary,
) -> Result<()> {
    writeln!(out, "Month {} ({})", summary.month_index, summary.calendar_label)?;
    writeln!(out, "  total debt                {:>12}", money(summary.total_debt))?;
    writeln!(out, "  debt paid off             {:>12}", money(summary.debt_paid_off))?;
    writeln!(out, "  emergency fund            {:>12}", money(summary.emergency_fund))?;
    Ok(())
}

/// Cents, rounded half-up, always with two decimals.
fn money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Fixed-width table of the projection, one line per month.
pub fn projection_table(snapshots: &[MonthlySnapshot]) -> String {
    let mut table = format!(
        "{:>3}  {:<8}  {:>10}  {:>10}  {:>12}  {:>12}  {:>12}  {:>10}  {:>12}  {:>10}\n",
        "#", "Month", "Extra Debt", "Savings", "Credit Cards", "Auto Loans", "Student Loans",
        "BNPL", "Total Debt", "Emergency"
    );
    for s in snapshots {
        table.push_str(&format!(
            "{:>3}  {:<8}  {:>10}  {:>10}  {:>12}  {:>12}  {:>12}  {:>10}  {:>12}  {:>10}\n",
            s.month_index,
            s.calendar_label,
            money(s.extra_toward_debt),
            money(s.extra_toward_savings),
            money(s.credit_card_balance),
            money(s.auto_loan_balance),
            money(s.student_loan_balance),
            money(s.bnpl_balance),
            money(s.total_debt),
            money(s.emergency_fund_balance),
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn money_rounds_half_up_to_cents() {
        assert_eq!(money(dec!(20079.763)), "20079.76");
        assert_eq!(money(dec!(3161.648)), "3161.65");
        assert_eq!(money(dec!(0.005)), "0.01");
        assert_eq!(money(dec!(1800)), "1800.00");
    }
}
