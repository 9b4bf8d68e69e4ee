//! Integration tests running `payoff` commands against the bundled data.

use std::path::PathBuf;

use clap::Parser;
use payoff_cli::{Cli, run};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../payoff-data/test-data")
        .join(name)
}

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("payoff").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_check_prints_snapshot_and_summaries() {
    let output = run_args(&["check"]).expect("check should pass");

    assert!(output.starts_with("Financial Freedom Model 2025-2026 (as of 2025-12-27)"));
    assert!(output.contains("6606.17"));
    assert!(output.contains("3529.99"));
    assert!(output.contains("2038.21"));
    assert!(output.contains("148.14"));
    assert!(output.contains("Month 12 (Dec 2026)"));
    assert!(output.contains("55601.11"));
    assert!(output.contains("26507.76"));
    assert!(output.contains("50374.77"));
    assert!(output.contains("Month 24 (Dec 2027)"));
}

#[test]
fn test_project_table_has_header_and_rows() {
    let output = run_args(&["project"]).expect("project should pass");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 25);
    assert!(lines[0].contains("Total Debt"));
    assert!(lines[1].contains("Jan 2026"));
    assert!(lines[1].contains("13938.03"));
}

#[test]
fn test_project_csv_with_horizon_override() {
    let output = run_args(&["project", "--format", "csv", "--horizon", "12"]).expect("project should pass");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 13);
    assert!(lines[0].starts_with("month,"));
    assert!(lines[12].starts_with("12,Dec 2026,"));
}

#[test]
fn test_zero_horizon_is_rejected() {
    let err = run_args(&["project", "--horizon", "0"]).unwrap_err();

    assert!(format!("{err:#}").contains("Failed to calculate the financial model"));
}

#[test]
fn test_project_table_rounds_to_cents() {
    let output = run_args(&["project", "--horizon", "3"]).expect("project should pass");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[3].contains("1961.65"));
    assert!(lines[3].contains("10435.67"));
    assert!(lines[3].contains("71023.10"));
}

#[test]
fn test_horizon_beyond_maximum_is_rejected() {
    let err = run_args(&["project", "--horizon", "4294967295"]).unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("Failed to calculate the financial model"));
    assert!(message.contains("exceeds the maximum of 1200"));
}

#[test]
fn test_plan_and_debts_from_files() {
    let plan = fixture("plan.toml");
    let debts = fixture("debts.csv");

    let output = run_args(&[
        "check",
        "--plan",
        plan.to_str().expect("utf-8 path"),
        "--debts",
        debts.to_str().expect("utf-8 path"),
    ])
    .expect("check should pass");

    assert!(output.starts_with("Inventory CSV plan"));
    assert!(output.contains("Month 12 (Dec 2026)"));
    assert!(output.contains("55601.11"));
    assert!(!output.contains("Month 24"));
}

#[test]
fn test_missing_plan_reports_path() {
    let err = run_args(&["check", "--plan", "/nonexistent/plan.toml"]).unwrap_err();

    assert!(format!("{err:#}").contains("Failed to load plan: /nonexistent/plan.toml"));
}

#[test]
fn test_workbook_written_to_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("model.xlsx");

    let output = run_args(&["workbook", "--output", path.to_str().expect("utf-8 path")])
        .expect("workbook should pass");

    assert_eq!(output.trim(), format!("Wrote {}", path.display()));
    let bytes = std::fs::read(&path).expect("workbook should exist");
    assert_eq!(&bytes[0..2], b"PK");
}
