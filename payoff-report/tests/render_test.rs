//! Integration tests rendering the bundled household plan.

use payoff_core::FinancialModel;
use payoff_report::{Renderer, SnapshotCsvWriter, WorkbookRenderer};
use pretty_assertions::assert_eq;

fn default_model() -> FinancialModel {
    let plan = payoff_data::default_plan().expect("default plan should load");
    FinancialModel::build(&plan).expect("model should build")
}

#[test]
fn test_workbook_saved_to_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("financial_model.xlsx");

    WorkbookRenderer::new()
        .save(&default_model(), &path)
        .expect("workbook should save");

    let bytes = std::fs::read(&path).expect("workbook should exist");
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn test_workbook_renderer_trait_matches_bytes() {
    let model = default_model();
    let renderer = WorkbookRenderer::new();

    let via_trait = renderer.render(&model).expect("render");

    assert_eq!(&via_trait[0..2], b"PK");
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("financial_model.xlsx");

    assert!(WorkbookRenderer::new().save(&default_model(), &path).is_err());
}

#[test]
fn test_projection_csv_has_one_row_per_month() {
    let csv = SnapshotCsvWriter::new()
        .render(&default_model())
        .expect("CSV should render");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 25);
    assert!(lines[0].starts_with("month,calendar_month,income"));
    assert!(lines[1].starts_with("1,Jan 2026,6616.33,287.97,1400.16,"));
    assert!(lines[1].contains(",13938.03,"));
    assert!(lines[12].starts_with("12,Dec 2026,"));
    assert!(lines[12].contains(",3161.65,790.41,"));
    assert!(lines[12].contains(",55601.11,"));
    assert!(lines[24].starts_with("24,Dec 2027,"));
    assert!(lines[24].contains(",50374.77,"));
}
