//! End-to-end report generation against workbooks written at test time.

mod common;

use std::fs;

use rust_xlsxwriter::Workbook;
use workbook_report::{generate_report, inspect_workbook, ReportConfig, ReportError, SheetOutcome};

use common::{unique_temp_path, write_costs_workbook};

fn preview_table(report: &str, sheet: &str) -> Vec<String> {
    let section = report
        .split(&format!("### {sheet}\n\n"))
        .nth(1)
        .expect("sheet section should exist");
    let table = section
        .split("**ตัวอย่างข้อมูล (5 แถวแรก):**\n\n")
        .nth(1)
        .expect("preview should exist");
    table
        .split("\n\n")
        .next()
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn costs_and_summary_example() {
    let input = write_costs_workbook("example");
    let output = unique_temp_path("example", "md");
    let config = ReportConfig::new(&input, &output);

    let summary = generate_report(&config).expect("report should be generated");
    assert_eq!(summary.sheet_count, 2);
    assert_eq!(summary.failed_sheets, 0);

    let text = fs::read_to_string(&output).expect("report should be readable as UTF-8");
    assert!(text.starts_with("# สรุปข้อมูลต้นทุนต้นไม้ปี 2568\n\n"));
    assert!(text.contains("**จำนวนชีต:** 2 ชีต"));
    assert!(text.contains("1. Costs\n2. Summary\n"));
    assert!(text.contains("- **จำนวนแถว:** 120\n- **จำนวนคอลัมน์:** 4\n"));
    assert!(text.contains("- **คอลัมน์:** ['รายการ', 'จำนวน', 'ราคา', 'หมายเหตุ']"));

    let table = preview_table(&text, "Costs");
    assert_eq!(table.len(), 7, "header + separator + 5 rows: {table:?}");
    assert!(table[0].starts_with("| รายการ"));
    assert!(table[2].contains("ต้นไม้ 1"));
    assert!(table[6].contains("ต้นไม้ 5"));
    assert!(!text.contains("ต้นไม้ 6 "));

    let summary_section = text.split("### Summary\n\n").nth(1).expect("summary section");
    assert!(summary_section.contains("- **จำนวนแถว:** 0\n"));
    assert!(summary_section.contains("- **จำนวนคอลัมน์:** 3\n"));
    assert!(summary_section.contains("**ไม่มีข้อมูลในชีตนี้**"));

    assert!(text.find("### Costs").unwrap() < text.find("### Summary").unwrap());

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn blank_cell_renders_as_empty_string() {
    let input = write_costs_workbook("blank");
    let output = unique_temp_path("blank", "md");
    generate_report(&ReportConfig::new(&input, &output)).expect("report");

    let text = fs::read_to_string(&output).expect("report");
    let table = preview_table(&text, "Costs");
    let second: Vec<&str> = table[3].split('|').map(str::trim).collect();
    assert_eq!(second, vec!["", "ต้นไม้ 2", "2", "", "ok", ""]);
    assert!(!text.contains("nan") && !text.contains("None"));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn rerun_produces_identical_bytes() {
    let input = write_costs_workbook("determinism");
    let first = unique_temp_path("determinism-a", "md");
    let second = unique_temp_path("determinism-b", "md");
    generate_report(&ReportConfig::new(&input, &first)).expect("first run");
    generate_report(&ReportConfig::new(&input, &second)).expect("second run");
    assert_eq!(
        fs::read(&first).expect("first output"),
        fs::read(&second).expect("second output")
    );

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(first);
    let _ = fs::remove_file(second);
}

#[test]
fn existing_output_is_replaced() {
    let input = write_costs_workbook("overwrite");
    let output = unique_temp_path("overwrite", "md");
    fs::write(&output, "stale content that should disappear").expect("stale file");
    generate_report(&ReportConfig::new(&input, &output)).expect("report");
    let text = fs::read_to_string(&output).expect("report");
    assert!(!text.contains("stale content"));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn missing_input_is_run_level_error_and_writes_nothing() {
    let input = unique_temp_path("missing", "xlsx");
    let output = unique_temp_path("missing", "md");
    let err = generate_report(&ReportConfig::new(&input, &output)).expect_err("should fail");
    assert!(matches!(err, ReportError::Open { .. }));
    assert!(err.to_string().contains("failed to open workbook"));
    assert!(!output.exists());
}

#[test]
fn empty_worksheet_has_no_columns_and_no_data() {
    let input = unique_temp_path("empty", "xlsx");
    let mut workbook = Workbook::new();
    workbook.add_worksheet().set_name("ว่างเปล่า").expect("sheet name");
    workbook.save(&input).expect("fixture");

    let report = inspect_workbook(&ReportConfig::new(&input, "unused.md")).expect("inspect");
    assert_eq!(report.sheet_names, vec!["ว่างเปล่า".to_string()]);
    let SheetOutcome::Summarized(sheet) = &report.sheets[0] else {
        panic!("empty sheet should still be summarized");
    };
    assert_eq!(sheet.row_count, 0);
    assert_eq!(sheet.column_count, 0);
    assert!(!sheet.has_data());

    let _ = fs::remove_file(input);
}

#[test]
fn preview_row_count_is_configurable() {
    let input = write_costs_workbook("preview-rows");
    let output = unique_temp_path("preview-rows", "md");
    let config = ReportConfig {
        preview_rows: 2,
        ..ReportConfig::new(&input, &output)
    };
    generate_report(&config).expect("report");
    let text = fs::read_to_string(&output).expect("report");
    assert!(text.contains("**ตัวอย่างข้อมูล (2 แถวแรก):**"));
    assert!(text.contains("ต้นไม้ 2"));
    assert!(!text.contains("ต้นไม้ 3 "));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn blank_rows_inside_data_are_not_counted() {
    let input = unique_temp_path("blank-row", "xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Costs").expect("sheet name");
    sheet.write_string(0, 0, "item").expect("header");
    sheet.write_string(0, 1, "qty").expect("header");
    sheet.write_string(1, 0, "teak").expect("cell");
    sheet.write_number(1, 1, 1.0).expect("cell");
    sheet.write_string(3, 0, "oak").expect("cell");
    sheet.write_number(3, 1, 2.0).expect("cell");
    workbook.save(&input).expect("fixture");

    let report = inspect_workbook(&ReportConfig::new(&input, "unused.md")).expect("inspect");
    let SheetOutcome::Summarized(costs) = &report.sheets[0] else {
        panic!("sheet should be summarized");
    };
    assert_eq!(costs.row_count, 2);
    assert_eq!(costs.preview.len(), 2);
    assert!(costs
        .preview
        .iter()
        .all(|row| row.iter().any(|cell| !cell.is_empty())));

    let _ = fs::remove_file(input);
}

#[test]
fn data_starting_at_column_b_keeps_unnamed_first_column() {
    let input = unique_temp_path("offset", "xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Offset").expect("sheet name");
    sheet.write_string(2, 1, "h").expect("header");
    sheet.write_number(3, 1, 5.0).expect("cell");
    workbook.save(&input).expect("fixture");

    let output = unique_temp_path("offset", "md");
    generate_report(&ReportConfig::new(&input, &output)).expect("report");
    let text = fs::read_to_string(&output).expect("report");
    assert!(text.contains("- **จำนวนแถว:** 1\n"));
    assert!(text.contains("- **จำนวนคอลัมน์:** 2\n"));
    assert!(text.contains("- **คอลัมน์:** ['Unnamed: 0', 'h']"));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}
