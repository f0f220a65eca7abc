#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_xlsxwriter::Workbook;

pub fn unique_temp_path(name: &str, extension: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("workbook-report-{name}-{stamp}.{extension}"))
}

/// "Costs": 4 columns and 120 data rows, with a blank cell in the second row.
/// "Summary": header row only.
pub fn write_costs_workbook(name: &str) -> PathBuf {
    let path = unique_temp_path(name, "xlsx");
    let mut workbook = Workbook::new();

    let costs = workbook.add_worksheet();
    costs.set_name("Costs").expect("sheet name");
    for (col, header) in ["รายการ", "จำนวน", "ราคา", "หมายเหตุ"].iter().enumerate() {
        costs.write_string(0, col as u16, *header).expect("header");
    }
    for row in 1..=120u32 {
        costs.write_string(row, 0, format!("ต้นไม้ {row}")).expect("item");
        costs.write_number(row, 1, f64::from(row)).expect("qty");
        if row != 2 {
            costs.write_number(row, 2, f64::from(row) * 1.5).expect("price");
        }
        costs.write_string(row, 3, "ok").expect("note");
    }

    let summary = workbook.add_worksheet();
    summary.set_name("Summary").expect("sheet name");
    for (col, header) in ["a", "b", "c"].iter().enumerate() {
        summary.write_string(0, col as u16, *header).expect("header");
    }

    workbook.save(&path).expect("fixture workbook should be written");
    path
}
