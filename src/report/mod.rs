//! Builds a per-sheet summary of a workbook and writes it out as Markdown.

pub mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::workbook::{CalamineWorkbook, CellValue, Sheet, SheetSource};

pub use markdown::{render_column_list, render_markdown, render_pipe_table};

/// What survives of a sheet once it has been summarized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSummary {
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<CellValue>,
    pub preview: Vec<Vec<CellValue>>,
}

impl SheetSummary {
    pub fn from_sheet(sheet: Sheet, preview_rows: usize) -> Self {
        let row_count = sheet.row_count();
        let column_count = sheet.column_count();
        let mut rows = sheet.rows;
        rows.truncate(preview_rows);
        Self {
            name: sheet.name,
            row_count,
            column_count,
            columns: sheet.columns,
            preview: rows,
        }
    }

    pub fn has_data(&self) -> bool {
        self.row_count > 0 && self.column_count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SheetOutcome {
    Summarized(SheetSummary),
    Failed { name: String, message: String },
}

impl SheetOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Summarized(summary) => &summary.name,
            Self::Failed { name, .. } => name,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkbookReport {
    pub source_name: String,
    pub sheet_names: Vec<String>,
    pub preview_rows: usize,
    pub sheets: Vec<SheetOutcome>,
}

impl WorkbookReport {
    pub fn build(
        source_name: impl Into<String>,
        source: &mut impl SheetSource,
        preview_rows: usize,
    ) -> Self {
        let sheet_names = source.sheet_names();
        let sheets = collect_outcomes(source, &sheet_names, preview_rows);
        Self {
            source_name: source_name.into(),
            sheet_names,
            preview_rows,
            sheets,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.sheets.iter().filter(|s| s.is_failed()).count()
    }
}

/// One outcome per sheet name, in the order given. A sheet that fails to load
/// becomes `SheetOutcome::Failed` and the next sheet is still processed.
pub fn collect_outcomes(
    source: &mut impl SheetSource,
    sheet_names: &[String],
    preview_rows: usize,
) -> Vec<SheetOutcome> {
    sheet_names
        .iter()
        .map(|name| match source.load_sheet(name) {
            Ok(sheet) => SheetOutcome::Summarized(SheetSummary::from_sheet(sheet, preview_rows)),
            Err(err) => SheetOutcome::Failed {
                name: name.clone(),
                message: err.message,
            },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub output_path: PathBuf,
    pub sheet_count: usize,
    pub failed_sheets: usize,
}

pub fn source_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Open the workbook named by `config`, summarize it and load every sheet.
pub fn inspect_workbook(config: &ReportConfig) -> Result<WorkbookReport, ReportError> {
    config.validate()?;
    let mut workbook = CalamineWorkbook::open(&config.input_path)?;
    Ok(WorkbookReport::build(
        source_file_name(&config.input_path),
        &mut workbook,
        config.preview_rows,
    ))
}

/// Open, summarize, render and write the report in one pass.
pub fn generate_report(config: &ReportConfig) -> Result<ReportSummary, ReportError> {
    let report = inspect_workbook(config)?;
    let text = render_markdown(&report, &config.title(), &config.labels());
    write_report(&config.output_path, &text)?;
    Ok(ReportSummary {
        output_path: config.output_path.clone(),
        sheet_count: report.sheets.len(),
        failed_sheets: report.failed_count(),
    })
}

fn write_report(path: &Path, text: &str) -> Result<(), ReportError> {
    let write_err = |source| ReportError::Write {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, text).map_err(write_err)
}
