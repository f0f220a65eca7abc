//! Markdown summaries of spreadsheet workbooks: sheet names, sizes, headers and
//! a preview of each sheet's first rows.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod workbook;

pub use config::{ReportConfig, ReportLabels};
pub use error::{ReportError, SheetError};
pub use report::{generate_report, inspect_workbook, ReportSummary, SheetOutcome, WorkbookReport};
