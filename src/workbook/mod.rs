//! Workbook access: opening a spreadsheet file and loading its sheets.

pub mod cell;
pub mod sheet;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Reader, Sheets};

use crate::error::{ReportError, SheetError};

pub use cell::{format_number, CellValue};
pub use sheet::Sheet;

/// Anything that can enumerate sheets in native order and load them one at a time.
pub trait SheetSource {
    fn sheet_names(&self) -> Vec<String>;
    fn load_sheet(&mut self, name: &str) -> Result<Sheet, SheetError>;
}

/// A workbook opened read-only through calamine (xlsx, xlsm, xlsb, xls, ods).
pub struct CalamineWorkbook {
    sheets: Sheets<BufReader<File>>,
}

impl CalamineWorkbook {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let sheets = open_workbook_auto(path).map_err(|source| ReportError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { sheets })
    }
}

impl SheetSource for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn load_sheet(&mut self, name: &str) -> Result<Sheet, SheetError> {
        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|err| SheetError::new(err.to_string()))?;
        Ok(Sheet::from_range(name, &range))
    }
}
