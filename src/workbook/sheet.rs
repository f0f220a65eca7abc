use calamine::{Data, Range};

use super::cell::CellValue;

/// A named table: the first row of the used range becomes the header row.
/// Columns are counted from column A; data rows with no values are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<CellValue>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut rows = rows.into_iter();
        let Some(header) = rows.next() else {
            return Sheet {
                name: name.into(),
                ..Sheet::default()
            };
        };

        let columns: Vec<CellValue> = header
            .into_iter()
            .enumerate()
            .map(|(index, cell)| {
                if cell.is_empty() {
                    CellValue::Text(format!("Unnamed: {index}"))
                } else {
                    cell
                }
            })
            .collect();
        let width = columns.len();
        let rows = rows
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .filter(|row| !row.iter().all(CellValue::is_empty))
            .collect();

        Sheet {
            name: name.into(),
            columns,
            rows,
        }
    }

    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let leading = range.start().map_or(0, |(_, col)| col as usize);
        let rows = range
            .rows()
            .map(|row| {
                let mut cells = vec![CellValue::Empty; leading];
                cells.extend(row.iter().map(CellValue::from));
                cells
            })
            .collect();
        Self::from_rows(name, rows)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
