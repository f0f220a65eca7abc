//! Markdown rendering of a `WorkbookReport`.

use std::fmt::Write as _;

use super::{SheetOutcome, SheetSummary, WorkbookReport};
use crate::config::ReportLabels;
use crate::workbook::{format_number, CellValue};

/// Minimum padding added to each header when sizing pipe-table columns.
const HEADER_PADDING: usize = 2;

pub fn render_markdown(report: &WorkbookReport, title: &str, labels: &ReportLabels) -> String {
    let mut out = String::new();
    let _ = write!(out, "# {title}\n\n");
    let _ = write!(out, "**{}:** {}\n\n", labels.source_file, report.source_name);
    let _ = write!(
        out,
        "**{}:** {} {}\n\n",
        labels.sheet_count,
        report.sheet_names.len(),
        labels.sheet_unit
    );

    let _ = write!(out, "## {}\n\n", labels.sheet_list_heading);
    for (index, name) in report.sheet_names.iter().enumerate() {
        let _ = writeln!(out, "{}. {name}", index + 1);
    }
    let _ = write!(out, "\n## {}\n\n", labels.sheets_heading);

    for outcome in &report.sheets {
        match outcome {
            SheetOutcome::Summarized(summary) => {
                render_sheet(&mut out, summary, report.preview_rows, labels)
            }
            SheetOutcome::Failed { name, message } => {
                let _ = write!(out, "### {name}\n\n");
                let _ = write!(
                    out,
                    "**{}:** {} - {message}\n\n",
                    labels.error, labels.read_failure
                );
            }
        }
    }
    out
}

fn render_sheet(out: &mut String, summary: &SheetSummary, preview_rows: usize, labels: &ReportLabels) {
    let _ = write!(out, "### {}\n\n", summary.name);
    let _ = writeln!(out, "- **{}:** {}", labels.row_count, summary.row_count);
    let _ = writeln!(out, "- **{}:** {}", labels.column_count, summary.column_count);
    let _ = write!(
        out,
        "- **{}:** {}\n\n",
        labels.columns,
        render_column_list(&summary.columns)
    );

    if summary.has_data() {
        let _ = write!(out, "**{}**\n\n", labels.preview_heading(preview_rows));
        out.push_str(&render_pipe_table(&summary.columns, &summary.preview));
        out.push_str("\n\n");
    } else {
        let _ = write!(out, "**{}**\n\n", labels.no_data);
    }
}

/// Bracketed list of column headers: text quoted, numbers bare, duplicates kept.
pub fn render_column_list(columns: &[CellValue]) -> String {
    let items: Vec<String> = columns
        .iter()
        .map(|column| match column {
            CellValue::Text(text) => quote_literal(text),
            CellValue::Number(value) => format_number(*value),
            CellValue::Bool(_) => column.display(),
            CellValue::Empty => quote_literal(""),
        })
        .collect();
    format!("[{}]", items.join(", "))
}

fn quote_literal(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Pipe-format table: header row, alignment row, one line per row. No trailing newline.
pub fn render_pipe_table(columns: &[CellValue], rows: &[Vec<CellValue>]) -> String {
    let headers: Vec<String> = columns.iter().map(|c| escape_cell(&c.display())).collect();
    let grid: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            (0..headers.len())
                .map(|i| row.get(i).map(|c| escape_cell(&c.display())).unwrap_or_default())
                .collect()
        })
        .collect();

    let aligns: Vec<Align> = (0..headers.len())
        .map(|i| {
            let mut cells = rows.iter().filter_map(|row| row.get(i)).filter(|c| !c.is_empty());
            let mut any = false;
            let numeric = cells.all(|c| {
                any = true;
                c.is_numeric()
            });
            if numeric && any {
                Align::Right
            } else {
                Align::Left
            }
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            grid.iter()
                .map(|row| row[i].chars().count())
                .fold(header.chars().count() + HEADER_PADDING, usize::max)
        })
        .collect();

    let mut lines = Vec::with_capacity(grid.len() + 2);
    lines.push(table_line(&headers, &widths, &aligns));
    let separator: Vec<String> = widths
        .iter()
        .zip(&aligns)
        .map(|(width, align)| match align {
            Align::Left => format!(":{}", "-".repeat(width + 1)),
            Align::Right => format!("{}:", "-".repeat(width + 1)),
        })
        .collect();
    lines.push(format!("|{}|", separator.join("|")));
    for row in &grid {
        lines.push(table_line(row, &widths, &aligns));
    }
    lines.join("\n")
}

fn table_line(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter().zip(aligns))
        .map(|(cell, (width, align))| {
            let fill = " ".repeat(width.saturating_sub(cell.chars().count()));
            match align {
                Align::Left => format!("{cell}{fill}"),
                Align::Right => format!("{fill}{cell}"),
            }
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}
