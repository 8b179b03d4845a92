use std::borrow::Cow;

use serde_json::Value;

use super::{TableColumn, TableRow};

/// Synthetic row-number column; never copied.
pub const AUTO_INDEX_COLUMN: &str = "auto_index";

const DELIMITER: char = '\t';
const NEW_LINE: char = '\n';

/// Plain text of a cell value; `null` is empty.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Wraps values containing a tab or newline in double quotes so spreadsheet
/// pastes keep them in one cell.
#[must_use]
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if value.contains([DELIMITER, NEW_LINE]) {
        Cow::Owned(format!("\"{value}\""))
    } else {
        Cow::Borrowed(value)
    }
}

#[must_use]
pub fn cell_text(row: &TableRow, column: &TableColumn) -> String {
    row.get(column.accessor()).map(value_text).unwrap_or_default()
}

fn copyable_columns(columns: &[TableColumn]) -> impl Iterator<Item = &TableColumn> {
    columns
        .iter()
        .filter(|column| column.visible && !column.is_auto_index())
}

fn header_line(columns: &[TableColumn]) -> String {
    copyable_columns(columns)
        .map(|column| column.header.as_str())
        .collect::<Vec<_>>()
        .join("\t")
}

fn data_line(columns: &[TableColumn], row: &TableRow) -> String {
    copyable_columns(columns)
        .map(|column| quote_value(&cell_text(row, column)).into_owned())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Tab-separated row, optionally preceded by the header line.
#[must_use]
pub fn row_text(columns: &[TableColumn], row: &TableRow, with_header: bool) -> String {
    let mut lines = Vec::with_capacity(2);
    if with_header {
        lines.push(header_line(columns));
    }
    lines.push(data_line(columns, row));
    lines.join("\n")
}

/// Whole table as tab-separated lines.
#[must_use]
pub fn table_text(
    columns: &[TableColumn],
    rows: &[TableRow],
    with_header: bool,
    header_only: bool,
) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if with_header {
        lines.push(header_line(columns));
        if header_only {
            return lines.join("\n");
        }
    }
    lines.extend(rows.iter().map(|row| data_line(columns, row)));
    lines.join("\n")
}

/// One column as newline-separated values. Empty values are skipped.
#[must_use]
pub fn column_text(
    column: &TableColumn,
    rows: &[TableRow],
    include_header: bool,
    header_only: bool,
) -> String {
    if include_header && header_only {
        return column.header.clone();
    }
    let header = include_header.then(|| column.header.clone());
    header
        .into_iter()
        .chain(rows.iter().map(|row| cell_text(row, column)))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
