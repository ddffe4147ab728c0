// Excel file import (xlsx, xls, xlsm) — first sheet only, default settings

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use tabcmp_core::{CellValue, Table};

/// Import the first sheet of an Excel workbook. The first row supplies raw
/// column names; typed cells are captured as tagged values.
pub fn import(path: &Path) -> Result<Table, String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("failed to open Excel file: {e}"))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let sheet_name = match sheet_names.first() {
        Some(name) => name.clone(),
        None => return Err("Excel file contains no sheets".to_string()),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| format!("failed to read sheet '{sheet_name}': {e}"))?;

    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(row) => row,
        None => return Ok(Table::default()),
    };
    let mut table = Table::with_headers(headers.iter().map(header_text));

    for row in rows {
        table.push_row(row.iter().map(convert_cell).collect());
    }

    Ok(table)
}

/// Column names come from the first row regardless of cell type; a numeric
/// header renders like any other cell.
fn header_text(cell: &Data) -> String {
    convert_cell(cell).render().unwrap_or_default()
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Absent,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        // Error cells keep their display text ("#DIV/0!", "#REF!", ...)
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
