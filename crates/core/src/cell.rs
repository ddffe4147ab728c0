use serde::Serialize;

/// A single ingested cell.
///
/// Input files are loosely typed (CSV fields are text, spreadsheet cells
/// carry native types), so every cell is captured as a tagged value at load
/// time and only ever compared through its string form (`render`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Blank cells never enter a value set or a duplicate set.
    /// Blank means absent or empty text; whitespace-only text is a value.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Absent => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The string form used for all set comparisons, or `None` for blanks.
    ///
    /// Integral numbers render without a decimal point ("3", never "3.0").
    /// Comparison is string identity: text "1" and text "1.0" stay distinct
    /// values even though they are numerically equal.
    pub fn render(&self) -> Option<String> {
        match self {
            CellValue::Absent => None,
            CellValue::Text(s) if s.is_empty() => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
