use crate::cell::CellValue;

/// One parsed input file: ordered named columns of equal length.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Table {
    pub fn with_headers(names: impl IntoIterator<Item = String>) -> Self {
        Table {
            columns: names
                .into_iter()
                .map(|name| Column { name, cells: Vec::new() })
                .collect(),
        }
    }

    /// Append one data row. Short rows are padded with absent cells so
    /// columns stay equal length; fields beyond the header width are
    /// dropped.
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        let mut fields = row.into_iter();
        for column in &mut self.columns {
            column.cells.push(fields.next().unwrap_or(CellValue::Absent));
        }
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
