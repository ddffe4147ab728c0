use serde::Serialize;

use crate::config::NormalizeMode;
use crate::normalize::{ColumnCollision, NormalizedTable};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One input file as the engine sees it: a display label plus either the
/// normalized table or the load failure. Set once at load time.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub label: String,
    pub outcome: LoadOutcome,
}

#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Table(NormalizedTable),
    Error(String),
}

impl SourceFile {
    pub fn table(&self) -> Option<&NormalizedTable> {
        match &self.outcome {
            LoadOutcome::Table(table) => Some(table),
            LoadOutcome::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, LoadOutcome::Error(_))
    }
}

/// Pre-loaded files in original argument order.
#[derive(Debug, Clone, Default)]
pub struct CompareInput {
    pub files: Vec<SourceFile>,
}

// ---------------------------------------------------------------------------
// Report rows
// ---------------------------------------------------------------------------

/// What one file contributes to one report row. Exactly one of four states
/// per (file, column) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// The file failed to load; it contributes nothing anywhere.
    FileError,
    /// The file loaded but has no column with this canonical name.
    NotPresent,
    /// The file has the column; either list may be empty.
    Present {
        only_in: Vec<String>,
        duplicates: Vec<String>,
    },
}

impl CellState {
    /// The (only-in, duplicates) display pair this file contributes to a
    /// report row.
    pub fn render(&self) -> (String, String) {
        match self {
            CellState::FileError => ("File error".to_string(), "File error".to_string()),
            CellState::NotPresent => {
                ("Column not present".to_string(), "Column not present".to_string())
            }
            CellState::Present { only_in, duplicates } => {
                (only_in.join(";"), duplicates.join(";"))
            }
        }
    }
}

/// One report row: a canonical column plus one state per input file,
/// parallel to `CompareReport::files`. Rows are independent.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnRow {
    pub column: String,
    pub cells: Vec<CellState>,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub label: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collisions: Vec<ColumnCollision>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareSummary {
    /// Size of the canonical-column union across loaded files.
    pub columns_total: usize,
    /// Rows actually emitted (all-blank and absent columns are dropped).
    pub columns_reported: usize,
    pub files_ok: usize,
    pub files_errored: usize,
    pub collisions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareMeta {
    pub mode: NormalizeMode,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub meta: CompareMeta,
    pub summary: CompareSummary,
    pub files: Vec<FileEntry>,
    pub rows: Vec<ColumnRow>,
}

impl CompareReport {
    /// Header record of the CSV report: the column-name cell, then an
    /// only-in/duplicates pair per input file in original argument order.
    /// "(Exact)" is part of the fixed header contract, independent of the
    /// normalization mode.
    pub fn csv_header(&self) -> Vec<String> {
        let mut header = vec!["Normalized Column".to_string()];
        for file in &self.files {
            header.push(format!("Only in {} (Exact)", file.label));
            header.push(format!("Duplicates in {}", file.label));
        }
        header
    }

    /// Data records of the CSV report, one per compared column.
    pub fn csv_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut record = vec![row.column.clone()];
                for cell in &row.cells {
                    let (only_in, duplicates) = cell.render();
                    record.push(only_in);
                    record.push(duplicates);
                }
                record
            })
            .collect()
    }
}
