use crate::model::{ColumnRow, CompareSummary, FileEntry};

/// Compute summary statistics for a finished comparison.
pub fn compute_summary(
    files: &[FileEntry],
    columns_total: usize,
    rows: &[ColumnRow],
) -> CompareSummary {
    let files_ok = files.iter().filter(|f| f.ok).count();

    CompareSummary {
        columns_total,
        columns_reported: rows.len(),
        files_ok,
        files_errored: files.len() - files_ok,
        collisions: files.iter().map(|f| f.collisions.len()).sum(),
    }
}
