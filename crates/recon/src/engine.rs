use std::collections::{HashMap, HashSet};

use tabcmp_core::CellValue;

use crate::config::CompareConfig;
use crate::model::{
    CellState, ColumnRow, CompareInput, CompareMeta, CompareReport, FileEntry, LoadOutcome,
};
use crate::summary::compute_summary;

/// Run the comparison. Total over well-formed inputs: load failures arrive
/// pre-recorded in the input, and nothing past that point can fail.
pub fn run(config: &CompareConfig, input: &CompareInput) -> CompareReport {
    let union = column_union(input);

    let rows: Vec<ColumnRow> = union
        .iter()
        .filter_map(|column| build_row(column, input))
        .collect();

    let files: Vec<FileEntry> = input
        .files
        .iter()
        .map(|file| FileEntry {
            label: file.label.clone(),
            ok: !file.is_error(),
            error: match &file.outcome {
                LoadOutcome::Error(message) => Some(message.clone()),
                LoadOutcome::Table(_) => None,
            },
            collisions: file
                .table()
                .map(|table| table.collisions.clone())
                .unwrap_or_default(),
        })
        .collect();

    let summary = compute_summary(&files, union.len(), &rows);

    CompareReport {
        meta: CompareMeta {
            mode: config.mode,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        files,
        rows,
    }
}

/// Union of canonical column names across loaded tables, in first-
/// appearance order. Errored files contribute nothing.
fn column_union(input: &CompareInput) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut union = Vec::new();
    for file in &input.files {
        if let Some(table) = file.table() {
            for column in &table.columns {
                if seen.insert(column.name.clone()) {
                    union.push(column.name.clone());
                }
            }
        }
    }
    union
}

// ---------------------------------------------------------------------------
// Per-column reconciliation
// ---------------------------------------------------------------------------

/// One file's view of one column before cross-file comparison.
enum Slot {
    Error,
    NotPresent,
    Values(ColumnValues),
}

struct ColumnValues {
    /// Distinct non-blank values, first-occurrence order.
    values: Vec<String>,
    value_set: HashSet<String>,
    /// Distinct values occurring at least twice, first-occurrence order.
    duplicates: Vec<String>,
}

fn collect_column(cells: &[CellValue]) -> ColumnValues {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut values: Vec<String> = Vec::new();

    for cell in cells {
        if let Some(value) = cell.render() {
            let count = counts.entry(value.clone()).or_insert(0);
            if *count == 0 {
                values.push(value);
            }
            *count += 1;
        }
    }

    let duplicates = values.iter().filter(|v| counts[*v] >= 2).cloned().collect();
    let value_set = values.iter().cloned().collect();

    ColumnValues { values, value_set, duplicates }
}

/// Build the report row for one canonical column, or `None` when the column
/// is dropped: no loaded file has it, or every file's value set is empty.
fn build_row(column: &str, input: &CompareInput) -> Option<ColumnRow> {
    let slots: Vec<Slot> = input
        .files
        .iter()
        .map(|file| match file.table() {
            None => Slot::Error,
            Some(table) => match table.column(column) {
                None => Slot::NotPresent,
                Some(col) => Slot::Values(collect_column(&col.cells)),
            },
        })
        .collect();

    let any_present = slots.iter().any(|s| matches!(s, Slot::Values(_)));
    let any_values = slots
        .iter()
        .any(|s| matches!(s, Slot::Values(v) if !v.values.is_empty()));
    if !any_present || !any_values {
        return None;
    }

    let cells = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| match slot {
            Slot::Error => CellState::FileError,
            Slot::NotPresent => CellState::NotPresent,
            Slot::Values(mine) => {
                // A value is only-in-file when no other file's value set for
                // this column contains it. Errored files and files lacking
                // the column contribute nothing to the union of others.
                let only_in = mine
                    .values
                    .iter()
                    .filter(|value| {
                        !slots.iter().enumerate().any(|(j, other)| {
                            j != i
                                && matches!(other, Slot::Values(o) if o.value_set.contains(*value))
                        })
                    })
                    .cloned()
                    .collect();

                CellState::Present {
                    only_in,
                    duplicates: mine.duplicates.clone(),
                }
            }
        })
        .collect();

    Some(ColumnRow { column: column.to_string(), cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NormalizeMode;
    use crate::model::SourceFile;
    use crate::normalize::normalize_table;
    use tabcmp_core::{Column, Table};

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn table(columns: Vec<(&str, Vec<CellValue>)>) -> Table {
        Table {
            columns: columns
                .into_iter()
                .map(|(name, cells)| Column { name: name.to_string(), cells })
                .collect(),
        }
    }

    fn source(label: &str, table: &Table, mode: NormalizeMode) -> SourceFile {
        SourceFile {
            label: label.to_string(),
            outcome: LoadOutcome::Table(normalize_table(table, mode)),
        }
    }

    fn errored(label: &str) -> SourceFile {
        SourceFile {
            label: label.to_string(),
            outcome: LoadOutcome::Error("parse failure".to_string()),
        }
    }

    fn present(cell: &CellState) -> (&[String], &[String]) {
        match cell {
            CellState::Present { only_in, duplicates } => (only_in, duplicates),
            other => panic!("expected Present, got {other:?}"),
        }
    }

    #[test]
    fn two_files_lower_mode() {
        // File A: ID = [1, 2, 2, 3]; File B: id = [3, 4]
        let a = table(vec![("ID", vec![text("1"), text("2"), text("2"), text("3")])]);
        let b = table(vec![("id", vec![text("3"), text("4")])]);
        let config = CompareConfig { mode: NormalizeMode::Lower };
        let input = CompareInput {
            files: vec![
                source("a", &a, config.mode),
                source("b", &b, config.mode),
            ],
        };

        let report = run(&config, &input);
        assert_eq!(report.rows.len(), 1);

        let row = &report.rows[0];
        assert_eq!(row.column, "id");

        let (only_a, dup_a) = present(&row.cells[0]);
        assert_eq!(only_a, ["1", "2"]);
        assert_eq!(dup_a, ["2"]);

        let (only_b, dup_b) = present(&row.cells[1]);
        assert_eq!(only_b, ["4"]);
        assert!(dup_b.is_empty());
    }

    #[test]
    fn errored_file_is_marked_and_ignored() {
        let a = table(vec![("id", vec![text("1"), text("2")])]);
        let b = table(vec![("id", vec![text("2"), text("3")])]);
        let config = CompareConfig::default();
        let input = CompareInput {
            files: vec![
                source("a", &a, config.mode),
                source("b", &b, config.mode),
                errored("c"),
            ],
        };

        let report = run(&config, &input);
        assert_eq!(report.summary.files_ok, 2);
        assert_eq!(report.summary.files_errored, 1);

        let row = &report.rows[0];
        assert_eq!(row.cells[2], CellState::FileError);

        // Reconciliation between a and b is computed as if c did not exist
        let (only_a, _) = present(&row.cells[0]);
        assert_eq!(only_a, ["1"]);
        let (only_b, _) = present(&row.cells[1]);
        assert_eq!(only_b, ["3"]);
    }

    #[test]
    fn column_missing_from_one_file() {
        let a = table(vec![
            ("id", vec![text("1")]),
            ("name", vec![text("x")]),
        ]);
        let b = table(vec![("id", vec![text("1")])]);
        let config = CompareConfig::default();
        let input = CompareInput {
            files: vec![source("a", &a, config.mode), source("b", &b, config.mode)],
        };

        let report = run(&config, &input);
        let name_row = report.rows.iter().find(|r| r.column == "name").unwrap();
        assert_eq!(name_row.cells[1], CellState::NotPresent);

        // With no other file holding the column, every value is only-in-a
        let (only_a, _) = present(&name_row.cells[0]);
        assert_eq!(only_a, ["x"]);
    }

    #[test]
    fn all_blank_column_is_dropped() {
        let a = table(vec![
            ("id", vec![text("1")]),
            ("empty", vec![CellValue::Absent, text("")]),
        ]);
        let b = table(vec![("empty", vec![CellValue::Absent])]);
        let config = CompareConfig::default();
        let input = CompareInput {
            files: vec![source("a", &a, config.mode), source("b", &b, config.mode)],
        };

        let report = run(&config, &input);
        assert_eq!(report.summary.columns_total, 2);
        assert_eq!(report.summary.columns_reported, 1);
        assert!(report.rows.iter().all(|r| r.column != "empty"));
    }

    #[test]
    fn column_present_only_in_errored_file_never_surfaces() {
        let a = table(vec![("id", vec![text("1")])]);
        let config = CompareConfig::default();
        let input = CompareInput {
            files: vec![source("a", &a, config.mode), errored("b")],
        };

        let report = run(&config, &input);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].column, "id");
        assert_eq!(report.rows[0].cells[1], CellState::FileError);
    }

    #[test]
    fn single_occurrence_never_a_duplicate() {
        let a = table(vec![(
            "v",
            vec![text("x"), text("y"), text("y"), text("y"), text("z")],
        )]);
        let config = CompareConfig::default();
        let input = CompareInput { files: vec![source("a", &a, config.mode)] };

        let report = run(&config, &input);
        let (_, duplicates) = present(&report.rows[0].cells[0]);
        assert_eq!(duplicates, ["y"]);
    }

    #[test]
    fn string_identity_keeps_numeric_lookalikes_distinct() {
        let a = table(vec![("n", vec![text("1")])]);
        let b = table(vec![("n", vec![text("1.0")])]);
        let config = CompareConfig::default();
        let input = CompareInput {
            files: vec![source("a", &a, config.mode), source("b", &b, config.mode)],
        };

        let report = run(&config, &input);
        let (only_a, _) = present(&report.rows[0].cells[0]);
        let (only_b, _) = present(&report.rows[0].cells[1]);
        assert_eq!(only_a, ["1"]);
        assert_eq!(only_b, ["1.0"]);
    }

    #[test]
    fn value_shared_with_any_loaded_file_is_not_only_in() {
        let a = table(vec![("id", vec![text("1"), text("2")])]);
        let b = table(vec![("id", vec![text("2")])]);
        let c = table(vec![("id", vec![text("1")])]);
        let config = CompareConfig::default();
        let input = CompareInput {
            files: vec![
                source("a", &a, config.mode),
                source("b", &b, config.mode),
                source("c", &c, config.mode),
            ],
        };

        let report = run(&config, &input);
        let (only_a, _) = present(&report.rows[0].cells[0]);
        assert!(only_a.is_empty(), "both values of a exist elsewhere");
    }

    #[test]
    fn rerun_is_set_equal() {
        let a = table(vec![("id", vec![text("1"), text("2"), text("2")])]);
        let b = table(vec![("id", vec![text("2"), text("3")])]);
        let config = CompareConfig::default();
        let input = CompareInput {
            files: vec![source("a", &a, config.mode), source("b", &b, config.mode)],
        };

        let first = run(&config, &input);
        let second = run(&config, &input);
        assert_eq!(first.rows.len(), second.rows.len());
        for (x, y) in first.rows.iter().zip(&second.rows) {
            assert_eq!(x.column, y.column);
            for (cx, cy) in x.cells.iter().zip(&y.cells) {
                match (cx, cy) {
                    (
                        CellState::Present { only_in: ox, duplicates: dx },
                        CellState::Present { only_in: oy, duplicates: dy },
                    ) => {
                        let sx: HashSet<_> = ox.iter().collect();
                        let sy: HashSet<_> = oy.iter().collect();
                        assert_eq!(sx, sy);
                        let sx: HashSet<_> = dx.iter().collect();
                        let sy: HashSet<_> = dy.iter().collect();
                        assert_eq!(sx, sy);
                    }
                    _ => assert_eq!(cx, cy),
                }
            }
        }
    }
}
