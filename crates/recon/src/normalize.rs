use serde::Serialize;

use tabcmp_core::{CellValue, Table};

use crate::config::NormalizeMode;

// ---------------------------------------------------------------------------
// Name normalization
// ---------------------------------------------------------------------------

/// Canonical form of a raw column name under `mode`. Two raw names from
/// different files are the same logical column iff their canonical forms
/// are equal.
pub fn normalize_name(raw: &str, mode: NormalizeMode) -> String {
    match mode {
        NormalizeMode::Exact => raw.to_string(),
        NormalizeMode::Lower => raw.trim().to_lowercase(),
        NormalizeMode::Loose => raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Table normalization
// ---------------------------------------------------------------------------

/// A table rewritten into canonical column-name space, columns in first-
/// appearance order. Collision-merged columns hold the concatenation of
/// every raw column that mapped onto the same canonical name, so the table
/// is no longer necessarily rectangular.
#[derive(Debug, Clone, Default)]
pub struct NormalizedTable {
    pub columns: Vec<NormalizedColumn>,
    pub collisions: Vec<ColumnCollision>,
}

#[derive(Debug, Clone)]
pub struct NormalizedColumn {
    pub name: String,
    pub cells: Vec<CellValue>,
}

/// Two or more raw names in one table collapsing onto the same canonical
/// name. Their cells are merged into one column; the collision itself is
/// kept so callers can surface it as a warning.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnCollision {
    pub canonical: String,
    pub raw_names: Vec<String>,
}

impl NormalizedTable {
    pub fn column(&self, name: &str) -> Option<&NormalizedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}

/// Rewrite every column name of `table` under `mode`, merging collisions.
pub fn normalize_table(table: &Table, mode: NormalizeMode) -> NormalizedTable {
    let mut columns: Vec<NormalizedColumn> = Vec::new();
    let mut raw_names: Vec<Vec<String>> = Vec::new();

    for column in &table.columns {
        let canonical = normalize_name(&column.name, mode);
        match columns.iter().position(|c| c.name == canonical) {
            Some(idx) => {
                columns[idx].cells.extend(column.cells.iter().cloned());
                raw_names[idx].push(column.name.clone());
            }
            None => {
                columns.push(NormalizedColumn {
                    name: canonical,
                    cells: column.cells.clone(),
                });
                raw_names.push(vec![column.name.clone()]);
            }
        }
    }

    let collisions = columns
        .iter()
        .zip(&raw_names)
        .filter(|(_, raws)| raws.len() > 1)
        .map(|(column, raws)| ColumnCollision {
            canonical: column.name.clone(),
            raw_names: raws.clone(),
        })
        .collect();

    NormalizedTable { columns, collisions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabcmp_core::Column;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn exact_is_identity() {
        assert_eq!(normalize_name("  User ID ", NormalizeMode::Exact), "  User ID ");
    }

    #[test]
    fn lower_trims_and_lowercases_only() {
        assert_eq!(normalize_name("  User_ID ", NormalizeMode::Lower), "user_id");
        assert_eq!(normalize_name("Name (full)", NormalizeMode::Lower), "name (full)");
    }

    #[test]
    fn loose_strips_non_alphanumerics() {
        assert_eq!(normalize_name("  User ID ", NormalizeMode::Loose), "userid");
        assert_eq!(normalize_name("userid", NormalizeMode::Loose), "userid");
        assert_eq!(normalize_name("User_ID-2", NormalizeMode::Loose), "userid2");
        assert_eq!(normalize_name("Δ Amount", NormalizeMode::Loose), "amount");
    }

    #[test]
    fn collision_merges_cells_and_is_recorded() {
        let table = Table {
            columns: vec![
                Column { name: "User ID".into(), cells: vec![text("1"), text("2")] },
                Column { name: "userid".into(), cells: vec![text("3")] },
                Column { name: "Name".into(), cells: vec![text("a"), text("b")] },
            ],
        };

        let normalized = normalize_table(&table, NormalizeMode::Loose);
        assert_eq!(normalized.columns.len(), 2);

        let merged = normalized.column("userid").unwrap();
        assert_eq!(merged.cells, vec![text("1"), text("2"), text("3")]);

        assert_eq!(normalized.collisions.len(), 1);
        assert_eq!(normalized.collisions[0].canonical, "userid");
        assert_eq!(normalized.collisions[0].raw_names, vec!["User ID", "userid"]);
    }

    #[test]
    fn no_collision_under_exact() {
        let table = Table {
            columns: vec![
                Column { name: "User ID".into(), cells: vec![] },
                Column { name: "userid".into(), cells: vec![] },
            ],
        };

        let normalized = normalize_table(&table, NormalizeMode::Exact);
        assert_eq!(normalized.columns.len(), 2);
        assert!(normalized.collisions.is_empty());
    }
}
