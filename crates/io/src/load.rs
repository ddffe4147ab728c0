// Per-file load dispatch

use std::path::Path;

use tabcmp_core::Table;

/// Extensions routed to a parser (case-insensitive). Anything else is a
/// load error, not an up-front rejection.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "xls", "xlsx", "xlsm"];

pub fn is_supported(path: &Path) -> bool {
    extension_of(path)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Read one input file into a table. Failures come back as errors for the
/// caller to record per file; they never abort the surrounding run.
pub fn load_table(path: &Path) -> Result<Table, String> {
    match extension_of(path).as_deref() {
        Some("csv") => crate::csv::import(path),
        Some("xls") | Some("xlsx") | Some("xlsm") => crate::xlsx::import(path),
        _ => Err(format!("unsupported file type: {}", path.display())),
    }
}
