// Comparison report export

use std::path::Path;

/// Write the report as delimited text: one header record, then one record
/// per compared column.
pub fn export(header: &[String], rows: &[Vec<String>], path: &Path) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| e.to_string())?;

    writer.write_record(header).map_err(|e| e.to_string())?;
    for row in rows {
        writer.write_record(row).map_err(|e| e.to_string())?;
    }

    writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}
