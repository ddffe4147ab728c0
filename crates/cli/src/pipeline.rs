// End-to-end pipeline: resolve inputs, load, normalize, compare, write.
// No clap here; the binary builds RunOptions from parsed arguments.

use std::path::{Path, PathBuf};

use tabcmp_io::load::{is_supported, load_table};
use tabcmp_io::report;
use tabcmp_recon::model::{CompareInput, LoadOutcome, SourceFile};
use tabcmp_recon::{normalize_table, CompareConfig, CompareReport, NormalizeMode};

use crate::exit_codes::{EXIT_NO_INPUT, EXIT_OUTPUT_IO};
use crate::CliError;

/// Fixed directory scanned when no files are given on the command line.
pub const DEFAULT_INPUT_DIR: &str = "placefileshere";

/// Fixed directory comparison reports are written into.
pub const RESULTS_DIR: &str = "results";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub files: Vec<PathBuf>,
    pub mode: NormalizeMode,
    pub output: Option<PathBuf>,
}

/// Resolve the input file list: explicit arguments win; otherwise scan the
/// default directory.
pub fn resolve_inputs(files: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }
    eprintln!("no files provided; scanning directory: {DEFAULT_INPUT_DIR}");
    scan_dir(Path::new(DEFAULT_INPUT_DIR))
}

/// All supported files directly inside `dir`, sorted for a stable report
/// column order.
pub fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        CliError::new(
            EXIT_NO_INPUT,
            format!("cannot read input directory '{}': {e}", dir.display()),
        )
    })?;

    let mut found: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported(path))
        .collect();
    found.sort();

    if found.is_empty() {
        return Err(CliError::new(
            EXIT_NO_INPUT,
            format!("no supported files found in directory: {}", dir.display()),
        )
        .with_hint("supported extensions: csv, xls, xlsx, xlsm"));
    }
    Ok(found)
}

/// Where the report goes: `--output` joined under the results directory
/// (an absolute path wins), or a timestamped default name.
pub fn resolve_output(output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => Path::new(RESULTS_DIR).join(path),
        None => {
            let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            Path::new(RESULTS_DIR).join(format!("results_{stamp}.csv"))
        }
    }
}

/// File label used in report headers: basename without extension.
pub fn file_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load every input, capturing per-file failures, and run the comparison.
/// A file that fails to load is reported on stderr and degraded to an
/// error-marked source; the run continues.
pub fn compare_files(paths: &[PathBuf], config: &CompareConfig) -> CompareReport {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let outcome = match load_table(path) {
            Ok(table) => LoadOutcome::Table(normalize_table(&table, config.mode)),
            Err(message) => {
                eprintln!("error reading '{}': {message}", path.display());
                LoadOutcome::Error(message)
            }
        };
        files.push(SourceFile { label: file_label(path), outcome });
    }
    tabcmp_recon::run(config, &CompareInput { files })
}

/// Full run. Fatal errors (no inputs, unwritable output) come back as
/// `CliError`; per-file load errors do not.
pub fn run(options: &RunOptions) -> Result<(CompareReport, PathBuf), CliError> {
    let inputs = resolve_inputs(&options.files)?;
    let output_path = resolve_output(options.output.as_deref());

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::new(
                    EXIT_OUTPUT_IO,
                    format!("cannot create output directory '{}': {e}", parent.display()),
                )
            })?;
        }
    }

    let config = CompareConfig { mode: options.mode };
    let report = compare_files(&inputs, &config);

    report::export(&report.csv_header(), &report.csv_rows(), &output_path).map_err(|e| {
        CliError::new(
            EXIT_OUTPUT_IO,
            format!("cannot write report '{}': {e}", output_path.display()),
        )
    })?;

    Ok((report, output_path))
}
