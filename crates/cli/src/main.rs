// tabcmp - compare columns and values across CSV and Excel files

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use tabcmp_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use tabcmp_cli::pipeline::{self, RunOptions};
use tabcmp_recon::NormalizeMode;

#[derive(Parser)]
#[command(name = "tabcmp")]
#[command(about = "Compare columns and values across CSV and Excel files")]
#[command(version)]
#[command(after_help = "\
Examples:
  tabcmp data1.csv data2.xlsx
  tabcmp data1.csv data2.xlsm --mode loose --output myresults.csv
  tabcmp --mode lower

Behavior:
  - With no files, every supported file in ./placefileshere is processed.
  - Reports are written under ./results.
  - Unreadable files stay in the report as \"File error\" cells.
  - Columns whose values are all blank are excluded.")]
struct Cli {
    /// Input files (csv, xls, xlsx, xlsm)
    files: Vec<PathBuf>,

    /// Report file name (joined under the results directory unless absolute)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Column normalization mode
    #[arg(long, value_enum, default_value = "exact")]
    mode: Mode,

    /// Also print the full report as JSON to stdout
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// No normalization
    Exact,
    /// Trim and lowercase
    Lower,
    /// Trim, lowercase, drop non-alphanumerics
    Loose,
}

impl From<Mode> for NormalizeMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Exact => NormalizeMode::Exact,
            Mode::Lower => NormalizeMode::Lower,
            Mode::Loose => NormalizeMode::Loose,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = RunOptions {
        files: cli.files,
        mode: cli.mode.into(),
        output: cli.output,
    };

    let (report, path) = match pipeline::run(&options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = &e.hint {
                eprintln!("hint: {hint}");
            }
            return ExitCode::from(e.code);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {e}");
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    // Human summary to stderr
    eprintln!("results saved to {}", path.display());
    eprintln!(
        "compared {} normalized columns across {} files",
        report.summary.columns_total, report.summary.files_ok
    );
    for file in &report.files {
        for collision in &file.collisions {
            eprintln!(
                "warning: {}: columns '{}' merged as '{}'",
                file.label,
                collision.raw_names.join("', '"),
                collision.canonical
            );
        }
        if let Some(error) = &file.error {
            eprintln!("skipped file due to error: {} ({error})", file.label);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
