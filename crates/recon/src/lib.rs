//! `tabcmp-recon` — column comparison engine.
//!
//! Pure engine crate: receives pre-loaded tables, returns the comparison
//! report. No CLI or IO dependencies.

pub mod config;
pub mod engine;
pub mod model;
pub mod normalize;
pub mod summary;

pub use config::{CompareConfig, NormalizeMode};
pub use engine::run;
pub use model::{CompareInput, CompareReport, LoadOutcome, SourceFile};
pub use normalize::{normalize_name, normalize_table, NormalizedTable};
