use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Explicit configuration for one comparison run.
///
/// Built by the CLI from its arguments and passed in, never read from
/// ambient state, so the engine is directly unit-testable.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareConfig {
    pub mode: NormalizeMode,
}

/// Column-name normalization policy, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// Identity — raw names are the canonical names.
    #[default]
    Exact,
    /// Trim surrounding whitespace, lowercase.
    Lower,
    /// Trim, lowercase, then drop every character that is not an ASCII
    /// letter or digit.
    Loose,
}

impl NormalizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Lower => "lower",
            Self::Loose => "loose",
        }
    }
}

impl std::fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
