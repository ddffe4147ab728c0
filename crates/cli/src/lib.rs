// tabcmp CLI internals — pipeline orchestration shared between the binary
// and integration tests.

pub mod exit_codes;
pub mod pipeline;

/// Structured CLI failure: registry exit code plus a user-facing message.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, message: impl Into<String>) -> Self {
        CliError { code, message: message.into(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
