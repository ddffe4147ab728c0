//! CLI exit code registry.
//!
//! Single source of truth for `tabcmp` exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                           |
//! |------|---------------------------------------------------|
//! | 0    | Success (report written; per-file errors allowed) |
//! | 1    | General error (unspecified)                       |
//! | 2    | Usage error (bad arguments; clap's own code)      |
//! | 3    | No resolvable input files                         |
//! | 4    | Output IO error (directory or report unwritable)  |

/// Success - the report was written. Individual input files may still have
/// failed to load; those are visible in the report and on stderr.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure. Prefer a specific code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, unknown flags.
pub const EXIT_USAGE: u8 = 2;

/// No input files: none given and the default directory holds no supported
/// files (or cannot be read).
pub const EXIT_NO_INPUT: u8 = 3;

/// Cannot create the results directory or write the report file.
pub const EXIT_OUTPUT_IO: u8 = 4;
