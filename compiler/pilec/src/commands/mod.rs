//! Command handlers for the `pile` CLI.
//!
//! Handlers return the process exit code instead of exiting, so they can be
//! driven directly from tests.

mod lex;
mod run;

pub use lex::{lex_file, lex_source};
pub use run::{parse_run_args, run_file, run_source, RunArgs, RunOptions};

/// Read a source file, describing any failure for the user.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
