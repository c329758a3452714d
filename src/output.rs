//! Step-output reporting
//!
//! Appends run results to the workflow's step-output file (the
//! `GITHUB_OUTPUT` protocol) so downstream workflow steps can read them.

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append a `key=value` pair to the step-output file at `path`.
///
/// Multi-line values use the heredoc form the protocol requires.
pub fn append_step_output(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    if value.contains('\n') {
        writeln!(file, "{key}<<CASCADE_EOF\n{value}\nCASCADE_EOF")?;
    } else {
        writeln!(file, "{key}={value}")?;
    }
    Ok(())
}
