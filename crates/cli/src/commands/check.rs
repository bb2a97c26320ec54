//! `identmoji --check` — print a previously persisted identifier

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::report;

/// Copies the file at `path` to `out` byte for byte.
///
/// A missing file is not an error: a notice goes to `out` instead. A file
/// that exists but cannot be read is reported on stderr.
pub fn run(path: &Path, out: &mut dyn Write) -> Result<()> {
    if !path.exists() {
        writeln!(out, "No configuration found at {}", path.display())?;
        return Ok(());
    }

    match std::fs::read(path) {
        Ok(content) => out.write_all(&content)?,
        Err(err) => report::error(format!("Could not read from {}: {}", path.display(), err)),
    }
    Ok(())
}
