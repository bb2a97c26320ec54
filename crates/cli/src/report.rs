//! Diagnostic lines on stderr
//!
//! stdout carries only the identifier (or `--check` content) so the tool
//! can be piped.

use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

pub fn warn(msg: impl Display) {
    eprintln!("{}: {}", "warn".yellow(), msg);
}

pub fn error(msg: impl Display) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub fn saved(path: &Path) {
    eprintln!("{} {}", "Configuration saved to".green(), path.display());
}
