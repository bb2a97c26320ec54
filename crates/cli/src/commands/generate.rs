//! `identmoji` — derive, print and optionally persist the identifier

use anyhow::{Context, Result};
use identmoji_core::{identify, render, FactCollector, IdentConfig, RenderOptions, SymbolMapper};
use std::io::Write;
use std::path::Path;

use crate::report;

pub fn run(
    config: &IdentConfig,
    options: &RenderOptions,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let collector = FactCollector::from_config(&config.sources);
    run_with(&collector, &SymbolMapper::default(), options, output, out)
}

/// Same as [`run`] with explicit sources and palette.
pub fn run_with(
    collector: &FactCollector,
    mapper: &SymbolMapper<'_>,
    options: &RenderOptions,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let collected = collector.collect();
    for warning in &collected.warnings {
        report::warn(warning);
    }

    let identification = identify(&collected.facts, mapper);
    let rendered = render(&identification.identifier, options)?;
    out.write_all(rendered.as_bytes())?;

    if let Some(path) = output {
        // The identifier is already on stdout; a failed write is reported, not fatal.
        match persist(path, &rendered) {
            Ok(()) => report::saved(path),
            Err(err) => report::error(format!("{:#}", err)),
        }
    }

    Ok(())
}

fn persist(path: &Path, rendered: &str) -> Result<()> {
    std::fs::write(path, rendered)
        .with_context(|| format!("Could not write to {}", path.display()))
}
