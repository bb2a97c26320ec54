//! Identmoji CLI library — exposed for integration tests

pub mod commands;
pub mod report;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use identmoji_core::{IdentConfig, OutputFormat, RenderOptions, SymbolMode, Verbosity};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "identmoji")]
#[command(about = "Stable emoji identifier for the machine it runs on", long_about = None)]
#[command(version = identmoji_core::VERSION)]
#[command(args_override_self = true, disable_help_flag = true)]
pub struct Cli {
    /// Use 4 emojis instead of 1
    #[arg(short = '4')]
    pub four: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Output full details (emojis, emojis_set, code)
    #[arg(long)]
    pub full: bool,

    /// Also write the output to FILE
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print an existing identifier file (default location, or -o) instead of generating one
    #[arg(long)]
    pub check: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            verbosity: if self.full {
                Verbosity::Full
            } else {
                Verbosity::Short
            },
            mode: if self.four {
                SymbolMode::Set
            } else {
                SymbolMode::Single
            },
        }
    }
}

/// Dispatches to `check` or `generate`, writing normal output to `out`.
///
/// `--check -o FILE` never reads the configuration file.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    if cli.check {
        let path = match &cli.output {
            Some(path) => path.clone(),
            None => load_config()?
                .identifier_path()
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
        };
        return commands::check::run(&path, out);
    }

    let config = load_config()?;
    commands::generate::run(&config, &cli.render_options(), cli.output.as_deref(), out)
}

fn load_config() -> Result<IdentConfig> {
    IdentConfig::load().context("Failed to load configuration")
}
