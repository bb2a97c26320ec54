//! Text and JSON rendering of a derived identifier
//!
//! Rendering is pure: the same identifier and options always produce the
//! same bytes, whether they end up on the console or in a file.

use crate::mapper::{DerivedIdentifier, CODE_LEN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const IDENTIFIER_LABEL: &str = "Server Identifier: ";
const SET_LABEL: &str = "Server Identifier Set: ";
const CODE_LABEL: &str = "Server Code: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Short,
    Full,
}

/// Which symbols a short rendering shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolMode {
    #[default]
    Single,
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub verbosity: Verbosity,
    pub mode: SymbolMode,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed identifier text: {0}")]
    Malformed(String),
}

// ── On-disk / on-console structures ──────────────────────────────

#[derive(Debug, Serialize)]
struct ShortJson<'a> {
    emojis: &'a str,
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct FullJson<'a> {
    emojis: &'a str,
    emojis_set: &'a str,
    code: &'a str,
}

/// Fields recovered from a rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderedFields {
    /// The symbol field: the single symbol, or the set for `-4` short output.
    pub emojis: String,
    /// Present only in full renderings.
    #[serde(default)]
    pub emojis_set: Option<String>,
    pub code: String,
}

// ── Render ───────────────────────────────────────────────────────

pub fn render(id: &DerivedIdentifier, options: &RenderOptions) -> Result<String, RenderError> {
    let set = id.symbol_set_joined();
    let symbols = match options.mode {
        SymbolMode::Single => id.symbol.as_str(),
        SymbolMode::Set => set.as_str(),
    };

    let out = match (options.format, options.verbosity) {
        (OutputFormat::Text, Verbosity::Short) => {
            format!("{}{}{}\n", IDENTIFIER_LABEL, symbols, id.code)
        }
        (OutputFormat::Text, Verbosity::Full) => format!(
            "{}{}\n{}{}\n{}{}\n",
            IDENTIFIER_LABEL, id.symbol, SET_LABEL, set, CODE_LABEL, id.code
        ),
        (OutputFormat::Json, Verbosity::Short) => {
            let body = ShortJson {
                emojis: symbols,
                code: &id.code,
            };
            serde_json::to_string_pretty(&body)? + "\n"
        }
        (OutputFormat::Json, Verbosity::Full) => {
            let body = FullJson {
                emojis: &id.symbol,
                emojis_set: &set,
                code: &id.code,
            };
            serde_json::to_string_pretty(&body)? + "\n"
        }
    };

    Ok(out)
}

// ── Parse ────────────────────────────────────────────────────────

/// Recovers the fields from any rendering of the given format.
pub fn parse_rendered(text: &str, format: OutputFormat) -> Result<RenderedFields, RenderError> {
    match format {
        OutputFormat::Json => Ok(serde_json::from_str(text)?),
        OutputFormat::Text => parse_text(text),
    }
}

fn parse_text(text: &str) -> Result<RenderedFields, RenderError> {
    let lines: Vec<&str> = text.lines().collect();
    match lines.as_slice() {
        [line] => {
            let value = labelled(line, IDENTIFIER_LABEL)?;
            let split = value
                .char_indices()
                .rev()
                .nth(CODE_LEN - 1)
                .map(|(i, _)| i)
                .filter(|&i| i > 0)
                .ok_or_else(|| RenderError::Malformed(format!("identifier too short: {value:?}")))?;
            Ok(RenderedFields {
                emojis: value[..split].to_string(),
                emojis_set: None,
                code: value[split..].to_string(),
            })
        }
        [symbol, set, code] => Ok(RenderedFields {
            emojis: labelled(symbol, IDENTIFIER_LABEL)?.to_string(),
            emojis_set: Some(labelled(set, SET_LABEL)?.to_string()),
            code: labelled(code, CODE_LABEL)?.to_string(),
        }),
        _ => Err(RenderError::Malformed(format!(
            "expected 1 or 3 lines, got {}",
            lines.len()
        ))),
    }
}

fn labelled<'t>(line: &'t str, label: &str) -> Result<&'t str, RenderError> {
    line.strip_prefix(label)
        .ok_or_else(|| RenderError::Malformed(format!("missing {:?} in {:?}", label.trim(), line)))
}
