//! Symbol palettes
//!
//! The palette's order and contents are part of the identifier's stability
//! contract: changing either changes every identifier ever derived with it.

use std::collections::HashSet;
use thiserror::Error;

/// The reference 80-symbol emoji palette.
pub const EMOJI_SYMBOLS: [&str; 80] = [
    "🤖", "🦷", "🎃", "🐳", "💼", "🧊", "🍪", "🦀", "💡", "🌹",
    "👄", "👾", "🪼", "😺", "🍗", "🌌", "🌳", "✈️", "💅", "🎯",
    "🦉", "🫀", "👻", "🎓", "👀", "🌵", "🦜", "🌚", "💾", "☄️",
    "👑", "🐭", "🧶", "😈", "🦾", "🐼", "☁️", "💿", "⚙️", "🍁",
    "🎲", "🐣", "🐸", "🌋", "👽", "🧠", "🐨", "🔌", "🚗", "⛩",
    "🪨", "🍒", "💻", "🗿", "🍾", "🪵", "🐧", "🖥️", "🌊", "🔥",
    "🚀", "🍏", "📂", "⚡️", "⭐️", "💣", "🔒", "🎱", "📀", "🌈",
    "🛠️", "🏆", "🐍", "📜", "🍹", "📡", "🖨️", "📊", "🎮", "🎧",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must contain at least one symbol")]
    Empty,

    #[error("palette contains duplicate symbol {0:?}")]
    Duplicate(String),
}

/// An ordered, non-empty list of distinct symbols.
///
/// Palettes are plain values handed to the [`SymbolMapper`](crate::SymbolMapper),
/// so tests and library users can swap in an alternate one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<'a> {
    symbols: &'a [&'a str],
}

impl Palette<'static> {
    /// The reference emoji palette.
    pub const EMOJI: Palette<'static> = Palette {
        symbols: &EMOJI_SYMBOLS,
    };
}

impl Default for Palette<'static> {
    fn default() -> Self {
        Palette::EMOJI
    }
}

impl<'a> Palette<'a> {
    /// Validates that `symbols` is non-empty and free of duplicates.
    pub fn new(symbols: &'a [&'a str]) -> Result<Self, PaletteError> {
        if symbols.is_empty() {
            return Err(PaletteError::Empty);
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        for symbol in symbols {
            if !seen.insert(*symbol) {
                return Err(PaletteError::Duplicate(symbol.to_string()));
            }
        }
        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// A validated palette is never empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Selects the symbol at `value mod len`.
    pub fn select(&self, value: usize) -> &'a str {
        self.symbols[value % self.symbols.len()]
    }
}
