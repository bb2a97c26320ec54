//! Digest to symbols and code
//!
//! Symbols are cut from the hex digest in non-overlapping 4-character
//! windows, left to right from offset 0. Each window is read as a 16-bit
//! integer and reduced modulo the palette size. The code is the five hex
//! characters at offsets `[10, 15)`, uppercased.

use crate::digest::{Digest, HEX_LEN};
use crate::palette::Palette;

/// Hex characters per symbol window.
pub const WINDOW_HEX_CHARS: usize = 4;

/// Number of symbols in a symbol set.
pub const SET_SIZE: usize = 4;

/// Offset of the code within the hex digest.
pub const CODE_OFFSET: usize = 10;

/// Length of the code.
pub const CODE_LEN: usize = 5;

const _: () = assert!(SET_SIZE * WINDOW_HEX_CHARS <= HEX_LEN);
const _: () = assert!(CODE_OFFSET + CODE_LEN <= HEX_LEN);

/// Everything derived from one digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifier {
    pub symbol: String,
    pub symbol_set: [String; SET_SIZE],
    pub code: String,
}

impl DerivedIdentifier {
    /// The symbol set with no separator between entries.
    pub fn symbol_set_joined(&self) -> String {
        self.symbol_set.concat()
    }
}

pub struct SymbolMapper<'a> {
    palette: Palette<'a>,
}

impl<'a> SymbolMapper<'a> {
    pub fn new(palette: Palette<'a>) -> Self {
        Self { palette }
    }

    /// Symbol for window 0.
    pub fn derive_single(&self, digest: &Digest) -> &'a str {
        self.symbol_at(digest, 0)
    }

    /// Symbols for windows 0 through 3, repetition allowed.
    pub fn derive_set(&self, digest: &Digest) -> [&'a str; SET_SIZE] {
        std::array::from_fn(|i| self.symbol_at(digest, i))
    }

    /// Hex characters `[10, 15)`, uppercased.
    pub fn derive_code(&self, digest: &Digest) -> String {
        digest
            .to_hex()
            .chars()
            .skip(CODE_OFFSET)
            .take(CODE_LEN)
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    pub fn derive(&self, digest: &Digest) -> DerivedIdentifier {
        DerivedIdentifier {
            symbol: self.derive_single(digest).to_string(),
            symbol_set: self.derive_set(digest).map(str::to_string),
            code: self.derive_code(digest),
        }
    }

    fn symbol_at(&self, digest: &Digest, index: usize) -> &'a str {
        self.palette.select(usize::from(window(digest, index)))
    }
}

impl Default for SymbolMapper<'static> {
    fn default() -> Self {
        Self::new(Palette::EMOJI)
    }
}

/// Value of hex window `index`, i.e. characters `[4i, 4i + 4)`.
///
/// Two hex characters per byte, so the window is bytes `2i` and `2i + 1`
/// read big-endian.
fn window(digest: &Digest, index: usize) -> u16 {
    debug_assert!(index < SET_SIZE);
    let bytes = digest.as_bytes();
    u16::from_be_bytes([bytes[2 * index], bytes[2 * index + 1]])
}
