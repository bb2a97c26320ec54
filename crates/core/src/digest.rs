//! MD5 digest of the canonical string
//!
//! MD5 is used for its fixed 16-byte output and ubiquity, not for security.
//! The 32-character hex form is what the symbol windows are cut from.

use crate::canonical::CanonicalString;
use md5::{Digest as _, Md5};
use std::fmt;
use thiserror::Error;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 16;

/// Length of the hex rendering.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("expected 32 hex characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex character {0:?}")]
    InvalidChar(char),
}

/// A 128-bit digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hashes the canonical string.
    pub fn of(input: &CanonicalString) -> Self {
        Self::of_bytes(input.as_ref())
    }

    pub fn of_bytes(input: &[u8]) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&Md5::digest(input));
        Self(bytes)
    }

    /// Parses a 32-character hex string. Case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        let chars: Vec<char> = hex.chars().collect();
        if chars.len() != HEX_LEN {
            return Err(DigestError::InvalidLength(chars.len()));
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (byte, pair) in bytes.iter_mut().zip(chars.chunks(2)) {
            let hi = nibble(pair[0])?;
            let lo = nibble(pair[1])?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, two zero-padded digits per byte.
    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn nibble(c: char) -> Result<u8, DigestError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(DigestError::InvalidChar(c))
}

pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
