//! Canonical concatenation of system facts

use crate::facts::{truncate_on_char_boundary, FactKind, SystemFacts};
use std::fmt;

/// Upper bound, in bytes, of the canonical string.
pub const MAX_CANONICAL_LEN: usize = 1023;

/// The facts joined in fixed order with no separator: uuid, OS name, CPU
/// model, CPU MHz, disk serial.
///
/// This order must never change, or every machine's identifier changes
/// with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalString(String);

impl CanonicalString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for CanonicalString {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Joins the facts in canonical order, truncating past [`MAX_CANONICAL_LEN`].
pub fn canonicalize(facts: &SystemFacts) -> CanonicalString {
    let joined: String = FactKind::ALL.iter().map(|&kind| facts.get(kind)).collect();
    let bounded = truncate_on_char_boundary(&joined, MAX_CANONICAL_LEN);
    CanonicalString(bounded.to_string())
}
