//! Identmoji Core - deterministic machine identifiers
//!
//! The pipeline, leaf first:
//! - Fact collection from host sources, with per-fact sentinel fallback
//! - Canonical, fixed-order concatenation of the facts
//! - MD5 digest of the canonical string
//! - Mapping of digest windows onto a symbol palette, plus a short code
//! - Text and JSON rendering

pub mod canonical;
pub mod config;
pub mod digest;
pub mod facts;
pub mod mapper;
pub mod palette;
pub mod render;

pub use canonical::{canonicalize, CanonicalString};
pub use config::{ConfigError, IdentConfig};
pub use digest::{Digest, DigestError};
pub use facts::{
    CollectedFacts, FactCollector, FactError, FactKind, FactSource, FactWarning, SystemFacts,
};
pub use mapper::{DerivedIdentifier, SymbolMapper};
pub use palette::{Palette, PaletteError};
pub use render::{
    parse_rendered, render, OutputFormat, RenderError, RenderOptions, RenderedFields, SymbolMode,
    Verbosity,
};

/// Identmoji version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Intermediate and final values for one set of facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identification {
    pub canonical: CanonicalString,
    pub digest: Digest,
    pub identifier: DerivedIdentifier,
}

/// Canonicalizes, digests and maps `facts`.
pub fn identify(facts: &SystemFacts, mapper: &SymbolMapper<'_>) -> Identification {
    let canonical = canonicalize(facts);
    let digest = Digest::of(&canonical);
    let identifier = mapper.derive(&digest);
    Identification {
        canonical,
        digest,
        identifier,
    }
}
