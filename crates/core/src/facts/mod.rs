//! System fact collection
//!
//! Each fact comes from its own [`FactSource`]. Sources are read one after
//! another and independently: a source that fails is replaced by its fixed
//! sentinel and collection carries on, so an identifier can always be
//! produced, even on sandboxed hosts.

pub mod sources;

use crate::config::SourcesConfig;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub use sources::{CpuInfoField, DiskSerial, OsReleaseName, ProductUuid};

/// Upper bound, in bytes, for a single fact value.
pub const MAX_FACT_LEN: usize = 255;

/// The five facts, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKind {
    Uuid,
    OsName,
    CpuModel,
    CpuMhz,
    DiskSerial,
}

impl FactKind {
    pub const ALL: [FactKind; 5] = [
        FactKind::Uuid,
        FactKind::OsName,
        FactKind::CpuModel,
        FactKind::CpuMhz,
        FactKind::DiskSerial,
    ];

    /// Placeholder substituted when the fact cannot be read.
    pub fn sentinel(self) -> &'static str {
        match self {
            FactKind::Uuid => "no-uuid",
            FactKind::OsName => "no-os",
            FactKind::CpuModel => "no-cpu-model",
            FactKind::CpuMhz => "no-cpu-mhz",
            FactKind::DiskSerial => "no-disk-serial",
        }
    }
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactKind::Uuid => write!(f, "UUID"),
            FactKind::OsName => write!(f, "OS name"),
            FactKind::CpuModel => write!(f, "CPU model"),
            FactKind::CpuMhz => write!(f, "CPU clock speed"),
            FactKind::DiskSerial => write!(f, "disk serial"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FactError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    CommandFailed { program: String, status: String },

    #[error("no {key} entry in {origin}")]
    MissingKey { key: String, origin: String },

    #[error("empty value from {origin}")]
    Empty { origin: String },
}

/// A best-effort provider of one raw fact.
pub trait FactSource {
    /// Which fact this source provides.
    fn kind(&self) -> FactKind;

    /// Reads the raw value. Callers normalise and bound the result.
    fn read_fact(&self) -> Result<String, FactError>;
}

/// The facts gathered for one invocation.
///
/// Either real host values or the per-fact sentinel; never mutated after
/// collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemFacts {
    pub uuid: String,
    pub os_name: String,
    pub cpu_model: String,
    pub cpu_mhz: String,
    pub disk_serial: String,
}

impl SystemFacts {
    /// Every fact set to its sentinel.
    pub fn sentinels() -> Self {
        Self {
            uuid: FactKind::Uuid.sentinel().to_string(),
            os_name: FactKind::OsName.sentinel().to_string(),
            cpu_model: FactKind::CpuModel.sentinel().to_string(),
            cpu_mhz: FactKind::CpuMhz.sentinel().to_string(),
            disk_serial: FactKind::DiskSerial.sentinel().to_string(),
        }
    }

    pub fn get(&self, kind: FactKind) -> &str {
        match kind {
            FactKind::Uuid => &self.uuid,
            FactKind::OsName => &self.os_name,
            FactKind::CpuModel => &self.cpu_model,
            FactKind::CpuMhz => &self.cpu_mhz,
            FactKind::DiskSerial => &self.disk_serial,
        }
    }

    fn slot_mut(&mut self, kind: FactKind) -> &mut String {
        match kind {
            FactKind::Uuid => &mut self.uuid,
            FactKind::OsName => &mut self.os_name,
            FactKind::CpuModel => &mut self.cpu_model,
            FactKind::CpuMhz => &mut self.cpu_mhz,
            FactKind::DiskSerial => &mut self.disk_serial,
        }
    }
}

/// A fact that fell back to its sentinel, and why.
#[derive(Debug)]
pub struct FactWarning {
    pub kind: FactKind,
    pub error: FactError,
}

impl fmt::Display for FactWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not read {} ({}), using \"{}\"",
            self.kind,
            self.error,
            self.kind.sentinel()
        )
    }
}

#[derive(Debug)]
pub struct CollectedFacts {
    pub facts: SystemFacts,
    pub warnings: Vec<FactWarning>,
}

/// Runs every source once and assembles [`SystemFacts`].
pub struct FactCollector {
    sources: Vec<Box<dyn FactSource>>,
}

impl FactCollector {
    /// Builds a collector from arbitrary sources.
    ///
    /// A fact with no source falls back to its sentinel. When two sources
    /// report the same kind, the later one wins.
    pub fn new(sources: Vec<Box<dyn FactSource>>) -> Self {
        Self { sources }
    }

    /// The default host sources, with paths taken from configuration.
    pub fn from_config(config: &SourcesConfig) -> Self {
        let sources: Vec<Box<dyn FactSource>> = vec![
            Box::new(ProductUuid::new(&config.uuid_path)),
            Box::new(OsReleaseName::new(&config.os_release_path)),
            Box::new(CpuInfoField::model_name(&config.cpuinfo_path)),
            Box::new(CpuInfoField::cpu_mhz(&config.cpuinfo_path)),
            Box::new(DiskSerial::new(&config.disk_device)),
        ];
        Self::new(sources)
    }

    /// Reads every source. Never fails.
    pub fn collect(&self) -> CollectedFacts {
        let mut facts = SystemFacts::sentinels();
        let mut warnings = Vec::new();

        for source in &self.sources {
            let kind = source.kind();
            match read_bounded(source.as_ref()) {
                Ok(value) => *facts.slot_mut(kind) = value,
                Err(error) => {
                    *facts.slot_mut(kind) = kind.sentinel().to_string();
                    warnings.push(FactWarning { kind, error });
                }
            }
        }

        CollectedFacts { facts, warnings }
    }
}

/// Reads a source, then trims and bounds its value.
fn read_bounded(source: &dyn FactSource) -> Result<String, FactError> {
    let raw = source.read_fact()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FactError::Empty {
            origin: source.kind().to_string(),
        });
    }
    Ok(truncate_on_char_boundary(trimmed, MAX_FACT_LEN).to_string())
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a char.
pub(crate) fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
