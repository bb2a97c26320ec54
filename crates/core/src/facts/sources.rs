//! Host fact sources (Linux sysfs, procfs, os-release and udev)

use super::{FactError, FactKind, FactSource};
use std::path::{Path, PathBuf};
use std::process::Command;

fn read_file(path: &Path) -> Result<String, FactError> {
    std::fs::read_to_string(path).map_err(|source| FactError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn first_token(text: &str, origin: &Path) -> Result<String, FactError> {
    text.split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| FactError::Empty {
            origin: origin.display().to_string(),
        })
}

// ── UUID ─────────────────────────────────────────────────────────

/// Hardware UUID from DMI, e.g. `/sys/class/dmi/id/product_uuid`.
#[derive(Debug, Clone)]
pub struct ProductUuid {
    path: PathBuf,
}

impl ProductUuid {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FactSource for ProductUuid {
    fn kind(&self) -> FactKind {
        FactKind::Uuid
    }

    fn read_fact(&self) -> Result<String, FactError> {
        first_token(&read_file(&self.path)?, &self.path)
    }
}

// ── OS name ──────────────────────────────────────────────────────

/// OS name without version, from the `NAME=` line of os-release.
#[derive(Debug, Clone)]
pub struct OsReleaseName {
    path: PathBuf,
}

impl OsReleaseName {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FactSource for OsReleaseName {
    fn kind(&self) -> FactKind {
        FactKind::OsName
    }

    fn read_fact(&self) -> Result<String, FactError> {
        let content = read_file(&self.path)?;
        parse_os_release_name(&content).ok_or_else(|| FactError::MissingKey {
            key: "NAME".to_string(),
            origin: self.path.display().to_string(),
        })
    }
}

/// Value of the first `NAME=` line, with surrounding quotes removed.
pub fn parse_os_release_name(content: &str) -> Option<String> {
    let value = content
        .lines()
        .find_map(|line| line.strip_prefix("NAME="))?
        .trim();
    let unquoted = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    Some(unquoted.to_string())
}

// ── CPU ──────────────────────────────────────────────────────────

/// One `key : value` field from `/proc/cpuinfo` (first occurrence).
#[derive(Debug, Clone)]
pub struct CpuInfoField {
    path: PathBuf,
    key: &'static str,
    kind: FactKind,
}

impl CpuInfoField {
    pub fn model_name(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: "model name",
            kind: FactKind::CpuModel,
        }
    }

    pub fn cpu_mhz(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: "cpu MHz",
            kind: FactKind::CpuMhz,
        }
    }
}

impl FactSource for CpuInfoField {
    fn kind(&self) -> FactKind {
        self.kind
    }

    fn read_fact(&self) -> Result<String, FactError> {
        let content = read_file(&self.path)?;
        parse_cpuinfo_field(&content, self.key).ok_or_else(|| FactError::MissingKey {
            key: self.key.to_string(),
            origin: self.path.display().to_string(),
        })
    }
}

pub fn parse_cpuinfo_field(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let (k, v) = line.split_once(':')?;
        (k.trim() == key).then(|| v.trim().to_string())
    })
}

// ── Disk serial ──────────────────────────────────────────────────

const UDEVADM: &str = "udevadm";

/// Disk serial reported by `udevadm info` for a block device.
#[derive(Debug, Clone)]
pub struct DiskSerial {
    device: String,
}

impl DiskSerial {
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
        }
    }
}

impl FactSource for DiskSerial {
    fn kind(&self) -> FactKind {
        FactKind::DiskSerial
    }

    fn read_fact(&self) -> Result<String, FactError> {
        let output = Command::new(UDEVADM)
            .args(["info", "--query=all"])
            .arg(format!("--name={}", self.device))
            .output()
            .map_err(|source| FactError::Spawn {
                program: UDEVADM.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(FactError::CommandFailed {
                program: UDEVADM.to_string(),
                status: output.status.to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_udev_serial(&stdout).ok_or_else(|| FactError::MissingKey {
            key: "ID_SERIAL".to_string(),
            origin: format!("{} info {}", UDEVADM, self.device),
        })
    }
}

/// First token after `ID_SERIAL=` on the first line that carries it.
pub fn parse_udev_serial(output: &str) -> Option<String> {
    const MARKER: &str = "ID_SERIAL=";
    output.lines().find_map(|line| {
        let start = line.find(MARKER)? + MARKER.len();
        line[start..].split_whitespace().next().map(str::to_string)
    })
}
