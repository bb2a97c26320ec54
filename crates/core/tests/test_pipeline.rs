//! End-to-end tests for facts -> canonical string -> digest -> identifier

use identmoji_core::{
    canonicalize, identify, Digest, FactCollector, FactError, FactKind, FactSource, SymbolMapper,
    SystemFacts,
};

fn sample_facts() -> SystemFacts {
    SystemFacts {
        uuid: "1234-uuid".to_string(),
        os_name: "TestOS".to_string(),
        cpu_model: "TestCPU".to_string(),
        cpu_mhz: "1000.00".to_string(),
        disk_serial: "SERIAL123".to_string(),
    }
}

struct Unavailable(FactKind);

impl FactSource for Unavailable {
    fn kind(&self) -> FactKind {
        self.0
    }

    fn read_fact(&self) -> Result<String, FactError> {
        Err(FactError::Io {
            path: "/nonexistent".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}

#[test]
fn test_end_to_end_example() {
    let result = identify(&sample_facts(), &SymbolMapper::default());

    assert_eq!(
        result.canonical.as_str(),
        "1234-uuidTestOSTestCPU1000.00SERIAL123"
    );
    assert_eq!(result.digest.to_hex(), "2d09aba074896e6bcc8f273888bc6ca3");
    // 0x2d09 % 80 = 9, 0xaba0 % 80 = 16, 0x7489 % 80 = 73, 0x6e6b % 80 = 27
    assert_eq!(result.identifier.symbol, "🌹");
    assert_eq!(result.identifier.symbol_set_joined(), "🌹🌳📜🌚");
    assert_eq!(result.identifier.code, "896E6");
}

#[test]
fn test_identification_is_deterministic() {
    let mapper = SymbolMapper::default();
    let first = identify(&sample_facts(), &mapper);
    for _ in 0..10 {
        assert_eq!(identify(&sample_facts(), &mapper), first);
    }
}

#[test]
fn test_field_order_changes_digest() {
    let facts = sample_facts();
    let swapped = SystemFacts {
        uuid: facts.os_name.clone(),
        os_name: facts.uuid.clone(),
        ..facts.clone()
    };

    assert_eq!(
        canonicalize(&swapped).as_str(),
        "TestOS1234-uuidTestCPU1000.00SERIAL123"
    );
    assert_ne!(
        Digest::of(&canonicalize(&facts)),
        Digest::of(&canonicalize(&swapped))
    );
}

#[test]
fn test_all_sources_unavailable_still_identifies() {
    let collector = FactCollector::new(
        FactKind::ALL
            .iter()
            .map(|&kind| Box::new(Unavailable(kind)) as Box<dyn FactSource>)
            .collect(),
    );

    let collected = collector.collect();
    assert_eq!(collected.warnings.len(), 5);
    assert_eq!(collected.facts, SystemFacts::sentinels());

    let result = identify(&collected.facts, &SymbolMapper::default());
    assert_eq!(
        result.canonical.as_str(),
        "no-uuidno-osno-cpu-modelno-cpu-mhzno-disk-serial"
    );
    assert_eq!(result.digest.to_hex(), "81966db008f0ecd39540975d09500e91");
    assert_eq!(result.identifier.symbol, "🍾");
    assert_eq!(result.identifier.symbol_set_joined(), "🍾🤖🚗🎱");
    assert_eq!(result.identifier.code, "F0ECD");
}

#[test]
fn test_collector_without_sources_uses_sentinels() {
    let collected = FactCollector::new(Vec::new()).collect();
    assert_eq!(collected.facts, SystemFacts::sentinels());
    assert!(collected.warnings.is_empty());
}
