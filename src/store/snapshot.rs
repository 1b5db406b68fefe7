//! Serializable view of a resolved registry (JSON via serde_json).

use super::error::RegistryResult;
use super::registry::ConstantRegistry;
use super::types::ConstantKind;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub kind: ConstantKind,
    pub value: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// Every constant of a resolved registry, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub constants: Vec<SnapshotEntry>,
}

impl RegistrySnapshot {
    pub fn capture(registry: &ConstantRegistry) -> RegistryResult<Self> {
        let constants = registry
            .names()
            .map(|name| {
                let resolved = registry.get(name)?;
                Ok(SnapshotEntry {
                    name: name.to_string(),
                    kind: registry.kind(name)?,
                    value: resolved.value(),
                    unit: resolved.unit().to_string(),
                    depends_on: registry.depends_on(name)?.to_vec(),
                })
            })
            .collect::<RegistryResult<Vec<_>>>()?;
        Ok(Self { constants })
    }

    pub fn get(&self, name: &str) -> Option<&SnapshotEntry> {
        self.constants.iter().find(|c| c.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ConstantValue, RegistryError};
    use std::io::{Read, Seek, SeekFrom, Write};

    fn small_registry() -> ConstantRegistry {
        let mut reg = ConstantRegistry::new();
        reg.declare_base("h", 6.62607015e-34, "J.s").unwrap();
        reg.declare_base("e", 1.602176634e-19, "C").unwrap();
        reg.declare_derived("RK", &["h", "e"], |i| {
            let e = i.value("e")?;
            Ok(ConstantValue::new(i.value("h")? / (e * e), "\u{03A9}"))
        })
        .unwrap();
        reg
    }

    #[test]
    fn test_capture_requires_resolution() {
        let reg = small_registry();
        assert_eq!(
            RegistrySnapshot::capture(&reg).unwrap_err(),
            RegistryError::UnresolvedName { name: "h".into() }
        );
    }

    #[test]
    fn test_snapshot_through_file() {
        let mut reg = small_registry();
        reg.resolve().unwrap();
        let snapshot = RegistrySnapshot::capture(&reg).unwrap();

        let entry = snapshot.get("RK").unwrap();
        assert_eq!(entry.kind, ConstantKind::Derived);
        assert_eq!(entry.depends_on, vec!["h".to_string(), "e".to_string()]);

        let mut file = tempfile::tempfile().unwrap();
        file.write_all(snapshot.to_json().unwrap().as_bytes()).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        let mut json = String::new();
        file.read_to_string(&mut json).unwrap();

        assert!(json.contains("\"unit\": \"Ω\""));
        assert!(!json.contains("\"depends_on\": []"));

        let restored = RegistrySnapshot::from_json(&json).unwrap();
        assert_eq!(restored.constants.len(), 3);
        let rk = restored.get("RK").unwrap();
        assert_eq!(rk.unit, "Ω");
        assert!((rk.value - entry.value).abs() <= entry.value * 1e-15);
        assert!(restored.get("h").unwrap().depends_on.is_empty());
    }
}
