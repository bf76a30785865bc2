//! In-memory store for native builds and tests

use std::collections::HashMap;

use super::{ADOPTED_PLANET_KEY, PlanetStore, StorageError};
use crate::planets::Planet;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    /// Number of successful writes
    pub writes: usize,
    /// Make every write fail (for exercising the best-effort path)
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose writes always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Store a raw value, bypassing serialization
    pub fn set_raw(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl PlanetStore for MemoryStore {
    fn save_adopted(&mut self, planet: &Planet) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: ADOPTED_PLANET_KEY.to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        let json = serde_json::to_string(planet)?;
        self.items.insert(ADOPTED_PLANET_KEY.to_string(), json);
        self.writes += 1;
        Ok(())
    }

    fn load_adopted(&self) -> Result<Option<Planet>, StorageError> {
        match self.items.get(ADOPTED_PLANET_KEY) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planets::all_planets;

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        assert!(store.load_adopted().unwrap().is_none());

        let planet = all_planets().remove(2);
        store.save_adopted(&planet).unwrap();
        assert_eq!(store.writes, 1);
        assert_eq!(store.load_adopted().unwrap(), Some(planet));
        assert!(store.get_raw(ADOPTED_PLANET_KEY).unwrap().contains("\"name\":\"Jupiter\""));
    }

    #[test]
    fn test_corrupt_value() {
        let mut store = MemoryStore::new();
        store.set_raw(ADOPTED_PLANET_KEY, "{not json");
        assert!(matches!(store.load_adopted(), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_failing_writes() {
        let mut store = MemoryStore::failing();
        let planet = all_planets().remove(0);
        assert!(matches!(
            store.save_adopted(&planet),
            Err(StorageError::Write { .. })
        ));
        assert_eq!(store.writes, 0);
    }
}
