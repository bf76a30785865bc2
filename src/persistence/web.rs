//! LocalStorage backend

use web_sys::Storage;

use super::{ADOPTED_PLANET_KEY, PlanetStore, StorageError};
use crate::planets::Planet;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl PlanetStore for LocalStorageStore {
    fn save_adopted(&mut self, planet: &Planet) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        let json = serde_json::to_string(planet)?;
        storage
            .set_item(ADOPTED_PLANET_KEY, &json)
            .map_err(|e| StorageError::Write {
                key: ADOPTED_PLANET_KEY.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn load_adopted(&self) -> Result<Option<Planet>, StorageError> {
        let storage = Self::storage()?;
        let json = storage
            .get_item(ADOPTED_PLANET_KEY)
            .map_err(|e| StorageError::Read {
                key: ADOPTED_PLANET_KEY.to_string(),
                reason: format!("{:?}", e),
            })?;
        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
