//! Adopted-planet persistence
//!
//! Features:
//! - Single JSON value under a fixed key
//! - LocalStorage backend on web, in-memory backend elsewhere
//! - Writes are best effort; callers log failures and carry on

mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

use crate::planets::Planet;

/// Storage key for the adopted planet
pub const ADOPTED_PLANET_KEY: &str = "adoptedPlanet";

/// Errors from a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage is available (no window, private mode, ...)
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected the write
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    /// The backend failed to read
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    /// Value could not be (de)serialized
    #[error("invalid stored value: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value sink for the adopted planet
pub trait PlanetStore {
    fn save_adopted(&mut self, planet: &Planet) -> Result<(), StorageError>;

    /// Read the adopted planet back, `None` if nothing was stored
    fn load_adopted(&self) -> Result<Option<Planet>, StorageError>;
}
