//! Mission settings
//!
//! Read from LocalStorage on web, separately from the adopted planet.

use serde::{Deserialize, Serialize};

use crate::consts::{ALMOST_THERE_THRESHOLD, MISSION_SIZE};
use crate::sim::MissionConfig;

/// Upper bound on debris per mission (keeps the orbit clickable)
pub const MAX_MISSION_SIZE: usize = 60;

/// Player-tunable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Debris generated per mission
    pub mission_size: usize,
    /// Remaining count that triggers the "almost there" message
    pub almost_there_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mission_size: MISSION_SIZE,
            almost_there_threshold: ALMOST_THERE_THRESHOLD,
        }
    }
}

impl Settings {
    /// Mission parameters, with the size clamped to 1..=MAX_MISSION_SIZE
    pub fn mission_config(&self) -> MissionConfig {
        MissionConfig {
            mission_size: self.mission_size.clamp(1, MAX_MISSION_SIZE),
            almost_there_threshold: self.almost_there_threshold,
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "orbit_guardian_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
