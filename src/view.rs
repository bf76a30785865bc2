//! Mission HUD model
//!
//! What the page shows for a mission state, kept free of DOM types.

use crate::sim::{GamePhase, MissionState};

/// Attribute holding a sprite's debris id, read by the orbit click listener
pub const DEBRIS_ID_ATTR: &str = "data-debris-id";

/// Element id of the sprite for a piece of debris
pub fn sprite_element_id(id: u32) -> String {
    format!("debris-{}", id)
}

/// Parse the value of `DEBRIS_ID_ATTR`
pub fn parse_debris_id(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Counters and controls shown beside the orbit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionHud {
    pub status: &'static str,
    pub message: &'static str,
    pub remaining: usize,
    pub removed: usize,
    pub start_enabled: bool,
    /// The mission photo unlocks once the orbit is clean
    pub photo_enabled: bool,
    pub photo_hint: &'static str,
}

impl MissionHud {
    pub fn from_state(state: &MissionState) -> Self {
        let complete = state.is_complete();
        Self {
            status: state.phase.status_text(),
            message: state.message.map(|m| m.text()).unwrap_or(""),
            remaining: state.remaining_count(),
            removed: state.removed_count,
            start_enabled: state.phase != GamePhase::Playing,
            photo_enabled: complete,
            photo_hint: if complete {
                "Go to mission photo"
            } else {
                "Clear all debris to unlock the mission photo"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{MissionConfig, MissionEvent, step};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sprite_ids_round_trip() {
        assert_eq!(sprite_element_id(7), "debris-7");
        assert_eq!(parse_debris_id("7"), Some(7));
        assert_eq!(parse_debris_id(" 12 "), Some(12));
        assert_eq!(parse_debris_id("debris-7"), None);
        assert_eq!(parse_debris_id(""), None);
    }

    #[test]
    fn test_hud_tracks_mission() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut state = MissionState::new(MissionConfig::default());

        let hud = MissionHud::from_state(&state);
        assert!(hud.start_enabled);
        assert!(!hud.photo_enabled);
        assert_eq!(hud.message, "");

        step(&mut state, MissionEvent::Start, &mut rng);
        step(&mut state, MissionEvent::Click { id: 0 }, &mut rng);
        step(&mut state, MissionEvent::Click { id: 1 }, &mut rng);
        let hud = MissionHud::from_state(&state);
        assert_eq!(hud.removed, 2);
        assert_eq!(hud.remaining, 8);
        assert!(!hud.start_enabled);
        assert!(!hud.photo_enabled);
        assert_eq!(hud.photo_hint, "Clear all debris to unlock the mission photo");

        for id in 2..10 {
            step(&mut state, MissionEvent::Click { id }, &mut rng);
        }
        let hud = MissionHud::from_state(&state);
        assert_eq!(hud.removed, 10);
        assert_eq!(hud.remaining, 0);
        assert!(hud.start_enabled);
        assert!(hud.photo_enabled);
        assert_eq!(hud.photo_hint, "Go to mission photo");

        step(&mut state, MissionEvent::SelectNewPlanet, &mut rng);
        let hud = MissionHud::from_state(&state);
        assert_eq!(hud.removed, 0);
        assert!(!hud.photo_enabled);
    }
}
