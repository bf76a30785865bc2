//! Mission state and core types
//!
//! Nothing here survives a reload; only the adopted planet is persisted.

use serde::{Deserialize, Serialize};

use super::debris::Debris;
use crate::consts::*;

/// Current phase of a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No debris field, waiting for "start cleanup"
    #[default]
    Idle,
    /// Debris orbiting, clicks accepted
    Playing,
    /// Orbit cleared; motion frozen, clicks ignored
    Complete,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Playing => "playing",
            GamePhase::Complete => "complete",
        }
    }

    /// Objective line shown under the orbit view
    pub fn status_text(&self) -> &'static str {
        match self {
            GamePhase::Idle => "Tap 'Start Cleanup' to begin the mission.",
            GamePhase::Playing => {
                "Objective: click every single piece of debris until the orbit is clear."
            }
            GamePhase::Complete => "Orbit fully sanitized! Your planet is much safer now.",
        }
    }
}

/// Feedback shown to the player after a mission event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionMessage {
    Started,
    Encouragement,
    AlmostThere,
    Complete,
}

impl MissionMessage {
    pub fn text(&self) -> &'static str {
        match self {
            MissionMessage::Started => "Mission started – clear every piece of debris from orbit!",
            MissionMessage::Encouragement => "Nice hit! Keep cleaning the orbit.",
            MissionMessage::AlmostThere => "Almost there, just a couple of pieces left!",
            MissionMessage::Complete => "Orbit completely clean – fantastic work, guardian!",
        }
    }
}

/// Tunable mission parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Debris generated on start
    pub mission_size: usize,
    /// Remaining count at or below which `AlmostThere` replaces `Encouragement`
    pub almost_there_threshold: usize,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            mission_size: MISSION_SIZE,
            almost_there_threshold: ALMOST_THERE_THRESHOLD,
        }
    }
}

/// Ephemeral state of one mission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionState {
    pub config: MissionConfig,
    pub phase: GamePhase,
    /// Debris field (sorted by id)
    pub debris: Vec<Debris>,
    pub initial_count: usize,
    pub removed_count: usize,
    /// Most recent feedback message, cleared on planet change
    pub message: Option<MissionMessage>,
}

impl MissionState {
    pub fn new(config: MissionConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn remaining_count(&self) -> usize {
        self.initial_count.saturating_sub(self.removed_count)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    pub fn debris_mut(&mut self, id: u32) -> Option<&mut Debris> {
        self.debris.iter_mut().find(|d| d.id == id)
    }

    /// Drop the debris field and counters
    pub fn clear_field(&mut self) {
        self.debris.clear();
        self.removed_count = 0;
    }
}
