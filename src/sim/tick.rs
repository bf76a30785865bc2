//! Mission state transitions
//!
//! Every trigger (frame tick, click, start, planet change) goes through
//! `step`, so a click and the next frame can never interleave halfway.

use rand::Rng;

use super::debris::generate_field;
use super::motion::advance;
use super::state::{GamePhase, MissionMessage, MissionState};

/// Events that drive the mission
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissionEvent {
    /// "Start cleanup"
    Start,
    /// One animation frame, `delta` seconds after the previous one
    Tick { delta: f32 },
    /// Player clicked the debris with this id
    Click { id: u32 },
    /// Player asked for a different planet
    SelectNewPlanet,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Show this message to the player
    Announce(MissionMessage),
    /// Store the current planet as adopted (best effort)
    PersistAdoptedPlanet,
}

/// Apply `event` to `state`, returning the side effects to perform
pub fn step<R: Rng>(state: &mut MissionState, event: MissionEvent, rng: &mut R) -> Vec<Effect> {
    match event {
        MissionEvent::Start => start(state, rng),
        MissionEvent::Tick { delta } => {
            if state.phase == GamePhase::Playing {
                advance(&mut state.debris, delta);
            }
            Vec::new()
        }
        MissionEvent::Click { id } => click(state, id),
        MissionEvent::SelectNewPlanet => {
            state.clear_field();
            state.initial_count = 0;
            state.message = None;
            state.phase = GamePhase::Idle;
            Vec::new()
        }
    }
}

fn start<R: Rng>(state: &mut MissionState, rng: &mut R) -> Vec<Effect> {
    let size = state.config.mission_size;
    state.debris = generate_field(size, rng);
    state.initial_count = size;
    state.removed_count = 0;

    if size == 0 {
        // Nothing to clean: the orbit is already clear
        state.phase = GamePhase::Complete;
        state.message = Some(MissionMessage::Complete);
        return vec![
            Effect::Announce(MissionMessage::Complete),
            Effect::PersistAdoptedPlanet,
        ];
    }

    state.phase = GamePhase::Playing;
    state.message = Some(MissionMessage::Started);
    vec![Effect::Announce(MissionMessage::Started)]
}

fn click(state: &mut MissionState, id: u32) -> Vec<Effect> {
    if state.phase != GamePhase::Playing {
        log::debug!("Ignoring click on debris {} while {}", id, state.phase.as_str());
        return Vec::new();
    }
    if state.removed_count >= state.initial_count {
        return Vec::new();
    }

    let Some(debris) = state.debris_mut(id) else {
        log::debug!("Ignoring click on unknown debris {}", id);
        return Vec::new();
    };
    if debris.removed {
        return Vec::new();
    }
    debris.removed = true;
    state.removed_count += 1;

    let remaining = state.remaining_count();
    let message = if remaining == 0 {
        MissionMessage::Complete
    } else if remaining <= state.config.almost_there_threshold {
        MissionMessage::AlmostThere
    } else {
        MissionMessage::Encouragement
    };
    state.message = Some(message);

    if remaining == 0 {
        state.phase = GamePhase::Complete;
        vec![Effect::Announce(message), Effect::PersistAdoptedPlanet]
    } else {
        vec![Effect::Announce(message)]
    }
}
