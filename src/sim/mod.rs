//! Deterministic mission core
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - Randomness only through a caller-supplied `Rng`
//! - Time only through the `delta` carried by tick events
//! - Stable iteration order (by debris id)
//! - No rendering or browser dependencies

pub mod debris;
pub mod motion;
pub mod position;
pub mod state;
pub mod tick;

pub use debris::{Debris, Direction, OrbitLane, Sprite, generate_field};
pub use motion::{FrameTimer, advance};
pub use position::debris_offset;
pub use state::{GamePhase, MissionConfig, MissionMessage, MissionState};
pub use tick::{Effect, MissionEvent, step};
