//! Orbit Guardian - adopt a planet and clean up its orbit
//!
//! Core modules:
//! - `sim`: Deterministic mission core (debris field, orbital motion, state machine)
//! - `platform`: Frame scheduling abstraction (requestAnimationFrame on web)
//! - `session`: Glues the mission core to a frame driver, planet catalog and storage
//! - `persistence`: Adopted-planet storage (LocalStorage on web)
//! - `planets`, `news`, `photo`, `view`: Static content and presentation helpers

pub mod news;
pub mod persistence;
pub mod photo;
pub mod planets;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;

pub use planets::{Catalog, Planet, PlanetProvider};
pub use session::MissionSession;
pub use settings::Settings;

use glam::Vec2;

/// Mission configuration constants
pub mod consts {
    /// Number of debris objects generated per mission
    pub const MISSION_SIZE: usize = 10;
    /// Remaining count at or below which the "almost there" message is shown
    pub const ALMOST_THERE_THRESHOLD: usize = 2;

    /// Number of orbit lanes around the planet
    pub const LANE_COUNT: usize = 3;
    /// Angular speed per lane in degrees/second (inner lane fastest)
    pub const LANE_SPEEDS: [f32; LANE_COUNT] = [40.0, 28.0, 20.0];
    /// Orbit radius per lane in layout units
    pub const LANE_RADII: [f32; LANE_COUNT] = [130.0, 180.0, 230.0];

    /// Degrees in a full turn
    pub const FULL_TURN: f32 = 360.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= consts::FULL_TURN { 0.0 } else { wrapped }
}

/// Convert polar (r, theta in radians) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert!(normalize_degrees(-1e-9) < 360.0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, 0.0);
        assert!((p.x - 2.0).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);

        let p = polar_to_cartesian(1.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }
}
