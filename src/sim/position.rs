//! Maps orbital coordinates to render offsets

use glam::Vec2;

use super::debris::OrbitLane;
use crate::polar_to_cartesian;

/// Offset from the planet center for a lane and angle in degrees
///
/// Pure; the renderer may call it at any rate.
#[inline]
pub fn debris_offset(lane: OrbitLane, angle_deg: f32) -> Vec2 {
    polar_to_cartesian(lane.radius(), angle_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_lane_radii() {
        assert!(approx(debris_offset(OrbitLane::Inner, 0.0), Vec2::new(130.0, 0.0)));
        assert!(approx(debris_offset(OrbitLane::Middle, 90.0), Vec2::new(0.0, 180.0)));
        assert!(approx(debris_offset(OrbitLane::Outer, 180.0), Vec2::new(-230.0, 0.0)));
    }

    #[test]
    fn test_distance_matches_radius() {
        for lane in OrbitLane::ALL {
            for angle in [0.0, 33.0, 127.5, 271.0, 359.9] {
                let d = debris_offset(lane, angle).length();
                assert!((d - lane.radius()).abs() < 1e-3);
            }
        }
    }
}
