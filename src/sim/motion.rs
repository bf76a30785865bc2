//! Variable-timestep orbital motion
//!
//! Speeds are real degrees per real second, so the visual speed does not
//! depend on the display refresh rate.

use super::debris::Debris;
use crate::normalize_degrees;

/// Advance every non-removed debris angle by `delta` seconds
///
/// Removed objects keep their last angle.
pub fn advance(debris: &mut [Debris], delta: f32) {
    for d in debris.iter_mut().filter(|d| d.is_active()) {
        d.angle = normalize_degrees(d.angle + d.angular_velocity() * delta);
    }
}

/// Converts millisecond frame timestamps into elapsed seconds
///
/// The first frame after construction or `reset` only records the baseline
/// and reports a zero-length step.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Seconds elapsed since the previous frame
    pub fn delta_seconds(&mut self, now_ms: f64) -> f32 {
        let delta_ms = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        (delta_ms / 1000.0) as f32
    }

    /// Discard the baseline so a restart does not see a stale delta
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn has_baseline(&self) -> bool {
        self.last_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::debris::{Direction, OrbitLane, Sprite};
    use proptest::prelude::*;

    fn debris(angle: f32, lane: OrbitLane, direction: Direction) -> Debris {
        Debris {
            id: 0,
            lane,
            angle,
            removed: false,
            speed: lane.speed(),
            direction,
            sprite: Sprite::Trash,
        }
    }

    #[test]
    fn test_wraps_past_full_turn() {
        let mut field = vec![debris(350.0, OrbitLane::Inner, Direction::CounterClockwise)];
        advance(&mut field, 0.5);
        assert!((field[0].angle - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_clockwise_wraps_below_zero() {
        let mut field = vec![debris(5.0, OrbitLane::Outer, Direction::Clockwise)];
        advance(&mut field, 1.0);
        assert!((field[0].angle - 345.0).abs() < 1e-4);
    }

    #[test]
    fn test_removed_debris_is_frozen() {
        let mut field = vec![debris(90.0, OrbitLane::Middle, Direction::CounterClockwise)];
        field[0].removed = true;
        advance(&mut field, 2.0);
        assert_eq!(field[0].angle, 90.0);
    }

    #[test]
    fn test_frame_timer_baseline() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.delta_seconds(1000.0), 0.0);
        assert!((timer.delta_seconds(1016.0) - 0.016).abs() < 1e-6);

        timer.reset();
        assert!(!timer.has_baseline());
        // A restart long after the last frame starts from zero again
        assert_eq!(timer.delta_seconds(90_000.0), 0.0);
        assert!((timer.delta_seconds(90_500.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_frame_timer_ignores_backwards_clock() {
        let mut timer = FrameTimer::new();
        timer.delta_seconds(500.0);
        assert_eq!(timer.delta_seconds(400.0), 0.0);
    }

    proptest! {
        #[test]
        fn angle_stays_in_range(
            start in 0.0f32..360.0,
            deltas in proptest::collection::vec(0.0f32..5.0, 1..50),
            clockwise in any::<bool>(),
        ) {
            let direction = if clockwise { Direction::Clockwise } else { Direction::CounterClockwise };
            let mut field = vec![debris(start, OrbitLane::Inner, direction)];
            for delta in deltas {
                advance(&mut field, delta);
                prop_assert!(field[0].angle >= 0.0 && field[0].angle < 360.0);
            }
        }
    }
}
