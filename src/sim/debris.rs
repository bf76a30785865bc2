//! Debris entities and mission field generation

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One of the concentric orbit lanes around the planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitLane {
    /// Lane 1, closest to the planet and fastest
    Inner,
    /// Lane 2
    Middle,
    /// Lane 3, farthest out and slowest
    Outer,
}

impl OrbitLane {
    pub const ALL: [OrbitLane; LANE_COUNT] = [OrbitLane::Inner, OrbitLane::Middle, OrbitLane::Outer];

    /// Lane for the n-th generated object (cycles 1, 2, 3, 1, 2, 3, ...)
    pub fn for_sequence(index: usize) -> Self {
        Self::ALL[index % LANE_COUNT]
    }

    /// 1-based lane number
    pub fn index(&self) -> u8 {
        match self {
            OrbitLane::Inner => 1,
            OrbitLane::Middle => 2,
            OrbitLane::Outer => 3,
        }
    }

    /// Angular speed in degrees/second
    pub fn speed(&self) -> f32 {
        LANE_SPEEDS[self.index() as usize - 1]
    }

    /// Orbit radius in layout units
    pub fn radius(&self) -> f32 {
        LANE_RADII[self.index() as usize - 1]
    }
}

/// Travel direction around the planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    CounterClockwise,
    Clockwise,
}

impl Direction {
    /// +1 for counter-clockwise, -1 for clockwise
    pub fn sign(&self) -> f32 {
        match self {
            Direction::CounterClockwise => 1.0,
            Direction::Clockwise => -1.0,
        }
    }
}

/// Cosmetic sprite kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Trash,
    Satellite,
    Asteroid,
}

impl Sprite {
    pub const ALL: [Sprite; 3] = [Sprite::Trash, Sprite::Satellite, Sprite::Asteroid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sprite::Trash => "trash",
            Sprite::Satellite => "satellite",
            Sprite::Asteroid => "asteroid",
        }
    }
}

/// A piece of debris drifting around the adopted planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debris {
    pub id: u32,
    pub lane: OrbitLane,
    /// Angular position in degrees, always within [0, 360)
    pub angle: f32,
    /// Once set, the object is inert for the rest of the mission
    pub removed: bool,
    /// Degrees/second, fixed by lane at creation
    pub speed: f32,
    pub direction: Direction,
    pub sprite: Sprite,
}

impl Debris {
    /// Signed angular velocity in degrees/second
    pub fn angular_velocity(&self) -> f32 {
        self.direction.sign() * self.speed
    }

    pub fn is_active(&self) -> bool {
        !self.removed
    }
}

/// Build a fresh debris field of `count` objects with ids `0..count`
///
/// Lanes rotate deterministically; angle, direction and sprite are drawn
/// independently from `rng`. Overlapping start angles are allowed.
pub fn generate_field<R: Rng>(count: usize, rng: &mut R) -> Vec<Debris> {
    (0..count)
        .map(|i| {
            let lane = OrbitLane::for_sequence(i);
            let angle = crate::normalize_degrees(rng.random_range(0.0..FULL_TURN));
            let direction = if rng.random_bool(0.5) {
                Direction::CounterClockwise
            } else {
                Direction::Clockwise
            };
            let sprite = Sprite::ALL[rng.random_range(0..Sprite::ALL.len())];

            Debris {
                id: i as u32,
                lane,
                angle,
                removed: false,
                speed: lane.speed(),
                direction,
                sprite,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_field_ids_and_lanes() {
        let mut rng = Pcg32::seed_from_u64(7);
        let field = generate_field(10, &mut rng);

        assert_eq!(field.len(), 10);
        for (i, d) in field.iter().enumerate() {
            assert_eq!(d.id, i as u32);
            assert_eq!(d.lane.index() as usize, i % 3 + 1);
            assert!(!d.removed);
        }
    }

    #[test]
    fn test_lane_speeds() {
        let mut rng = Pcg32::seed_from_u64(1);
        for d in generate_field(6, &mut rng) {
            let expected = match d.lane {
                OrbitLane::Inner => 40.0,
                OrbitLane::Middle => 28.0,
                OrbitLane::Outer => 20.0,
            };
            assert_eq!(d.speed, expected);
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let a = generate_field(10, &mut Pcg32::seed_from_u64(42));
        let b = generate_field(10, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_attributes_vary() {
        let mut rng = Pcg32::seed_from_u64(3);
        let field = generate_field(200, &mut rng);

        let ccw = field
            .iter()
            .filter(|d| d.direction == Direction::CounterClockwise)
            .count();
        assert!(ccw > 0 && ccw < field.len());

        for sprite in Sprite::ALL {
            assert!(field.iter().any(|d| d.sprite == sprite));
        }
        assert!(field.iter().all(|d| (0.0..360.0).contains(&d.angle)));
    }

    #[test]
    fn test_empty_field() {
        let mut rng = Pcg32::seed_from_u64(0);
        assert!(generate_field(0, &mut rng).is_empty());
    }
}
