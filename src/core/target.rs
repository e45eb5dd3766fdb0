use std::ops::RangeInclusive;

use rand::Rng;

use crate::core::mapping::MathPoint;

pub const TARGET_RADIUS: f64 = 20.0;
pub const BIRD_RADIUS: f64 = 10.0;
pub const SPAWN_X_RANGE: RangeInclusive<i32> = 200..=699;
pub const SPAWN_Y_RANGE: RangeInclusive<i32> = 50..=399;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Target {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            radius: TARGET_RADIUS,
        }
    }

    pub const fn center(&self) -> MathPoint {
        MathPoint::new(self.x, self.y)
    }

    /// Strict overlap test: circles that only touch do not count as a hit.
    pub fn is_hit_by(&self, position: MathPoint, bird_radius: f64) -> bool {
        position.distance(self.center()) < bird_radius + self.radius
    }
}

#[derive(Clone, Debug)]
pub struct TargetSpawner {
    x_range: RangeInclusive<i32>,
    y_range: RangeInclusive<i32>,
}

impl TargetSpawner {
    pub fn new() -> Self {
        Self {
            x_range: SPAWN_X_RANGE,
            y_range: SPAWN_Y_RANGE,
        }
    }

    pub fn spawn<R: Rng>(&self, rng: &mut R) -> Target {
        let x = rng.random_range(self.x_range.clone());
        let y = rng.random_range(self.y_range.clone());
        Target::new(f64::from(x), f64::from(y))
    }
}

impl Default for TargetSpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{BIRD_RADIUS, Target, TargetSpawner};
    use crate::core::mapping::MathPoint;

    #[test]
    fn hit_when_bird_sits_on_target_center() {
        let target = Target::new(500.0, 150.0);
        assert!(target.is_hit_by(MathPoint::new(500.0, 150.0), BIRD_RADIUS));
    }

    #[test]
    fn touching_circles_are_a_miss() {
        let target = Target::new(500.0, 150.0);
        assert!(!target.is_hit_by(MathPoint::new(530.0, 150.0), BIRD_RADIUS));
        assert!(!target.is_hit_by(MathPoint::new(500.0, 120.0), BIRD_RADIUS));
        assert!(target.is_hit_by(MathPoint::new(529.9, 150.0), BIRD_RADIUS));
    }

    #[test]
    fn spawned_targets_stay_in_bounds() {
        let spawner = TargetSpawner::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10_000 {
            let target = spawner.spawn(&mut rng);
            assert!((200.0..=699.0).contains(&target.x), "x={}", target.x);
            assert!((50.0..=399.0).contains(&target.y), "y={}", target.y);
            assert_eq!(target.x.fract(), 0.0);
            assert_eq!(target.y.fract(), 0.0);
            assert_eq!(target.radius, 20.0);
        }
    }

    #[test]
    fn same_seed_spawns_same_target() {
        let spawner = TargetSpawner::new();
        let a = spawner.spawn(&mut StdRng::seed_from_u64(42));
        let b = spawner.spawn(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
