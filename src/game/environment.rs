use glam::{Vec2, Vec3};

/// Result of a downward spatial query.
#[derive(Debug, Clone, Copy)]
pub struct GroundHit {
    pub point: Vec3,
    pub normal: Vec3,
}

/// Downward spatial query against the standing surface. A miss is meaningful
/// signal (no floor beneath the origin), not a transient error.
pub trait GroundProbe {
    fn probe_down(&self, origin: Vec3, max_distance: f32) -> Option<GroundHit>;
}

/// Axis-aligned hole in the floor, spanning `min..max` in the XZ plane.
#[derive(Debug, Clone, Copy)]
pub struct Pit {
    pub min: Vec2,
    pub max: Vec2,
}

impl Pit {
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.y && z <= self.max.y
    }
}

/// A bounded planar floor with optional pits. Stands in for the static level
/// geometry the probes would otherwise raycast against.
#[derive(Debug, Clone)]
pub struct Environment {
    floor_height: f32,
    half_extent: Vec2,
    pits: Vec<Pit>,
}

impl Environment {
    pub fn flat(half_extent: Vec2) -> Self {
        Self {
            floor_height: 0.0,
            half_extent,
            pits: Vec::new(),
        }
    }

    pub fn with_pits(half_extent: Vec2, pits: Vec<Pit>) -> Self {
        Self {
            floor_height: 0.0,
            half_extent,
            pits,
        }
    }

    pub fn floor_height(&self) -> f32 {
        self.floor_height
    }
}

impl GroundProbe for Environment {
    fn probe_down(&self, origin: Vec3, max_distance: f32) -> Option<GroundHit> {
        let drop = origin.y - self.floor_height;
        if drop < 0.0 || drop > max_distance {
            return None;
        }
        if origin.x.abs() > self.half_extent.x || origin.z.abs() > self.half_extent.y {
            return None;
        }
        if self.pits.iter().any(|pit| pit.contains(origin.x, origin.z)) {
            return None;
        }
        Some(GroundHit {
            point: Vec3::new(origin.x, self.floor_height, origin.z),
            normal: Vec3::Y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_hits_floor_within_range() {
        let env = Environment::flat(Vec2::splat(10.0));
        let hit = env.probe_down(Vec3::new(1.0, 2.0, -3.0), 5.0).unwrap();
        assert_eq!(hit.point, Vec3::new(1.0, 0.0, -3.0));
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn probe_misses_beyond_max_distance() {
        let env = Environment::flat(Vec2::splat(10.0));
        assert!(env.probe_down(Vec3::new(0.0, 6.0, 0.0), 5.0).is_none());
    }

    #[test]
    fn probe_misses_outside_bounds() {
        let env = Environment::flat(Vec2::splat(10.0));
        assert!(env.probe_down(Vec3::new(11.0, 1.0, 0.0), 5.0).is_none());
    }

    #[test]
    fn probe_misses_over_a_pit() {
        let env = Environment::with_pits(
            Vec2::splat(10.0),
            vec![Pit {
                min: Vec2::new(2.0, 2.0),
                max: Vec2::new(4.0, 4.0),
            }],
        );
        assert!(env.probe_down(Vec3::new(3.0, 1.0, 3.0), 5.0).is_none());
        assert!(env.probe_down(Vec3::new(5.0, 1.0, 5.0), 5.0).is_some());
    }
}
