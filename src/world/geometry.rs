//! Axis-aligned box math used by the sweep and the tile guard.

use bevy::prelude::*;

/// Axis-aligned bounding box in world space.
///
/// Invariant: `min <= max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.cmple(max).all(), "degenerate box: {min} > {max}");
        Self { min, max }
    }

    /// Box centered at `center` extending `half_extents` on each side.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// The unit cube occupied by a grid cell.
    pub fn unit_cube(cell: IVec3) -> Self {
        let min = cell.as_vec3();
        Self {
            min,
            max: min + Vec3::ONE,
        }
    }

    /// Translated copy.
    pub fn offset(self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Copy grown by `margin` on all six faces.
    pub fn expand(self, margin: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_translates_both_corners() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE).offset(Vec3::new(1.0, -2.0, 0.5));
        assert_eq!(aabb.min, Vec3::new(1.0, -2.0, 0.5));
        assert_eq!(aabb.max, Vec3::new(2.0, -1.0, 1.5));
    }

    #[test]
    fn expand_grows_every_face() {
        let aabb = Aabb::unit_cube(IVec3::ZERO).expand(0.25);
        assert_eq!(aabb.min, Vec3::splat(-0.25));
        assert_eq!(aabb.max, Vec3::splat(1.25));
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = Aabb::unit_cube(IVec3::ZERO);
        let b = Aabb::unit_cube(IVec3::new(1, 0, 0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&Aabb::unit_cube(IVec3::new(2, 0, 0))));
    }
}
