//! Infinite plane

use glam::Vec3;

/// A plane in 3D space (ax + by + cz + d = 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal of the plane.
    pub normal: Vec3,
    /// Signed offset so that `normal · p + d = 0` for points on the plane.
    pub d: f32,
}

impl Plane {
    /// Creates a plane through `point` with the given normal.
    ///
    /// A zero normal yields a degenerate plane that no ray can intersect.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalize_or_zero();
        Self {
            normal: n,
            d: -n.dot(point),
        }
    }

    /// Returns the signed distance from a point to the plane.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}
