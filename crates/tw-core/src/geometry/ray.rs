//! Ray type and intersection tests

use glam::{Mat4, Vec3};

use super::Plane;
use crate::constants::{PARALLEL_EPSILON, TRIANGLE_EPSILON};
use crate::mesh::Mesh;

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point of the ray.
    pub origin: Vec3,
    /// Unit direction of the ray.
    pub direction: Vec3,
}

/// Result of a successful intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the hit (world distance for a unit direction).
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray-plane intersection.
    ///
    /// Fails when the ray is parallel to the plane or the plane lies behind
    /// the ray origin.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Hit> {
        let denom = self.direction.dot(plane.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = -plane.distance_to_point(self.origin) / denom;
        if t < 0.0 {
            return None;
        }

        Some(Hit {
            distance: t,
            point: self.at(t),
        })
    }

    /// Two-sided Möller–Trumbore ray-triangle test.
    pub fn intersect_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<Hit> {
        let edge1 = b - a;
        let edge2 = c - a;
        let p = self.direction.cross(edge2);
        let det = edge1.dot(p);
        if det.abs() < TRIANGLE_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = self.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        if t < 0.0 {
            return None;
        }

        Some(Hit {
            distance: t,
            point: self.at(t),
        })
    }

    /// Nearest intersection with a mesh placed by `world`.
    ///
    /// The transformed bounding box is tested first; triangles are only
    /// visited when the ray enters it.
    pub fn intersect_mesh(&self, mesh: &Mesh, world: &Mat4) -> Option<Hit> {
        mesh.bounds().transform(world).intersect_ray(self)?;

        let mut nearest: Option<Hit> = None;
        for [a, b, c] in mesh.triangles() {
            let hit = self.intersect_triangle(
                world.transform_point3(a),
                world.transform_point3(b),
                world.transform_point3(c),
            );
            if let Some(hit) = hit
                && nearest.is_none_or(|n| hit.distance < n.distance)
            {
                nearest = Some(hit);
            }
        }
        nearest
    }
}
