//! Arrow (shaft + cone) mesh generation

use std::f32::consts::TAU;

use glam::Vec3;

use super::{Mesh, MeshVertex};

/// Generate an arrow pointing along +Y.
///
/// The arrow is centered on its full length: the shaft starts at
/// `-(base_length + cone_length) / 2` and the cone tip sits at
/// `+(base_length + cone_length) / 2`.
pub fn arrow_mesh(
    base_length: f32,
    base_radius: f32,
    cone_length: f32,
    cone_radius: f32,
    segments: u32,
    color: [f32; 4],
) -> Mesh {
    let segments = segments.max(3);
    let half = (base_length + cone_length) / 2.0;
    let bottom = -half;
    let shaft_end = bottom + base_length;
    let tip = half;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let mut push = |position: Vec3, normal: Vec3| {
        vertices.push(MeshVertex {
            position: position.into(),
            normal: normal.into(),
            color,
        });
        (vertices.len() - 1) as u32
    };

    let ring = |i: u32| {
        let angle = (i as f32 / segments as f32) * TAU;
        (angle.cos(), angle.sin())
    };

    // Shaft cylinder
    let mut shaft = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let (c, s) = ring(i);
        let (x, z) = (c * base_radius, s * base_radius);
        let normal = Vec3::new(c, 0.0, s);
        let lower = push(Vec3::new(x, bottom, z), normal);
        let upper = push(Vec3::new(x, shaft_end, z), normal);
        shaft.push((lower, upper));
    }
    for w in shaft.windows(2) {
        let ((i0, i1), (i2, i3)) = (w[0], w[1]);
        indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
    }

    // Shaft bottom cap
    let bottom_center = push(Vec3::new(0.0, bottom, 0.0), Vec3::NEG_Y);
    for w in shaft.windows(2) {
        indices.extend_from_slice(&[bottom_center, w[0].0, w[1].0]);
    }

    // Cone side
    let slope = cone_radius / cone_length.max(f32::EPSILON);
    let tip_index = push(Vec3::new(0.0, tip, 0.0), Vec3::Y);
    let mut cone = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let (c, s) = ring(i);
        let rim = Vec3::new(c * cone_radius, shaft_end, s * cone_radius);
        let normal = Vec3::new(c, slope, s).normalize();
        cone.push(push(rim, normal));
    }
    for w in cone.windows(2) {
        indices.extend_from_slice(&[tip_index, w[1], w[0]]);
    }

    // Cone base cap
    let cap_center = push(Vec3::new(0.0, shaft_end, 0.0), Vec3::NEG_Y);
    for w in cone.windows(2) {
        indices.extend_from_slice(&[cap_center, w[0], w[1]]);
    }

    Mesh::new(vertices, indices)
}
