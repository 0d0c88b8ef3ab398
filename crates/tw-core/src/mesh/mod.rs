//! Mesh storage and primitive generation
//!
//! Generates vertices, normals and indices for the shapes the widget needs:
//! - Box (rectangular prism), used for pick colliders
//! - Arrow (shaft cylinder + cone), used for the visible handles

mod arrow;
mod box_mesh;

pub use arrow::arrow_mesh;
pub use box_mesh::box_mesh;

use glam::Vec3;

use crate::geometry::BoundingBox;

/// Vertex layout shared by every mesh the engine draws.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Vertex position in local space.
    pub position: [f32; 3],
    /// Vertex normal in local space.
    pub normal: [f32; 3],
    /// Vertex color (RGBA).
    pub color: [f32; 4],
}

/// Indexed triangle mesh with a cached local bounding box.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    bounds: BoundingBox,
}

impl Mesh {
    /// Create a mesh from vertices and triangle indices.
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() % 3 == 0, "partial triangle");
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "index out of range"
        );
        let bounds = BoundingBox::from_points(vertices.iter().map(|v| Vec3::from(v.position)));
        Self {
            vertices,
            indices,
            bounds,
        }
    }

    /// Vertex data.
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Raw vertex bytes for upload by a GPU renderer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Local-space bounding box.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as local-space corner positions.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        let position = |i: u32| Vec3::from(self.vertices[i as usize].position);
        self.indices
            .chunks_exact(3)
            .map(move |tri| [position(tri[0]), position(tri[1]), position(tri[2])])
    }
}
