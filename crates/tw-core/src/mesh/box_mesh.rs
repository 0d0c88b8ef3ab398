//! Box (rectangular prism) mesh generation

use super::{Mesh, MeshVertex};

/// Generate a box mesh centered on the origin.
///
/// # Arguments
/// * `width` - extent along X
/// * `height` - extent along Y
/// * `depth` - extent along Z
/// * `color` - vertex color (RGBA)
///
/// 24 vertices (4 per face so each face keeps its own normal), 12 triangles.
pub fn box_mesh(width: f32, height: f32, depth: f32, color: [f32; 4]) -> Mesh {
    let hx = width / 2.0;
    let hy = height / 2.0;
    let hz = depth / 2.0;

    // Corners named by the sign of each coordinate (n = negative, p = positive)
    let nnn = [-hx, -hy, -hz];
    let pnn = [hx, -hy, -hz];
    let npn = [-hx, hy, -hz];
    let ppn = [hx, hy, -hz];
    let nnp = [-hx, -hy, hz];
    let pnp = [hx, -hy, hz];
    let npp = [-hx, hy, hz];
    let ppp = [hx, hy, hz];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    let mut add_face = |corners: [[f32; 3]; 4], normal: [f32; 3]| {
        let base = vertices.len() as u32;
        for position in corners {
            vertices.push(MeshVertex {
                position,
                normal,
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    };

    // +X / -X
    add_face([pnn, ppn, ppp, pnp], [1.0, 0.0, 0.0]);
    add_face([npn, nnn, nnp, npp], [-1.0, 0.0, 0.0]);

    // +Y / -Y
    add_face([ppn, npn, npp, ppp], [0.0, 1.0, 0.0]);
    add_face([nnn, pnn, pnp, nnp], [0.0, -1.0, 0.0]);

    // +Z / -Z
    add_face([nnp, pnp, ppp, npp], [0.0, 0.0, 1.0]);
    add_face([npn, ppn, pnn, nnn], [0.0, 0.0, -1.0]);

    Mesh::new(vertices, indices)
}
