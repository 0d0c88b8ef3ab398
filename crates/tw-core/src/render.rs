//! Renderer abstraction
//!
//! GPU backends implement [`Renderer`]; [`RecordingRenderer`] is the headless
//! implementation used by the demo and tests. It records what would have been
//! drawn instead of rasterizing it.

use glam::Mat4;

use crate::camera::{CameraId, ClearFlags};
use crate::material::RimShadowMaterial;
use crate::scene::{MeshId, ObjectId, Scene};

/// Draws an object subtree through a camera
pub trait Renderer {
    /// Draw `root` and its visible descendants through `camera`,
    /// clearing buffers according to the camera's auto-clear flags.
    fn render_object_basic(&mut self, scene: &Scene, root: ObjectId, camera: CameraId);
}

/// One mesh draw resolved against the scene
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// Object being drawn
    pub object: ObjectId,
    /// Geometry
    pub mesh: MeshId,
    /// Material state at draw time
    pub material: RimShadowMaterial,
    /// Object-to-world matrix
    pub world: Mat4,
}

/// Collect draw items for the visible part of a subtree.
///
/// Hidden objects prune their whole subtree.
pub fn collect_draw_items(scene: &Scene, root: ObjectId) -> Vec<DrawItem> {
    let mut items = Vec::new();
    let parent_world = scene.object(root).parent().map(|p| scene.world_matrix(p));
    let mut stack = vec![(root, parent_world)];

    while let Some((id, parent_world)) = stack.pop() {
        let object = scene.object(id);
        if !object.visible {
            continue;
        }
        let local = object.transform.local_matrix();
        let world = parent_world.map_or(local, |p| p * local);

        if let Some(renderable) = object.renderable {
            items.push(DrawItem {
                object: id,
                mesh: renderable.mesh,
                material: scene.material(renderable.material).clone(),
                world,
            });
        }
        stack.extend(object.children().iter().rev().map(|&c| (c, Some(world))));
    }

    items
}

/// Everything one `render_object_basic` call produced
#[derive(Debug, Clone)]
pub struct RecordedFrame {
    /// Camera used for the draw
    pub camera: CameraId,
    /// Buffers cleared before drawing
    pub clear: ClearFlags,
    /// View-projection matrix at draw time
    pub view_projection: Mat4,
    /// Draws in submission order
    pub items: Vec<DrawItem>,
}

/// Headless renderer that records frames
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<RecordedFrame>,
}

impl RecordingRenderer {
    /// Create a renderer with no recorded frames
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded frames, oldest first
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// Most recent frame
    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render_object_basic(&mut self, scene: &Scene, root: ObjectId, camera: CameraId) {
        let cam = scene.camera(camera);
        let items = collect_draw_items(scene, root);
        let name = &scene.object(root).name;
        tracing::trace!("RecordingRenderer: {} draws for '{name}'", items.len());
        self.frames.push(RecordedFrame {
            camera,
            clear: cam.auto_clear,
            view_projection: cam.view_projection(scene),
            items,
        });
    }
}
