//! Engine context
//!
//! Bundles the scene, the active viewport and a renderer. Widget calls take
//! the engine as an explicit argument instead of reaching for a global.

use crate::camera::{CameraId, Viewport};
use crate::render::{RecordingRenderer, Renderer};
use crate::scene::{ObjectId, Scene};

/// Scene + viewport + renderer
#[derive(Debug)]
pub struct Engine<R = RecordingRenderer> {
    /// Scene resources
    pub scene: Scene,
    /// Viewport rays are generated against
    pub viewport: Viewport,
    /// Draw backend
    pub renderer: R,
}

impl<R: Renderer> Engine<R> {
    /// Create an engine with an empty scene
    pub fn new(viewport: Viewport, renderer: R) -> Self {
        Self {
            scene: Scene::new(),
            viewport,
            renderer,
        }
    }

    /// Draw a subtree through a camera
    pub fn render_object(&mut self, root: ObjectId, camera: CameraId) {
        self.renderer.render_object_basic(&self.scene, root, camera);
    }
}

impl Engine<RecordingRenderer> {
    /// Engine with a [`RecordingRenderer`] and a `width` x `height` viewport
    pub fn headless(width: u32, height: u32) -> Self {
        Self::new(Viewport::new(width, height), RecordingRenderer::new())
    }
}
