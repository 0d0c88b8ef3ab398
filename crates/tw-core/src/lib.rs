//! Transform Widget Core
//!
//! CPU-side scene collaborator for the transform widget.
//!
//! # Module Structure
//!
//! ```text
//! tw-core/
//! ├── geometry/        # Rays, planes, bounding boxes and intersection tests
//! ├── mesh/            # Mesh storage and primitive generators (box, arrow)
//! ├── scene/           # Object arena, transforms and hierarchy
//! ├── camera.rs        # Perspective camera, viewport and screen rays
//! ├── material.rs      # Rim-highlight material
//! ├── render.rs        # Renderer trait and headless recording renderer
//! ├── engine.rs        # Engine context passed to widget calls
//! └── constants.rs     # Shared numeric constants
//! ```

pub mod camera;
pub mod constants;
pub mod engine;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod render;
pub mod scene;

// Re-exports for convenience
pub use camera::{CameraId, ClearFlags, PerspectiveCamera, RenderBufferType, Viewport};
pub use engine::Engine;
pub use geometry::{BoundingBox, Hit, Plane, Ray};
pub use material::{Color, RimShadowMaterial};
pub use mesh::{Mesh, MeshVertex, arrow_mesh, box_mesh};
pub use render::{DrawItem, RecordedFrame, RecordingRenderer, Renderer, collect_draw_items};
pub use scene::{MaterialId, MeshId, Object3D, ObjectId, Renderable, Scene, Space, Transform};
