//! Scene graph arena
//!
//! The [`Scene`] owns every object, mesh, material and camera. Everything
//! else refers to them through copyable ids. Nothing is ever removed, so an id
//! handed out by a scene stays valid for that scene's lifetime; indexing with
//! an id from a different scene is a precondition violation and panics.

mod transform;

use glam::{Mat4, Vec3};

pub use transform::Transform;

use crate::camera::{CameraId, PerspectiveCamera};
use crate::material::RimShadowMaterial;
use crate::mesh::Mesh;

/// Index of an object in the scene arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

/// Index of a mesh in the scene arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub(crate) usize);

/// Index of a material in the scene arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub(crate) usize);

/// Coordinate space for transform operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Space {
    /// Along the object's own axes
    Local,
    /// Along world axes
    #[default]
    World,
}

/// Mesh + material pair drawn for an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderable {
    /// Geometry
    pub mesh: MeshId,
    /// Material
    pub material: MaterialId,
}

/// Node of the scene hierarchy
#[derive(Debug, Clone)]
pub struct Object3D {
    /// Display name
    pub name: String,
    /// Local transform
    pub transform: Transform,
    /// Hidden objects and their subtrees are skipped by renderers
    pub visible: bool,
    /// Optional geometry drawn for this node
    pub renderable: Option<Renderable>,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
}

impl Object3D {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            visible: true,
            renderable: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Parent object, if any
    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    /// Direct children in insertion order
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }
}

/// Owner of all scene resources
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Object3D>,
    meshes: Vec<Mesh>,
    materials: Vec<RimShadowMaterial>,
    cameras: Vec<PerspectiveCamera>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    // ============== Objects ==============

    /// Create an empty root object
    pub fn create_object(&mut self, name: impl Into<String>) -> ObjectId {
        self.objects.push(Object3D::new(name));
        ObjectId(self.objects.len() - 1)
    }

    /// Create a root object that draws `mesh` with `material`
    pub fn create_mesh_object(
        &mut self,
        name: impl Into<String>,
        mesh: MeshId,
        material: MaterialId,
    ) -> ObjectId {
        let id = self.create_object(name);
        self.object_mut(id).renderable = Some(Renderable { mesh, material });
        id
    }

    /// Get an object
    pub fn object(&self, id: ObjectId) -> &Object3D {
        &self.objects[id.0]
    }

    /// Get a mutable object
    pub fn object_mut(&mut self, id: ObjectId) -> &mut Object3D {
        &mut self.objects[id.0]
    }

    /// Attach `child` under `parent`, detaching it from any previous parent.
    ///
    /// The child's local matrix is kept as is.
    pub fn add_child(&mut self, parent: ObjectId, child: ObjectId) {
        assert!(
            parent != child && !self.is_ancestor(child, parent),
            "add_child would create a cycle"
        );

        if let Some(old) = self.objects[child.0].parent.take() {
            self.objects[old.0].children.retain(|&c| c != child);
        }
        self.objects[child.0].parent = Some(parent);
        self.objects[parent.0].children.push(child);
    }

    /// True if `ancestor` is on the parent chain of `id`
    pub fn is_ancestor(&self, ancestor: ObjectId, id: ObjectId) -> bool {
        let mut current = self.object(id).parent;
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.object(p).parent;
        }
        false
    }

    /// `root` and all of its descendants in depth-first pre-order
    pub fn descendants(&self, root: ObjectId) -> Vec<ObjectId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.object(id).children.iter().rev());
        }
        out
    }

    // ============== Transforms ==============

    /// Object-to-world matrix
    pub fn world_matrix(&self, id: ObjectId) -> Mat4 {
        let object = self.object(id);
        let local = object.transform.local_matrix();
        match object.parent {
            Some(parent) => self.world_matrix(parent) * local,
            None => local,
        }
    }

    /// World-space origin of an object
    pub fn world_position(&self, id: ObjectId) -> Vec3 {
        self.world_matrix(id).w_axis.truncate()
    }

    /// Replace an object's local matrix
    pub fn set_local_matrix(&mut self, id: ObjectId, local: Mat4) {
        self.object_mut(id).transform.set_local_matrix(local);
    }

    /// Move an object by `offset` expressed in `space`
    pub fn translate(&mut self, id: ObjectId, offset: Vec3, space: Space) {
        let local = self.object(id).transform.local_matrix();
        let new_local = match space {
            Space::Local => local * Mat4::from_translation(offset),
            Space::World => match self.object(id).parent {
                Some(parent) => {
                    let parent_world = self.world_matrix(parent);
                    parent_world.inverse() * Mat4::from_translation(offset) * parent_world * local
                }
                None => Mat4::from_translation(offset) * local,
            },
        };
        self.set_local_matrix(id, new_local);
    }

    /// Move an object so its world origin lands on `position`
    pub fn set_world_position(&mut self, id: ObjectId, position: Vec3) {
        let offset = position - self.world_position(id);
        self.translate(id, offset, Space::World);
    }

    // ============== Meshes and materials ==============

    /// Store a mesh
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    /// Get a mesh
    pub fn mesh(&self, id: MeshId) -> &Mesh {
        &self.meshes[id.0]
    }

    /// Store a material
    pub fn add_material(&mut self, material: RimShadowMaterial) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Store an independent copy of an existing material
    pub fn clone_material(&mut self, id: MaterialId) -> MaterialId {
        let copy = self.material(id).clone();
        self.add_material(copy)
    }

    /// Get a material
    pub fn material(&self, id: MaterialId) -> &RimShadowMaterial {
        &self.materials[id.0]
    }

    /// Get a mutable material
    pub fn material_mut(&mut self, id: MaterialId) -> &mut RimShadowMaterial {
        &mut self.materials[id.0]
    }

    // ============== Cameras ==============

    /// Create a perspective camera attached to `owner`
    pub fn create_perspective_camera(
        &mut self,
        owner: ObjectId,
        fov: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> CameraId {
        let camera = PerspectiveCamera::new(owner, fov, aspect, near, far);
        self.cameras.push(camera);
        CameraId(self.cameras.len() - 1)
    }

    /// Get a camera
    pub fn camera(&self, id: CameraId) -> &PerspectiveCamera {
        &self.cameras[id.0]
    }

    /// Get a mutable camera
    pub fn camera_mut(&mut self, id: CameraId) -> &mut PerspectiveCamera {
        &mut self.cameras[id.0]
    }
}
