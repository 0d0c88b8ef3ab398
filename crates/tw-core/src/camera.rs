//! Perspective camera attached to a scene object

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::geometry::Ray;
use crate::scene::{ObjectId, Scene};

/// Index of a camera in the scene arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraId(pub(crate) usize);

/// Pixel rectangle the scene is rendered into (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Viewport anchored at the origin
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Width / height, or 1.0 for a degenerate viewport
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// True if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Render buffers a camera can clear before drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBufferType {
    /// Color attachment
    Color,
    /// Depth attachment
    Depth,
    /// Stencil attachment
    Stencil,
}

/// Per-buffer auto-clear flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearFlags {
    /// Clear the color buffer
    pub color: bool,
    /// Clear the depth buffer
    pub depth: bool,
    /// Clear the stencil buffer
    pub stencil: bool,
}

impl Default for ClearFlags {
    fn default() -> Self {
        Self {
            color: true,
            depth: true,
            stencil: true,
        }
    }
}

/// Perspective camera
///
/// The camera looks down the local -Z axis of its owner object.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    owner: ObjectId,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Width / height
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Buffers cleared before this camera draws
    pub auto_clear: ClearFlags,
}

impl PerspectiveCamera {
    /// Create a camera attached to `owner`
    pub fn new(owner: ObjectId, fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            owner,
            fov,
            aspect,
            near,
            far,
            auto_clear: ClearFlags::default(),
        }
    }

    /// Object whose transform places this camera
    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    /// Copy projection parameters (fov, aspect, near, far) from another camera
    pub fn copy_from(&mut self, other: &PerspectiveCamera) {
        self.fov = other.fov;
        self.aspect = other.aspect;
        self.near = other.near;
        self.far = other.far;
    }

    /// Enable or disable auto-clear for one buffer
    pub fn set_auto_clear(&mut self, buffer: RenderBufferType, enabled: bool) {
        match buffer {
            RenderBufferType::Color => self.auto_clear.color = enabled,
            RenderBufferType::Depth => self.auto_clear.depth = enabled,
            RenderBufferType::Stencil => self.auto_clear.stencil = enabled,
        }
    }

    /// Get view matrix
    pub fn view_matrix(&self, scene: &Scene) -> Mat4 {
        scene.world_matrix(self.owner).inverse()
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get combined view-projection matrix
    pub fn view_projection(&self, scene: &Scene) -> Mat4 {
        self.projection_matrix() * self.view_matrix(scene)
    }

    /// Convert viewport pixel coordinates to a world ray.
    ///
    /// The ray starts on the near plane. Returns `None` for an empty viewport.
    pub fn get_ray(&self, scene: &Scene, viewport: Viewport, x: f32, y: f32) -> Option<Ray> {
        if viewport.is_empty() {
            return None;
        }

        // Convert to normalized device coordinates
        let local_x = x - viewport.x as f32;
        let local_y = y - viewport.y as f32;
        let ndc_x = (2.0 * local_x / viewport.width as f32) - 1.0;
        let ndc_y = 1.0 - (2.0 * local_y / viewport.height as f32);

        let inv_view_proj = self.view_projection(scene).inverse();

        // Near and far points in NDC (depth range 0..1)
        let near = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        let direction = far - near;
        if direction.length_squared() <= f32::EPSILON {
            return None;
        }
        Some(Ray::new(near, direction))
    }

    /// Project a world point to viewport pixel coordinates.
    ///
    /// Returns `None` for points at or behind the camera plane.
    pub fn project(&self, scene: &Scene, viewport: Viewport, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection(scene) * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            viewport.x as f32 + (ndc.x + 1.0) * 0.5 * viewport.width as f32,
            viewport.y as f32 + (1.0 - ndc.y) * 0.5 * viewport.height as f32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scene_with_camera(position: Vec3, target: Vec3) -> (Scene, CameraId) {
        let mut scene = Scene::new();
        let owner = scene.create_object("camera");
        scene
            .object_mut(owner)
            .transform
            .look_at(position, target, Vec3::Y);
        let camera = scene.create_perspective_camera(
            owner,
            45.0_f32.to_radians(),
            800.0 / 600.0,
            0.1,
            1000.0,
        );
        (scene, camera)
    }

    #[test]
    fn test_center_ray_follows_view_direction() {
        let (scene, camera) = scene_with_camera(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
        let ray = scene
            .camera(camera)
            .get_ray(&scene, Viewport::new(800, 600), 400.0, 300.0)
            .unwrap();
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-5));
        assert_relative_eq!(ray.origin.z, 19.9, epsilon = 1e-3);
    }

    #[test]
    fn test_project_then_ray_passes_through_point() {
        let (scene, camera) = scene_with_camera(Vec3::new(6.0, 4.0, 12.0), Vec3::ZERO);
        let viewport = Viewport::new(800, 600);
        let cam = scene.camera(camera);
        let point = Vec3::new(1.5, -0.5, 0.25);
        let screen = cam.project(&scene, viewport, point).unwrap();
        let ray = cam.get_ray(&scene, viewport, screen.x, screen.y).unwrap();

        let to_point = point - ray.origin;
        let closest = ray.at(to_point.dot(ray.direction));
        assert!(closest.abs_diff_eq(point, 1e-3));
    }

    #[test]
    fn test_project_behind_camera() {
        let (scene, camera) = scene_with_camera(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
        let cam = scene.camera(camera);
        let viewport = Viewport::new(800, 600);
        let behind = Vec3::new(0.0, 0.0, 40.0);
        assert!(cam.project(&scene, viewport, behind).is_none());
    }

    #[test]
    fn test_viewport_offset_is_respected() {
        let (scene, camera) = scene_with_camera(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
        let viewport = Viewport {
            x: 100,
            y: 50,
            width: 800,
            height: 600,
        };
        let screen = scene
            .camera(camera)
            .project(&scene, viewport, Vec3::ZERO)
            .unwrap();
        assert!(screen.abs_diff_eq(Vec2::new(500.0, 350.0), 1e-3));
    }

    #[test]
    fn test_empty_viewport_has_no_ray() {
        let (scene, camera) = scene_with_camera(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
        let ray = scene
            .camera(camera)
            .get_ray(&scene, Viewport::new(0, 600), 0.0, 0.0);
        assert!(ray.is_none());
    }

    #[test]
    fn test_copy_from_only_copies_projection() {
        let (mut scene, camera) = scene_with_camera(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
        let other_owner = scene.create_object("other");
        let other = scene.create_perspective_camera(other_owner, 1.0, 2.0, 0.5, 50.0);
        let source = scene.camera(camera).clone();
        let target = scene.camera_mut(other);
        target.set_auto_clear(RenderBufferType::Color, false);
        target.copy_from(&source);
        assert_eq!(target.fov, source.fov);
        assert_eq!(target.far, 1000.0);
        assert_eq!(target.owner(), other_owner);
        assert!(!target.auto_clear.color);
    }
}
