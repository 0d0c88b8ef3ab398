//! Local transform of a scene object

use glam::{Mat4, Quat, Vec3};

/// Object-to-parent transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    local: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            local: Mat4::IDENTITY,
        }
    }
}

impl Transform {
    /// Identity transform
    pub fn new() -> Self {
        Self::default()
    }

    /// Local (object-to-parent) matrix
    pub fn local_matrix(&self) -> Mat4 {
        self.local
    }

    /// Replace the local matrix
    pub fn set_local_matrix(&mut self, local: Mat4) {
        self.local = local;
    }

    /// Translation part of the local matrix
    pub fn local_position(&self) -> Vec3 {
        self.local.w_axis.truncate()
    }

    /// Rotate on the parent side: `local = R * local`.
    pub fn pre_rotate(&mut self, axis: Vec3, angle: f32) {
        let rotation = Quat::from_axis_angle(axis.normalize_or_zero(), angle);
        self.local = Mat4::from_quat(rotation) * self.local;
    }

    /// Translate on the parent side: `local = T * local`.
    pub fn pre_translate(&mut self, offset: Vec3) {
        self.local = Mat4::from_translation(offset) * self.local;
    }

    /// Place the object at `origin` with its local -Z facing `target`.
    ///
    /// The result is orthonormal regardless of the length of the inputs.
    /// Degenerate input (`target == origin` or `up` parallel to the view
    /// direction) only moves the object and keeps its rotation.
    pub fn look_at(&mut self, origin: Vec3, target: Vec3, up: Vec3) {
        let forward = (target - origin).normalize_or_zero();
        let right = forward.cross(up);
        if forward == Vec3::ZERO || right.length_squared() < 1e-12 {
            self.local.w_axis = origin.extend(1.0);
            return;
        }
        self.local = Mat4::look_at_rh(origin, target, up).inverse();
    }
}
