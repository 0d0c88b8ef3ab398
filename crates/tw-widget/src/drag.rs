//! Axis-constrained drag math
//!
//! The cursor ray is intersected with a plane containing the drag axis, then
//! the hit is projected onto the axis. The plane is only an intermediate
//! surface; resolved positions always lie on the axis line.

use glam::{Mat4, Vec3};
use tw_core::{Plane, Ray};

use crate::error::DragError;
use crate::handle::Handle;

/// State of a drag in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Handle being dragged
    pub handle: Handle,
    /// World-space drag axis (unit)
    pub axis: Vec3,
    /// Constraint plane through the widget origin
    pub plane: Plane,
    /// Axis position resolved when the drag started
    pub start_position: Vec3,
    /// Widget origin minus `start_position`
    pub offset: Vec3,
}

/// World-space drag axis and constraint plane of `handle` for a widget
/// placed by `widget_world`.
pub fn constraint(handle: Handle, widget_world: &Mat4) -> (Vec3, Plane) {
    let origin = widget_world.w_axis.truncate();
    let axis = widget_world.transform_vector3(handle.axis());
    let normal = widget_world.transform_vector3(handle.plane_normal());
    let plane = Plane::from_point_normal(origin, normal);
    (axis.normalize_or_zero(), plane)
}

/// Project the ray's plane hit onto the line through `origin` along `axis`.
pub fn resolve_axis_position(
    ray: &Ray,
    plane: &Plane,
    origin: Vec3,
    axis: Vec3,
) -> Result<Vec3, DragError> {
    let hit = ray.intersect_plane(plane).ok_or(DragError::PlaneMiss)?;
    let along = (hit.point - origin).dot(axis);
    Ok(origin + along * axis)
}
