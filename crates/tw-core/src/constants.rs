//! Global constants for tw-core

/// Below this `|dir · normal|` a ray is treated as parallel to a plane
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Determinant threshold for the ray-triangle test
pub const TRIANGLE_EPSILON: f32 = 1e-7;

/// Camera default parameters
pub mod camera {
    /// Default field of view in degrees
    pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
    /// Default aspect ratio
    pub const DEFAULT_ASPECT_RATIO: f32 = 4.0 / 3.0;
}
