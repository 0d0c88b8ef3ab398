//! Geometric primitives for picking and drag constraints
//!
//! - [`Ray`] - half-line with plane, triangle and mesh intersection tests
//! - [`Plane`] - `n · p + d = 0` plane
//! - [`BoundingBox`] - axis-aligned box used as a broad phase for mesh picking

mod bounds;
mod plane;
mod ray;

pub use bounds::BoundingBox;
pub use plane::Plane;
pub use ray::{Hit, Ray};
