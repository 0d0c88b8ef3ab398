//! Transform Widget
//!
//! Axis-handle translation widget for a 3D viewport: three arrows that can be
//! hovered and dragged to move a target object along one world axis.
//!
//! # Module Structure
//!
//! ```text
//! tw-widget/
//! ├── widget.rs        # Interaction state machine (hover, drag start/update/end)
//! ├── handle.rs        # X/Y/Z arrows, materials and colliders
//! ├── raycaster.rs     # Collider registry and nearest-hit queries
//! ├── camera_rig.rs    # Fixed-distance camera the widget is drawn with
//! ├── drag.rs          # Constraint planes and axis projection
//! ├── input.rs         # Pointer event routing
//! ├── config.rs        # RON configuration
//! └── error.rs         # Error types
//! ```

pub mod camera_rig;
pub mod config;
pub mod drag;
pub mod error;
pub mod handle;
pub mod input;
pub mod raycaster;
pub mod widget;

// Re-exports for convenience
pub use camera_rig::WidgetCameraRig;
pub use config::{ArrowConfig, AxisColors, CameraRigConfig, HighlightConfig, WidgetConfig};
pub use drag::DragSession;
pub use error::{ConfigError, DragError};
pub use handle::{AxisHandle, Handle, HandleSet};
pub use input::{PointerButton, PointerEvent, PointerEventKind, dispatch};
pub use raycaster::{HandleId, RaycastHit, Raycaster};
pub use widget::{InteractionState, TransformWidget};
