//! Widget camera rig
//!
//! A second camera that always looks at the widget from the same distance,
//! so handles keep a constant apparent size however far the main camera is.

use glam::{Mat4, Vec3};
use tw_core::constants::camera::{DEFAULT_ASPECT_RATIO, DEFAULT_FOV_DEGREES};
use tw_core::{CameraId, ObjectId, Scene};

use crate::config::CameraRigConfig;

/// Squared distance below which the main camera counts as sitting on the widget
const COINCIDENT_EPSILON: f32 = 1e-8;

/// Camera used to draw and hit-test the widget
#[derive(Debug, Clone, Copy)]
pub struct WidgetCameraRig {
    object: ObjectId,
    camera: CameraId,
    standoff: f32,
}

impl WidgetCameraRig {
    /// Create the rig's camera object in `scene`
    pub fn new(scene: &mut Scene, config: &CameraRigConfig) -> Self {
        let object = scene.create_object("TransformWidgetCamera");
        let camera = scene.create_perspective_camera(
            object,
            DEFAULT_FOV_DEGREES.to_radians(),
            DEFAULT_ASPECT_RATIO,
            config.near,
            config.far,
        );
        Self {
            object,
            camera,
            standoff: config.standoff_distance,
        }
    }

    /// Camera id of the rig
    pub fn camera(&self) -> CameraId {
        self.camera
    }

    /// Object carrying the rig camera
    pub fn object(&self) -> ObjectId {
        self.object
    }

    /// Distance kept between the rig camera and the widget
    pub fn standoff(&self) -> f32 {
        self.standoff
    }

    /// Follow `target_camera` around the widget rooted at `widget_root`.
    ///
    /// Projection is copied from the main camera. The rig camera takes the
    /// main camera's rotation and sits `standoff` units from the widget
    /// along the widget-to-camera direction.
    pub fn update(&self, scene: &mut Scene, target_camera: CameraId, widget_root: ObjectId) {
        let main = scene.camera(target_camera).clone();
        scene.camera_mut(self.camera).copy_from(&main);

        let (_, rotation, camera_position) = scene
            .world_matrix(main.owner())
            .to_scale_rotation_translation();
        let widget_position = scene.world_position(widget_root);

        // Camera sitting on the widget: back off along its view axis instead
        let offset = camera_position - widget_position;
        let direction = if offset.length_squared() > COINCIDENT_EPSILON {
            offset.normalize()
        } else {
            (rotation * Vec3::Z).try_normalize().unwrap_or(Vec3::Z)
        };

        let position = widget_position + direction * self.standoff;
        scene.set_local_matrix(
            self.object,
            Mat4::from_rotation_translation(rotation, position),
        );
    }
}
