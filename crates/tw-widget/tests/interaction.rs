//! End-to-end interaction tests against a headless engine

use approx::assert_relative_eq;
use glam::{Mat4, Vec3};
use tw_core::{CameraId, Engine, ObjectId, RecordingRenderer, RimShadowMaterial, Space, box_mesh};
use tw_widget::{DragError, Handle, InteractionState, TransformWidget, WidgetConfig};

struct Fixture {
    engine: Engine<RecordingRenderer>,
    camera: CameraId,
    target: ObjectId,
    widget: TransformWidget,
}

impl Fixture {
    fn new(camera_position: Vec3) -> Self {
        let mut engine = Engine::headless(800, 600);
        let scene = &mut engine.scene;

        let camera_object = scene.create_object("MainCamera");
        scene
            .object_mut(camera_object)
            .transform
            .look_at(camera_position, Vec3::ZERO, Vec3::Y);
        let camera = scene.create_perspective_camera(
            camera_object,
            45.0_f32.to_radians(),
            800.0 / 600.0,
            0.1,
            1000.0,
        );

        let mesh = scene.add_mesh(box_mesh(1.0, 1.0, 1.0, [0.7, 0.7, 0.7, 1.0]));
        let material = scene.add_material(RimShadowMaterial::new());
        let target = scene.create_mesh_object("Cube", mesh, material);

        let mut widget = TransformWidget::new(scene, camera, WidgetConfig::default());
        widget.set_target_object(scene, Some(target));

        Self {
            engine,
            camera,
            target,
            widget,
        }
    }

    /// Pixel of a world point as seen by the widget camera
    fn widget_pixel(&self, point: Vec3) -> (f32, f32) {
        let scene = &self.engine.scene;
        let p = scene
            .camera(self.widget.camera_rig().camera())
            .project(scene, self.engine.viewport, point)
            .unwrap();
        (p.x, p.y)
    }

    /// Pixel of a world point as seen by the main camera
    fn main_pixel(&self, point: Vec3) -> (f32, f32) {
        let scene = &self.engine.scene;
        let p = scene
            .camera(self.camera)
            .project(scene, self.engine.viewport, point)
            .unwrap();
        (p.x, p.y)
    }

    /// Pixel over the middle of a handle's arrow
    fn handle_pixel(&self, handle: Handle) -> (f32, f32) {
        let root = self.engine.scene.world_matrix(self.widget.root());
        self.widget_pixel(root.transform_point3(handle.axis() * 1.2))
    }

    fn hover(&mut self, (x, y): (f32, f32)) -> Option<Handle> {
        self.widget.refresh_hover(&mut self.engine, x, y)
    }

    fn drag_to(&mut self, (x, y): (f32, f32)) -> Option<Vec3> {
        self.widget.update_action(&mut self.engine, x, y)
    }

    /// Move the target under a new parent placed by `parent_pose`
    fn parent_target(&mut self, parent_pose: Mat4, local: Mat4) {
        let scene = &mut self.engine.scene;
        let parent = scene.create_object("Parent");
        scene.set_local_matrix(parent, parent_pose);
        scene.add_child(parent, self.target);
        scene.set_local_matrix(self.target, local);
        self.widget.set_target_object(scene, Some(self.target));
        self.widget.update_camera(scene);
    }

    fn target_position(&self) -> Vec3 {
        self.engine.scene.world_position(self.target)
    }
}

#[test]
fn test_hover_highlights_exactly_one_handle() {
    let mut f = Fixture::new(Vec3::new(6.0, 8.0, 12.0));
    let highlight = f.widget.config().highlight.color;

    for handle in Handle::ALL {
        let pixel = f.handle_pixel(handle);
        assert_eq!(f.hover(pixel), Some(handle));
        for h in f.widget.handles().iter() {
            let color = f.widget.handles().color_of(&f.engine.scene, h.handle);
            if h.handle == handle {
                assert_eq!(color, highlight);
            } else {
                assert_eq!(color, h.base_color);
            }
        }
    }

    assert_eq!(f.hover((2.0, 2.0)), None);
    for h in f.widget.handles().iter() {
        let color = f.widget.handles().color_of(&f.engine.scene, h.handle);
        assert_eq!(color, h.base_color);
    }
}

#[test]
fn test_start_fails_without_active_handle() {
    let mut f = Fixture::new(Vec3::new(0.0, 0.0, 20.0));
    assert_eq!(f.hover((2.0, 2.0)), None);
    assert_eq!(
        f.widget.try_start_action(&mut f.engine, 2.0, 2.0),
        Err(DragError::NoActiveHandle)
    );
    assert!(!f.widget.start_action(&mut f.engine, 400.0, 300.0));
    assert_eq!(*f.widget.state(), InteractionState::Idle);
}

#[test]
fn test_drag_translation_is_colinear_with_axis() {
    for handle in Handle::ALL {
        let mut f = Fixture::new(Vec3::new(6.0, 8.0, 12.0));
        let pixel = f.handle_pixel(handle);
        assert_eq!(f.hover(pixel), Some(handle));
        assert!(f.widget.start_action(&mut f.engine, pixel.0, pixel.1));

        for (dx, dy) in [(25.0, 0.0), (0.0, -30.0), (-12.0, 18.0)] {
            let before = f.target_position();
            f.drag_to((pixel.0 + dx, pixel.1 + dy)).unwrap();
            let moved = f.target_position() - before;
            let perpendicular = moved - handle.axis() * moved.dot(handle.axis());
            assert!(perpendicular.length() < 1e-3, "{handle:?}: {moved:?}");
        }

        // Widget and target stay together
        let widget_position = f.engine.scene.world_position(f.widget.root());
        assert!(widget_position.abs_diff_eq(f.target_position(), 1e-4));
    }
}

#[test]
fn test_drag_rotated_target_under_transformed_parent() {
    let parent_origin = Vec3::new(1.0, -0.5, 2.0);
    let parent_pose = Mat4::from_translation(parent_origin) * Mat4::from_rotation_y(0.3);

    for handle in Handle::ALL {
        let mut f = Fixture::new(Vec3::new(6.0, 8.0, 12.0));
        f.parent_target(parent_pose, Mat4::from_rotation_z(0.4));
        assert!(f.target_position().abs_diff_eq(parent_origin, 1e-6));

        // The widget takes the target's rotation, so the drag axis is tilted
        let root = f.engine.scene.world_matrix(f.widget.root());
        let axis = root.transform_vector3(handle.axis()).normalize();
        assert!(axis.dot(handle.axis()) < 0.99, "{handle:?}");

        let pixel = f.handle_pixel(handle);
        assert_eq!(f.hover(pixel), Some(handle));
        assert!(f.widget.start_action(&mut f.engine, pixel.0, pixel.1));

        let start = f.target_position();
        let mut farthest = 0.0_f32;
        for (dx, dy) in [(25.0, 0.0), (0.0, -30.0), (-12.0, 18.0)] {
            f.drag_to((pixel.0 + dx, pixel.1 + dy)).unwrap();
            let moved = f.target_position() - start;
            let off_axis = moved - axis * moved.dot(axis);
            assert!(off_axis.length() < 1e-3, "{handle:?}: {moved:?}");
            farthest = farthest.max(moved.length());

            let widget_position = f.engine.scene.world_position(f.widget.root());
            assert!(widget_position.abs_diff_eq(f.target_position(), 1e-4));
        }
        assert!(farthest > 0.1, "{handle:?} barely moved");
    }
}

#[test]
fn test_end_then_hover_matches_fresh_hover() {
    let mut f = Fixture::new(Vec3::new(0.0, 0.0, 20.0));
    let pixel = f.handle_pixel(Handle::X);
    f.hover(pixel);
    assert!(f.widget.start_action(&mut f.engine, pixel.0, pixel.1));
    let release = (pixel.0 + 60.0, pixel.1);
    assert!(f.widget.handle_drag(&mut f.engine, release.0, release.1));

    assert!(f.widget.end_action(&mut f.engine, release.0, release.1));
    let after_end = *f.widget.state();
    let colors_after_end: Vec<_> = Handle::ALL
        .iter()
        .map(|&h| f.widget.handles().color_of(&f.engine.scene, h))
        .collect();
    let position_after_end = f.target_position();

    f.hover(release);
    assert_eq!(*f.widget.state(), after_end);
    assert!(!f.widget.is_dragging());
    let colors_after_hover: Vec<_> = Handle::ALL
        .iter()
        .map(|&h| f.widget.handles().color_of(&f.engine.scene, h))
        .collect();
    assert_eq!(colors_after_end, colors_after_hover);

    // No residual drag
    assert_eq!(f.widget.update_action(&mut f.engine, 10.0, 10.0), None);
    assert!(!f.widget.handle_drag(&mut f.engine, 10.0, 10.0));
    assert_eq!(f.target_position(), position_after_end);
}

#[test]
fn test_parallel_constraint_plane_fails_start() {
    let mut f = Fixture::new(Vec3::new(0.0, 0.0, 20.0));
    // Looking straight down -Z onto the Z arrow's tip
    let pixel = (401.0, 300.0);
    assert_eq!(f.hover(pixel), Some(Handle::Z));

    assert_eq!(
        f.widget.try_start_action(&mut f.engine, pixel.0, pixel.1),
        Err(DragError::PlaneMiss)
    );
    assert!(!f.widget.start_action(&mut f.engine, pixel.0, pixel.1));
    assert_eq!(*f.widget.state(), InteractionState::Hover(Handle::Z));
    assert!(f.widget.state().drag_session().is_none());

    assert_eq!(f.widget.update_action(&mut f.engine, 420.0, 300.0), None);
    assert_eq!(f.target_position(), Vec3::ZERO);
}

#[test]
fn test_camera_rig_keeps_standoff() {
    for camera_position in [
        Vec3::new(0.0, 0.0, 20.0),
        Vec3::new(-150.0, 40.0, 90.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.0, -3.0, -250.0),
    ] {
        let mut f = Fixture::new(camera_position);
        let offset = Vec3::new(3.0, -2.0, 1.0);
        f.engine.scene.translate(f.target, offset, Space::World);
        f.widget.update(&mut f.engine.scene);
        f.widget.update_camera(&mut f.engine.scene);

        let rig = f.widget.camera_rig();
        let rig_position = f.engine.scene.world_position(rig.object());
        let widget_position = f.engine.scene.world_position(f.widget.root());
        let distance = rig_position.distance(widget_position);
        assert_relative_eq!(distance, rig.standoff(), epsilon = 1e-3);
    }
}

#[test]
fn test_drag_x_handle_moves_target_five_units() {
    let mut f = Fixture::new(Vec3::new(0.0, 0.0, 20.0));
    let pixel = f.handle_pixel(Handle::X);
    assert_eq!(f.hover(pixel), Some(Handle::X));
    assert!(f.widget.start_action(&mut f.engine, pixel.0, pixel.1));

    let start = f.widget.state().drag_session().unwrap().start_position;
    let (x, y) = f.main_pixel(start + Vec3::new(5.0, 0.0, 0.0));
    assert!(f.widget.handle_drag(&mut f.engine, x, y));
    f.widget.end_action(&mut f.engine, x, y);

    let position = f.target_position();
    assert_relative_eq!(position.x, 5.0, epsilon = 1e-3);
    assert_relative_eq!(position.y, 0.0, epsilon = 1e-4);
    assert_relative_eq!(position.z, 0.0, epsilon = 1e-4);
}

#[test]
fn test_detached_widget_moves_alone() {
    let mut f = Fixture::new(Vec3::new(0.0, 0.0, 20.0));
    f.widget.set_target_object(&mut f.engine.scene, None);
    let pixel = f.handle_pixel(Handle::Y);
    assert_eq!(f.hover(pixel), Some(Handle::Y));
    assert!(f.widget.start_action(&mut f.engine, pixel.0, pixel.1));
    f.drag_to((pixel.0, pixel.1 - 50.0)).unwrap();

    assert!(f.engine.scene.world_position(f.widget.root()).y > 1.0);
    assert_eq!(f.target_position(), Vec3::ZERO);
}

#[test]
fn test_render_records_highlight_state() {
    let mut f = Fixture::new(Vec3::new(6.0, 4.0, 12.0));
    let pixel = f.handle_pixel(Handle::Y);
    f.hover(pixel);
    f.widget.render(&mut f.engine);

    let frame = f.engine.renderer.last_frame().unwrap();
    let highlighted: Vec<_> = frame
        .items
        .iter()
        .filter(|item| item.material.highlight_color == f.widget.config().highlight.color)
        .map(|item| item.object)
        .collect();
    assert_eq!(highlighted, vec![f.widget.handles().get(Handle::Y).object]);
}
