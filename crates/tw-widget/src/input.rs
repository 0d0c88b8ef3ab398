//! Pointer event routing
//!
//! Translates raw pointer events from the windowing layer into widget calls.
//! Events the widget does not consume are left to the application, which
//! typically uses them to orbit the camera.

use tw_core::{Engine, Renderer};

use crate::widget::TransformWidget;

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// What happened to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Moved with no button held
    Move,
    /// Button pressed
    Down,
    /// Moved with a button held
    Drag,
    /// Button released
    Up,
}

/// Pointer event in viewport pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub button: PointerButton,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, PointerButton::Primary, x, y)
    }

    pub fn down(button: PointerButton, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, button, x, y)
    }

    pub fn drag(button: PointerButton, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Drag, button, x, y)
    }

    pub fn up(button: PointerButton, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, button, x, y)
    }

    fn new(kind: PointerEventKind, button: PointerButton, x: f32, y: f32) -> Self {
        Self { kind, button, x, y }
    }
}

/// Route `event` to `widget`. Returns true if the widget consumed it.
pub fn dispatch<R: Renderer>(
    widget: &mut TransformWidget,
    engine: &mut Engine<R>,
    event: PointerEvent,
) -> bool {
    let PointerEvent { kind, button, x, y } = event;
    match kind {
        PointerEventKind::Move => {
            widget.refresh_hover(engine, x, y);
            false
        }
        _ if button != PointerButton::Primary => false,
        PointerEventKind::Down => widget.start_action(engine, x, y),
        PointerEventKind::Drag => widget.handle_drag(engine, x, y),
        PointerEventKind::Up => widget.end_action(engine, x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use glam::Vec3;
    use tw_core::RecordingRenderer;

    fn setup() -> (Engine<RecordingRenderer>, TransformWidget) {
        let mut engine = Engine::headless(800, 600);
        let scene = &mut engine.scene;
        let camera_object = scene.create_object("MainCamera");
        scene
            .object_mut(camera_object)
            .transform
            .look_at(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO, Vec3::Y);
        let aspect = 800.0 / 600.0;
        let camera = scene.create_perspective_camera(camera_object, 0.8, aspect, 0.1, 1000.0);
        let widget = TransformWidget::new(scene, camera, WidgetConfig::default());
        (engine, widget)
    }

    fn x_handle_pixel(engine: &Engine<RecordingRenderer>, widget: &TransformWidget) -> (f32, f32) {
        let scene = &engine.scene;
        let p = scene
            .camera(widget.camera_rig().camera())
            .project(scene, engine.viewport, Vec3::new(1.2, 0.0, 0.0))
            .unwrap();
        (p.x, p.y)
    }

    #[test]
    fn test_move_is_never_consumed() {
        let (mut engine, mut widget) = setup();
        let (x, y) = x_handle_pixel(&engine, &widget);
        let event = PointerEvent::moved(x, y);
        assert!(!dispatch(&mut widget, &mut engine, event));
        assert_eq!(widget.active_handle(), Some(crate::handle::Handle::X));
    }

    #[test]
    fn test_primary_press_drag_release() {
        let (mut engine, mut widget) = setup();
        let (x, y) = x_handle_pixel(&engine, &widget);
        dispatch(&mut widget, &mut engine, PointerEvent::moved(x, y));

        let primary = PointerButton::Primary;
        for event in [
            PointerEvent::down(primary, x, y),
            PointerEvent::drag(primary, x + 40.0, y),
            PointerEvent::up(primary, x + 40.0, y),
        ] {
            assert!(dispatch(&mut widget, &mut engine, event), "{event:?}");
        }
        assert!(!widget.is_dragging());
        assert!(engine.scene.world_position(widget.root()).x > 0.5);
    }

    #[test]
    fn test_other_buttons_pass_through() {
        let (mut engine, mut widget) = setup();
        let (x, y) = x_handle_pixel(&engine, &widget);
        dispatch(&mut widget, &mut engine, PointerEvent::moved(x, y));

        let secondary = PointerButton::Secondary;
        for event in [
            PointerEvent::down(secondary, x, y),
            PointerEvent::drag(secondary, x + 40.0, y),
        ] {
            assert!(!dispatch(&mut widget, &mut engine, event), "{event:?}");
        }
        assert!(!widget.is_dragging());
    }

    #[test]
    fn test_release_without_drag_is_not_consumed() {
        let (mut engine, mut widget) = setup();
        let event = PointerEvent::up(PointerButton::Primary, 10.0, 10.0);
        assert!(!dispatch(&mut widget, &mut engine, event));
    }
}
