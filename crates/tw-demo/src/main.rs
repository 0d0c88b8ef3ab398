//! Transform widget demo
//!
//! Builds a headless scene with a cube and a widget attached to it, then
//! replays a scripted pointer sequence that drags the cube along X.
//!
//! Usage: `tw-demo [config.ron]`

use glam::Vec3;
use tw_core::{CameraId, Engine, RecordingRenderer, RimShadowMaterial, box_mesh};
use tw_widget::{Handle, PointerButton, PointerEvent, TransformWidget, WidgetConfig, dispatch};

/// Distance the scripted drag moves the cube
const DRAG_DISTANCE: f32 = 3.0;

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tw_demo=debug,tw_widget=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting transform widget demo");

    let config = match std::env::args().nth(1) {
        Some(path) => match WidgetConfig::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded widget config from {}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to load widget config: {}", e);
                std::process::exit(1);
            }
        },
        None => WidgetConfig::default(),
    };

    let mut engine = Engine::headless(800, 600);
    let scene = &mut engine.scene;

    let camera_object = scene.create_object("MainCamera");
    scene
        .object_mut(camera_object)
        .transform
        .look_at(Vec3::new(6.0, 4.0, 12.0), Vec3::ZERO, Vec3::Y);
    let camera = scene.create_perspective_camera(
        camera_object,
        45.0_f32.to_radians(),
        engine.viewport.aspect_ratio(),
        0.1,
        1000.0,
    );

    let mesh = scene.add_mesh(box_mesh(1.0, 1.0, 1.0, [0.8, 0.8, 0.8, 1.0]));
    let material = scene.add_material(RimShadowMaterial::new());
    let cube = scene.create_mesh_object("Cube", mesh, material);

    let mut widget = TransformWidget::new(scene, camera, config);
    widget.set_target_object(scene, Some(cube));

    if let Err(e) = run_script(&mut engine, &mut widget, camera) {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }

    let position = engine.scene.world_position(cube);
    tracing::info!("Final cube position: {:?}", position);
}

/// Hover the X arrow, press, drag the cube `DRAG_DISTANCE` along X, release.
fn run_script(
    engine: &mut Engine<RecordingRenderer>,
    widget: &mut TransformWidget,
    camera: CameraId,
) -> Result<(), String> {
    widget.update_camera(&mut engine.scene);

    let half_length = widget.config().arrow.total_length() * 0.5;
    let handle_center = engine
        .scene
        .world_matrix(widget.root())
        .transform_point3(Handle::X.axis() * half_length);
    let press = engine
        .scene
        .camera(widget.camera_rig().camera())
        .project(&engine.scene, engine.viewport, handle_center)
        .ok_or("X arrow is behind the widget camera")?;
    tracing::info!("X arrow at pixel ({:.1}, {:.1})", press.x, press.y);

    dispatch(widget, engine, PointerEvent::moved(press.x, press.y));
    let hovered = widget.active_handle();
    if hovered != Some(Handle::X) {
        return Err(format!("expected to hover X, got {:?}", hovered));
    }

    let primary = PointerButton::Primary;
    let down = PointerEvent::down(primary, press.x, press.y);
    if !dispatch(widget, engine, down) {
        return Err("drag did not start".to_string());
    }

    let start = widget
        .state()
        .drag_session()
        .map(|session| session.start_position)
        .ok_or("no drag session after press")?;
    let goal = start + Vec3::X * DRAG_DISTANCE;
    let release = engine
        .scene
        .camera(camera)
        .project(&engine.scene, engine.viewport, goal)
        .ok_or("drag goal is behind the main camera")?;

    // Move in a few steps like a real pointer would
    const STEPS: u32 = 5;
    for step in 1..=STEPS {
        let t = step as f32 / STEPS as f32;
        let x = press.x + (release.x - press.x) * t;
        let y = press.y + (release.y - press.y) * t;
        dispatch(widget, engine, PointerEvent::drag(primary, x, y));
        widget.render(engine);
    }

    let up = PointerEvent::up(primary, release.x, release.y);
    dispatch(widget, engine, up);

    let frames = engine.renderer.frames().len();
    tracing::info!("Rendered {} widget frames", frames);
    Ok(())
}
