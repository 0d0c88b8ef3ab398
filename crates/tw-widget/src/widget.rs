//! Transform widget
//!
//! Owns the handle set, the raycaster and the camera rig, and runs the
//! interaction state machine:
//!
//! ```text
//! Idle ──hover hit──▶ Hover(handle) ──start_action──▶ Dragging(session)
//!  ▲                     │                                 │
//!  └──────hover miss─────┘◀──────────end_action────────────┘
//! ```
//!
//! The widget never owns scene resources. It keeps ids into the engine's
//! scene and receives the engine as an argument on every call.

use glam::Vec3;
use tracing::{debug, info, trace};
use tw_core::{CameraId, Engine, ObjectId, Ray, RenderBufferType, Renderer, Scene, Space};

use crate::camera_rig::WidgetCameraRig;
use crate::config::WidgetConfig;
use crate::drag::{self, DragSession};
use crate::error::DragError;
use crate::handle::{Handle, HandleSet};
use crate::raycaster::Raycaster;

/// Interaction state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No handle under the cursor
    #[default]
    Idle,
    /// A handle is under the cursor
    Hover(Handle),
    /// A handle is being dragged
    Dragging(DragSession),
}

impl InteractionState {
    /// Hovered or dragged handle
    pub fn active_handle(&self) -> Option<Handle> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Hover(handle) => Some(*handle),
            InteractionState::Dragging(session) => Some(session.handle),
        }
    }

    /// True while a drag session is live
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging(_))
    }

    /// Live drag session, if any
    pub fn drag_session(&self) -> Option<&DragSession> {
        match self {
            InteractionState::Dragging(session) => Some(session),
            _ => None,
        }
    }
}

/// Axis translation widget
#[derive(Debug)]
pub struct TransformWidget {
    config: WidgetConfig,
    root: ObjectId,
    target_camera: CameraId,
    target_object: Option<ObjectId>,
    handles: HandleSet,
    raycaster: Raycaster<Handle>,
    rig: WidgetCameraRig,
    state: InteractionState,
}

impl TransformWidget {
    /// Build the widget in `scene`, following `target_camera`.
    pub fn new(scene: &mut Scene, target_camera: CameraId, config: WidgetConfig) -> Self {
        let root = scene.create_object("TransformWidget");
        let mut raycaster = Raycaster::new();
        let handles = HandleSet::build(scene, root, &mut raycaster, &config);
        let rig = WidgetCameraRig::new(scene, &config.camera);

        let widget = Self {
            config,
            root,
            target_camera,
            target_object: None,
            handles,
            raycaster,
            rig,
            state: InteractionState::Idle,
        };
        widget.update_camera(scene);

        let standoff = widget.rig.standoff();
        info!("Created transform widget (standoff {})", standoff);
        widget
    }

    // ============== Accessors ==============

    /// Root object of the handle assembly
    pub fn root(&self) -> ObjectId {
        self.root
    }

    /// Main scene camera the widget follows
    pub fn target_camera(&self) -> CameraId {
        self.target_camera
    }

    /// Object moved by drags
    pub fn target_object(&self) -> Option<ObjectId> {
        self.target_object
    }

    /// Configuration the widget was built with
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Handle resources
    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    /// Hit-test registry
    pub fn raycaster(&self) -> &Raycaster<Handle> {
        &self.raycaster
    }

    /// Widget camera rig
    pub fn camera_rig(&self) -> &WidgetCameraRig {
        &self.rig
    }

    /// Current interaction state
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Hovered or dragged handle
    pub fn active_handle(&self) -> Option<Handle> {
        self.state.active_handle()
    }

    /// True while a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    // ============== Placement ==============

    /// Attach the widget to `target`, or detach it with `None`.
    ///
    /// A drag in progress is cancelled.
    pub fn set_target_object(&mut self, scene: &mut Scene, target: Option<ObjectId>) {
        if self.state.is_dragging() {
            debug!("Target changed during drag, cancelling drag");
            self.state = InteractionState::Idle;
            self.handles.reset_colors(scene);
        }
        self.target_object = target;
        match target {
            Some(id) => info!("Transform widget attached to '{}'", scene.object(id).name),
            None => info!("Transform widget detached"),
        }
        self.update(scene);
    }

    /// Move the widget onto the target's origin and orientation.
    ///
    /// The target's scale is not carried over. Without a target the widget
    /// keeps its pose.
    pub fn update(&self, scene: &mut Scene) {
        let Some(target) = self.target_object else {
            return;
        };
        let world = scene.world_matrix(target);
        let position = world.w_axis.truncate();
        let forward = world.transform_vector3(Vec3::NEG_Z);
        let up = world.transform_vector3(Vec3::Y);

        scene
            .object_mut(self.root)
            .transform
            .look_at(position, position + forward, up);
    }

    /// Sync the widget camera with the main camera
    pub fn update_camera(&self, scene: &mut Scene) {
        self.rig.update(scene, self.target_camera, self.root);
    }

    /// Draw the handles through the widget camera over the existing image.
    ///
    /// Color is kept; depth and stencil are cleared so handles are never
    /// hidden by scene geometry.
    pub fn render<R: Renderer>(&self, engine: &mut Engine<R>) {
        let camera = engine.scene.camera_mut(self.rig.camera());
        camera.set_auto_clear(RenderBufferType::Color, false);
        camera.set_auto_clear(RenderBufferType::Depth, true);
        camera.set_auto_clear(RenderBufferType::Stencil, true);
        engine.render_object(self.root, self.rig.camera());
    }

    // ============== Interaction ==============

    /// Hit-test the handles at `(x, y)` and update the highlight.
    ///
    /// Safe to call every frame. While dragging only the camera is synced.
    pub fn refresh_hover<R: Renderer>(
        &mut self,
        engine: &mut Engine<R>,
        x: f32,
        y: f32,
    ) -> Option<Handle> {
        self.update_camera(&mut engine.scene);
        if self.state.is_dragging() {
            return self.state.active_handle();
        }

        match self.pick(engine, x, y) {
            Some(handle) => {
                if self.state.active_handle() != Some(handle) {
                    debug!("Hovering {}", handle.name());
                    self.handles.highlight(&mut engine.scene, handle);
                    self.state = InteractionState::Hover(handle);
                }
            }
            None => {
                if let Some(previous) = self.state.active_handle() {
                    debug!("Left {}", previous.name());
                }
                self.state = InteractionState::Idle;
                self.handles.reset_colors(&mut engine.scene);
            }
        }
        self.state.active_handle()
    }

    /// Begin dragging the hovered handle.
    ///
    /// Succeeds immediately when a drag is already in progress.
    pub fn try_start_action<R: Renderer>(
        &mut self,
        engine: &mut Engine<R>,
        x: f32,
        y: f32,
    ) -> Result<(), DragError> {
        let handle = match self.state {
            InteractionState::Dragging(_) => return Ok(()),
            InteractionState::Hover(handle) => handle,
            InteractionState::Idle => return Err(DragError::NoActiveHandle),
        };

        let widget_world = engine.scene.world_matrix(self.root);
        let widget_position = widget_world.w_axis.truncate();
        let (axis, plane) = drag::constraint(handle, &widget_world);

        let ray = self.target_ray(engine, x, y).ok_or(DragError::NoRay)?;
        let start_position = drag::resolve_axis_position(&ray, &plane, widget_position, axis)?;

        let session = DragSession {
            handle,
            axis,
            plane,
            start_position,
            offset: widget_position - start_position,
        };
        let name = handle.name();
        debug!("Started drag on {} at {:?}", name, start_position);
        self.state = InteractionState::Dragging(session);
        Ok(())
    }

    /// Begin dragging the hovered handle, reporting success.
    pub fn start_action<R: Renderer>(&mut self, engine: &mut Engine<R>, x: f32, y: f32) -> bool {
        match self.try_start_action(engine, x, y) {
            Ok(()) => true,
            Err(e) => {
                debug!("Cannot start drag: {}", e);
                false
            }
        }
    }

    /// Move the widget and its target along the drag axis.
    ///
    /// Returns the world translation applied, or `None` when no drag is in
    /// progress or the cursor ray cannot be resolved this frame.
    pub fn update_action<R: Renderer>(
        &mut self,
        engine: &mut Engine<R>,
        x: f32,
        y: f32,
    ) -> Option<Vec3> {
        let InteractionState::Dragging(session) = self.state else {
            return None;
        };

        let Some(ray) = self.target_ray(engine, x, y) else {
            debug!("Drag update skipped: {}", DragError::NoRay);
            return None;
        };
        let target_position = match drag::resolve_axis_position(
            &ray,
            &session.plane,
            session.start_position,
            session.axis,
        ) {
            Ok(position) => position,
            Err(e) => {
                debug!("Drag update skipped: {}", e);
                return None;
            }
        };

        let scene = &mut engine.scene;
        let widget_position = scene.world_position(self.root);
        let translation = target_position - widget_position + session.offset;
        scene.translate(self.root, translation, Space::World);
        if let Some(target) = self.target_object {
            scene.translate(target, translation, Space::World);
        }
        trace!("Drag {} by {:?}", session.handle.name(), translation);
        Some(translation)
    }

    /// Finish the drag and re-evaluate hover at `(x, y)`.
    ///
    /// Returns true if a drag was in progress.
    pub fn end_action<R: Renderer>(&mut self, engine: &mut Engine<R>, x: f32, y: f32) -> bool {
        let was_dragging = self.state.is_dragging();
        if let Some(session) = self.state.drag_session() {
            debug!("Ended drag on {}", session.handle.name());
        }
        self.state = InteractionState::Idle;
        self.refresh_hover(engine, x, y);
        was_dragging
    }

    /// Forward a pointer drag to the widget.
    ///
    /// Returns false when no drag is in progress, so the caller can use the
    /// gesture for something else (camera orbit).
    pub fn handle_drag<R: Renderer>(&mut self, engine: &mut Engine<R>, x: f32, y: f32) -> bool {
        if !self.state.is_dragging() {
            return false;
        }
        self.update_action(engine, x, y);
        true
    }

    // ============== Rays ==============

    fn pick<R: Renderer>(&self, engine: &Engine<R>, x: f32, y: f32) -> Option<Handle> {
        let scene = &engine.scene;
        let camera = scene.camera(self.rig.camera());
        let ray = camera.get_ray(scene, engine.viewport, x, y)?;
        self.raycaster.cast_ray(scene, &ray).map(|hit| hit.key)
    }

    fn target_ray<R: Renderer>(&self, engine: &Engine<R>, x: f32, y: f32) -> Option<Ray> {
        let camera = engine.scene.camera(self.target_camera);
        camera.get_ray(&engine.scene, engine.viewport, x, y)
    }
}
