//! Axis handles
//!
//! Three arrows (X, Y, Z) parented to the widget root. Each arrow owns its own
//! rim-highlight material so it can be recolored independently, and is paired
//! with a box collider registered in the widget raycaster.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use tw_core::{Color, MaterialId, ObjectId, RimShadowMaterial, Scene, arrow_mesh, box_mesh};

use crate::config::WidgetConfig;
use crate::raycaster::{HandleId, Raycaster};

/// Translation handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    X,
    Y,
    Z,
}

impl Handle {
    /// All handles in registration order
    pub const ALL: [Handle; 3] = [Handle::X, Handle::Y, Handle::Z];

    /// Unit translation axis in the widget frame
    pub fn axis(self) -> Vec3 {
        match self {
            Handle::X => Vec3::X,
            Handle::Y => Vec3::Y,
            Handle::Z => Vec3::Z,
        }
    }

    /// Normal of the drag constraint plane in the widget frame.
    ///
    /// X and Y drag on the widget's XY plane; Z drags on its XZ plane.
    pub fn plane_normal(self) -> Vec3 {
        match self {
            Handle::X | Handle::Y => Vec3::Z,
            Handle::Z => Vec3::Y,
        }
    }

    /// Scene object name
    pub fn name(self) -> &'static str {
        match self {
            Handle::X => "XArrow",
            Handle::Y => "YArrow",
            Handle::Z => "ZArrow",
        }
    }
}

/// Scene resources of one handle
#[derive(Debug, Clone, Copy)]
pub struct AxisHandle {
    /// Which handle this is
    pub handle: Handle,
    /// Identifier assigned by the raycaster
    pub id: HandleId,
    /// Arrow object, child of the widget root
    pub object: ObjectId,
    /// Material owned by this handle alone
    pub material: MaterialId,
    /// Color shown when not highlighted
    pub base_color: Color,
}

/// The three handles of a widget
#[derive(Debug, Clone)]
pub struct HandleSet {
    handles: [AxisHandle; 3],
    highlight_color: Color,
}

impl HandleSet {
    /// Create the arrows under `root` and register their colliders.
    pub fn build(
        scene: &mut Scene,
        root: ObjectId,
        raycaster: &mut Raycaster<Handle>,
        config: &WidgetConfig,
    ) -> Self {
        let arrow = &config.arrow;
        let highlight = &config.highlight;

        let mut template = RimShadowMaterial::new();
        template.set_highlight_lower_bound(highlight.lower_bound);
        template.set_highlight_scale(highlight.scale);
        template.set_depth_test_enabled(highlight.depth_test);
        let template = scene.add_material(template);

        let shape = arrow_mesh(
            arrow.base_length,
            arrow.base_radius,
            arrow.cone_length,
            arrow.cone_radius,
            arrow.segments,
            highlight.color,
        );
        let arrow_mesh = scene.add_mesh(shape);
        let total_length = arrow.total_length();
        let width = arrow.collider_width;
        let collider = scene.add_mesh(box_mesh(width, total_length, width, highlight.color));
        let half = total_length * 0.5;

        let handles = Handle::ALL.map(|handle| {
            // The first handle keeps the template, the others get typed copies
            let material = match handle {
                Handle::X => template,
                Handle::Y | Handle::Z => scene.clone_material(template),
            };
            let base_color = match handle {
                Handle::X => config.colors.x,
                Handle::Y => config.colors.y,
                Handle::Z => config.colors.z,
            };
            scene.material_mut(material).set_highlight_color(base_color);

            let object = scene.create_mesh_object(handle.name(), arrow_mesh, material);
            let transform = &mut scene.object_mut(object).transform;
            // Arrows are built along +Y and centred, so rotate then push out
            match handle {
                Handle::X => transform.pre_rotate(Vec3::Z, -FRAC_PI_2),
                Handle::Y => {}
                Handle::Z => transform.pre_rotate(Vec3::X, FRAC_PI_2),
            }
            transform.pre_translate(handle.axis() * half);
            scene.add_child(root, object);

            let id = raycaster.register(handle, object, collider);
            AxisHandle {
                handle,
                id,
                object,
                material,
                base_color,
            }
        });

        Self {
            handles,
            highlight_color: highlight.color,
        }
    }

    /// Resources of one handle
    pub fn get(&self, handle: Handle) -> &AxisHandle {
        match handle {
            Handle::X => &self.handles[0],
            Handle::Y => &self.handles[1],
            Handle::Z => &self.handles[2],
        }
    }

    /// All handles in registration order
    pub fn iter(&self) -> impl Iterator<Item = &AxisHandle> {
        self.handles.iter()
    }

    /// Color used for the hovered or dragged handle
    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    /// Restore every handle's base color
    pub fn reset_colors(&self, scene: &mut Scene) {
        for h in &self.handles {
            let material = scene.material_mut(h.material);
            material.set_highlight_color(h.base_color);
        }
    }

    /// Highlight `handle` and restore the others
    pub fn highlight(&self, scene: &mut Scene, handle: Handle) {
        self.reset_colors(scene);
        scene
            .material_mut(self.get(handle).material)
            .set_highlight_color(self.highlight_color);
    }

    /// Current color of a handle's material
    pub fn color_of(&self, scene: &Scene, handle: Handle) -> Color {
        scene.material(self.get(handle).material).highlight_color
    }
}
