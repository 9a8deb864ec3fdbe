//! The main visualization plugin.
//!
//! [`ArmatureVizPlugin`] adds the orbit camera, segment meshes, pointer
//! observers, cursor feedback and the egui panel to a Bevy app.

use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};
use bevy_panorbit_camera::PanOrbitCameraPlugin;

use armature_core::ArmatureSet;
use armature_drag::CursorFeedback;
use armature_kinematics::ArmChain;

use crate::config::VizConfig;
use crate::{camera, picking, scene, sync, ui};

/// Bevy plugin for the interactive arm viewer.
///
/// Adds:
/// - Orbit camera (pan, zoom, rotate), locked while a joint drag is active
/// - Ground plane with lighting
/// - One mesh per arm segment, kept in sync with the [`ArmChain`]
/// - Mesh picking with drag and hover observers on handle segments
/// - egui side panel with joint sliders, reset and theme toggle
///
/// Expects `DefaultPlugins` plus the core, kinematics and input plugins to be
/// added already.
pub struct ArmatureVizPlugin;

impl Plugin for ArmatureVizPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<VizConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(ClearColor(config.clear_color()))
            .insert_resource(config)
            .add_plugins(MeshPickingPlugin)
            .add_plugins(EguiPlugin::default())
            .add_plugins(PanOrbitCameraPlugin)
            .add_systems(
                Startup,
                (camera::spawn_camera, camera::spawn_scene, scene::spawn_arm),
            )
            .add_observer(picking::on_drag_start)
            .add_observer(picking::on_drag)
            .add_observer(picking::on_drag_end)
            .add_observer(picking::on_over)
            .add_observer(picking::on_out)
            .add_systems(
                Update,
                (
                    sync::sync_segment_visuals.run_if(resource_changed::<ArmChain>),
                    sync::lock_orbit_while_dragging,
                    sync::apply_cursor_icon.run_if(resource_changed::<CursorFeedback>),
                    sync::apply_theme.run_if(resource_changed::<VizConfig>),
                )
                    .in_set(ArmatureSet::Present),
            )
            .add_systems(EguiPrimaryContextPass, ui::side_panel_system);
    }
}
