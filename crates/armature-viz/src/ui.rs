//! egui side panel: one slider per joint, reset and theme controls.
//!
//! Sliders never write the pose directly. A moved slider sends
//! [`ArmInput::Slider`], so it shares the router path with drag gestures.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use armature_core::{JointId, PoseState};
use armature_input::{ArmInput, InputRouter};

use crate::config::VizConfig;

/// System that renders the egui side panel each frame.
#[allow(clippy::needless_pass_by_value)]
pub fn side_panel_system(
    mut contexts: EguiContexts,
    mut viz_config: ResMut<VizConfig>,
    pose: Res<PoseState>,
    router: Res<InputRouter>,
    mut inputs: EventWriter<ArmInput>,
) {
    if !viz_config.show_panel {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    ctx.set_visuals(if viz_config.dark_theme {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let dark_theme = viz_config.dark_theme;
    let mut actions = PanelActions::default();
    egui::SidePanel::left("arm_panel")
        .default_width(280.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Robot Arm Controls");
            ui.separator();

            joints_section(ui, &pose, &mut inputs);
            ui.separator();

            actions = controls_section(ui, dark_theme, &mut inputs);
            ui.separator();

            drag_section(ui, &router);
        });
    apply_panel_actions(actions, &mut viz_config);
}

/// Panel clicks that change [`VizConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelActions {
    pub toggle_theme: bool,
}

/// Apply `actions` to the viewer config. The resource is only marked
/// changed when something was clicked.
pub fn apply_panel_actions(actions: PanelActions, viz_config: &mut ResMut<VizConfig>) {
    if actions.toggle_theme {
        viz_config.dark_theme = !viz_config.dark_theme;
    }
}

/// Readout text for a joint value, e.g. `-45°` or `50%`.
pub fn format_value(joint: JointId, value: f32) -> String {
    format!("{value:.0}{}", joint.unit())
}

fn joints_section(ui: &mut egui::Ui, pose: &PoseState, inputs: &mut EventWriter<ArmInput>) {
    egui::Grid::new("joints_grid")
        .num_columns(3)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for joint in JointId::ALL {
                let range = joint.range();
                let mut value = pose.get(joint);

                ui.label(joint.label());
                let response = ui.add(
                    egui::Slider::new(&mut value, range.min..=range.max)
                        .show_value(false)
                        .step_by(1.0),
                );
                ui.monospace(format_value(joint, pose.get(joint)));
                ui.end_row();

                if response.changed() {
                    inputs.write(ArmInput::slider(joint, value));
                }
            }
        });
}

fn controls_section(
    ui: &mut egui::Ui,
    dark_theme: bool,
    inputs: &mut EventWriter<ArmInput>,
) -> PanelActions {
    let mut actions = PanelActions::default();
    ui.horizontal(|ui| {
        if ui.button("Reset").clicked() {
            inputs.write(ArmInput::Reset);
        }

        let label = if dark_theme { "Light theme" } else { "Dark theme" };
        actions.toggle_theme = ui.button(label).clicked();
    });
    actions
}

fn drag_section(ui: &mut egui::Ui, router: &InputRouter) {
    egui::CollapsingHeader::new("Drag")
        .default_open(false)
        .show(ui, |ui| {
            let config = router.mapper().config();
            ui.label(format!("Tracking: {}", config.tracking));
            ui.label(format!("Sensitivity: {:.2}", config.sensitivity));
            match router.session() {
                Some(session) => ui.label(format!("Dragging {}", session.handle())),
                None => ui.label("Drag the red joints to move them."),
            };
        });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readouts_use_joint_units() {
        assert_eq!(format_value(JointId::Shoulder, -45.0), "-45°");
        assert_eq!(format_value(JointId::Elbow, 44.6), "45°");
        assert_eq!(format_value(JointId::Gripper, 50.0), "50%");
    }

    #[derive(Resource, Default)]
    struct NextActions(PanelActions);

    #[allow(clippy::needless_pass_by_value)]
    fn apply_next(next: Res<NextActions>, mut viz_config: ResMut<VizConfig>) {
        apply_panel_actions(next.0, &mut viz_config);
    }

    #[test]
    fn idle_panel_leaves_config_unchanged() {
        let mut app = App::new();
        app.init_resource::<VizConfig>();
        app.init_resource::<NextActions>();
        app.add_systems(Update, apply_next);
        app.update();
        let before = app.world().resource_ref::<VizConfig>().last_changed();
        let dark = app.world().resource::<VizConfig>().dark_theme;

        app.update();
        assert_eq!(app.world().resource_ref::<VizConfig>().last_changed(), before);

        app.insert_resource(NextActions(PanelActions { toggle_theme: true }));
        app.update();
        let config = app.world().resource_ref::<VizConfig>();
        assert_ne!(config.last_changed(), before);
        assert_eq!(config.dark_theme, !dark);
    }
}
