//! Bevy test app builders with various plugin combinations.

use bevy::prelude::*;

use armature_core::{ArmConfig, ArmatureCorePlugin};
use armature_input::{ArmInput, ArmatureInputPlugin};
use armature_kinematics::ArmatureKinematicsPlugin;

/// Create a minimal test app with only the core plugin.
///
/// Provides `ArmatureSet` ordering, `ArmConfig` and `PoseState`, but no
/// chain or input routing.
pub fn minimal_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(ArmatureCorePlugin);
    app.finish();
    app.cleanup();
    app
}

/// Create a headless app with core, kinematics and input plugins using
/// `config`.
///
/// One update has already run, so the chain reflects the initial pose.
pub fn arm_test_app(config: ArmConfig) -> App {
    let mut app = App::new();
    app.insert_resource(config);
    app.add_plugins((ArmatureCorePlugin, ArmatureKinematicsPlugin, ArmatureInputPlugin));
    app.finish();
    app.cleanup();
    app.update();
    app
}

/// [`arm_test_app`] with the default configuration.
pub fn default_arm_app() -> App {
    arm_test_app(ArmConfig::default())
}

/// Queue `inputs` in order and run one update.
pub fn send_inputs(app: &mut App, inputs: impl IntoIterator<Item = ArmInput>) {
    for input in inputs {
        app.world_mut().send_event(input);
    }
    app.update();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use armature_core::{JointId, PoseState};
    use armature_kinematics::ArmChain;

    #[test]
    fn minimal_app_builds() {
        let app = minimal_test_app();
        assert!(app.world().get_resource::<PoseState>().is_some());
        assert!(app.world().get_resource::<ArmChain>().is_none());
    }

    #[test]
    fn arm_app_can_update() {
        let mut app = default_arm_app();
        send_inputs(&mut app, [ArmInput::slider(JointId::Base, 45.0)]);
        assert!((app.world().resource::<ArmChain>().pose().base() - 45.0).abs() < f32::EPSILON);
    }
}
