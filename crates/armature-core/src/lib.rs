//! Core types for the armature robot arm: joints, pose state, configuration
//! and errors.
//!
//! [`PoseState`] is the single source of truth for the arm's joint values.
//! Everything else (kinematic chain, drag mapping, rendering) reads it or
//! writes it through [`PoseState::set_joint`].

pub mod config;
pub mod error;
pub mod handle;
pub mod joint;
pub mod pose;

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use config::{ArmConfig, DragConfig, DragTracking, GripperConfig, JointScales};
pub use error::{ArmatureError, ConfigError, ParseError};
pub use handle::DragHandle;
pub use joint::{JointId, JointRange, RotationAxis};
pub use pose::{Pose, PoseState};

// ---------------------------------------------------------------------------
// ArmatureSet
// ---------------------------------------------------------------------------

/// Per-frame ordering of the arm pipeline.
///
/// `Route` (inputs into [`PoseState`]) → `Kinematics` (pose into the chain)
/// → `Present` (chain into rendered entities, cursor feedback).
#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArmatureSet {
    Route,
    Kinematics,
    Present,
}

// ---------------------------------------------------------------------------
// ArmatureCorePlugin
// ---------------------------------------------------------------------------

/// Registers [`ArmatureSet`] ordering and the [`ArmConfig`] and
/// [`PoseState`] resources.
///
/// An [`ArmConfig`] inserted before this plugin is kept and its initial pose
/// seeds [`PoseState`]; otherwise defaults are used.
pub struct ArmatureCorePlugin;

impl Plugin for ArmatureCorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ArmatureSet::Route,
                ArmatureSet::Kinematics,
                ArmatureSet::Present,
            )
                .chain(),
        );

        let mut config = app
            .world()
            .get_resource::<ArmConfig>()
            .cloned()
            .unwrap_or_default();
        if let Err(e) = config.validate() {
            warn!("armature-core: {e}; using default configuration");
            config = ArmConfig::default();
        }
        info!(
            "armature-core: drag tracking {}, sensitivity {}",
            config.drag.tracking, config.drag.sensitivity
        );
        if !app.world().contains_resource::<PoseState>() {
            app.insert_resource(PoseState::new(config.initial_pose()));
        }
        app.insert_resource(config);
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ArmConfig, ArmatureCorePlugin, ArmatureSet, DragConfig, DragHandle, DragTracking,
        JointId, Pose, PoseState,
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_inserts_default_resources() {
        let mut app = App::new();
        app.add_plugins(ArmatureCorePlugin);
        app.update();

        assert_eq!(app.world().resource::<PoseState>().pose(), Pose::INITIAL);
        assert_eq!(*app.world().resource::<ArmConfig>(), ArmConfig::default());
    }

    #[test]
    fn plugin_seeds_pose_from_config() {
        let mut config = ArmConfig::default();
        config.initial_pose.base = 45.0;

        let mut app = App::new();
        app.insert_resource(config);
        app.add_plugins(ArmatureCorePlugin);

        let pose = app.world().resource::<PoseState>().pose();
        assert!((pose.base() - 45.0).abs() < f32::EPSILON);
    }

    #[test]
    fn plugin_replaces_invalid_config() {
        let mut config = ArmConfig::default();
        config.drag.sensitivity = -1.0;

        let mut app = App::new();
        app.insert_resource(config);
        app.add_plugins(ArmatureCorePlugin);

        assert_eq!(*app.world().resource::<ArmConfig>(), ArmConfig::default());
    }

    #[test]
    fn plugin_keeps_existing_pose_state() {
        let mut app = App::new();
        app.insert_resource(PoseState::new(Pose::new(10.0, 0.0, 0.0, 0.0)));
        app.add_plugins(ArmatureCorePlugin);

        let pose = app.world().resource::<PoseState>().pose();
        assert!((pose.base() - 10.0).abs() < f32::EPSILON);
    }
}
