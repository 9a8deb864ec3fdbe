//! Bevy ECS integration for the arm chain.
//!
//! Provides [`ArmatureKinematicsPlugin`], which keeps the [`ArmChain`]
//! resource in step with [`PoseState`]. The sync system only runs on frames
//! where the pose resource changed.

use bevy::prelude::*;

use armature_core::{ArmConfig, ArmatureSet, PoseState};

use crate::chain::ArmChain;

/// Bevy plugin that owns the [`ArmChain`] and re-applies the pose whenever
/// it changes.
///
/// Runs in [`ArmatureSet::Kinematics`], after input routing. An [`ArmChain`]
/// inserted before the plugin is kept; otherwise the default arm is built
/// from [`ArmConfig::gripper`].
pub struct ArmatureKinematicsPlugin;

impl Plugin for ArmatureKinematicsPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ArmChain>() {
            let gripper = app
                .world()
                .get_resource::<ArmConfig>()
                .map(|c| c.gripper)
                .unwrap_or_default();
            app.insert_resource(ArmChain::robot_arm(gripper));
        }
        app.add_systems(
            Update,
            (
                sync_chain_gripper.run_if(resource_changed::<ArmConfig>),
                apply_pose_to_chain.run_if(resource_changed::<PoseState>),
            )
                .chain()
                .in_set(ArmatureSet::Kinematics),
        );
    }
}

/// Push a changed [`ArmConfig`] gripper range into the chain.
///
/// An invalid range is rejected and the chain keeps its current one.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_chain_gripper(config: Res<ArmConfig>, mut chain: ResMut<ArmChain>) {
    if *chain.gripper() == config.gripper {
        return;
    }
    if let Err(e) = config.gripper.validate() {
        warn!("armature-kinematics: {e}; keeping previous gripper range");
        return;
    }
    chain.set_gripper(config.gripper);
}

/// System that pushes the current pose into the chain.
#[allow(clippy::needless_pass_by_value)]
pub fn apply_pose_to_chain(pose: Res<PoseState>, mut chain: ResMut<ArmChain>) {
    chain.apply_pose(&pose.pose());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
