//! The default five-joint robot arm.
//!
//! ```text
//! base ─ shoulder ─ upper_arm ─ elbow ─ forearm ─ wrist ─┬─ finger_a
//!                                                        └─ finger_b
//! ```
//!
//! Scene units, Y up. Each offset is measured from the parent's origin, so
//! link segments (`upper_arm`, `forearm`) sit at the middle of their link.

use std::f32::consts::FRAC_PI_2;

use armature_core::{DragHandle, GripperConfig, JointId, RotationAxis};

use crate::chain::ArmChain;
use crate::segment::{FingerSide, Segment};

/// Segment names of the default arm.
pub mod names {
    pub const BASE: &str = "base";
    pub const SHOULDER: &str = "shoulder";
    pub const UPPER_ARM: &str = "upper_arm";
    pub const ELBOW: &str = "elbow";
    pub const FOREARM: &str = "forearm";
    pub const WRIST: &str = "wrist";
    pub const FINGER_A: &str = "finger_a";
    pub const FINGER_B: &str = "finger_b";
}

impl ArmChain {
    /// Build the default arm at the initial pose.
    #[must_use]
    pub fn robot_arm(gripper: GripperConfig) -> Self {
        let mut chain = Self::new(gripper);

        let base = chain.push(
            None,
            Segment::new(names::BASE, [0.0, 0.25, 0.0])
                .rotating(JointId::Base, RotationAxis::Vertical),
        );
        let shoulder = chain.push(
            Some(base),
            Segment::new(names::SHOULDER, [0.0, 0.5, 0.0])
                .rotating(JointId::Shoulder, RotationAxis::Lateral)
                .with_handle(DragHandle::ShoulderBase),
        );
        let upper_arm = chain.push(
            Some(shoulder),
            Segment::new(names::UPPER_ARM, [0.0, 1.25, 0.0]),
        );
        let elbow = chain.push(
            Some(upper_arm),
            Segment::new(names::ELBOW, [0.0, 1.25, 0.0])
                .rotating(JointId::Elbow, RotationAxis::Lateral)
                .with_handle(DragHandle::Elbow),
        );
        let forearm = chain.push(Some(elbow), Segment::new(names::FOREARM, [0.0, 1.0, 0.0]));
        let wrist = chain.push(
            Some(forearm),
            Segment::new(names::WRIST, [0.0, 1.0, 0.0])
                .with_fixed_yaw(FRAC_PI_2)
                .with_handle(DragHandle::Gripper),
        );
        chain.push(
            Some(wrist),
            Segment::new(names::FINGER_A, [0.0, 0.3, 0.0]).finger(FingerSide::A),
        );
        chain.push(
            Some(wrist),
            Segment::new(names::FINGER_B, [0.0, 0.3, 0.0]).finger(FingerSide::B),
        );

        chain
    }
}

impl Default for ArmChain {
    fn default() -> Self {
        Self::robot_arm(GripperConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use armature_core::{Pose, PoseState};

    fn id(chain: &ArmChain, name: &str) -> crate::SegmentId {
        chain.find(name).unwrap()
    }

    #[test]
    fn topology() {
        let chain = ArmChain::default();
        assert_eq!(chain.len(), 8);

        let parent_of = |name: &str| {
            chain
                .segment(id(&chain, name))
                .parent()
                .map(|p| chain.segment(p).name.clone())
        };
        assert_eq!(parent_of(names::BASE), None);
        assert_eq!(parent_of(names::SHOULDER).as_deref(), Some(names::BASE));
        assert_eq!(parent_of(names::UPPER_ARM).as_deref(), Some(names::SHOULDER));
        assert_eq!(parent_of(names::ELBOW).as_deref(), Some(names::UPPER_ARM));
        assert_eq!(parent_of(names::FOREARM).as_deref(), Some(names::ELBOW));
        assert_eq!(parent_of(names::WRIST).as_deref(), Some(names::FOREARM));
        assert_eq!(parent_of(names::FINGER_A).as_deref(), Some(names::WRIST));
        assert_eq!(parent_of(names::FINGER_B).as_deref(), Some(names::WRIST));
    }

    #[test]
    fn handles_are_on_joint_spheres() {
        let chain = ArmChain::default();
        let handles: Vec<_> = chain
            .iter()
            .filter_map(|(sid, s)| chain.handle(sid).map(|h| (s.name.as_str(), h)))
            .collect();
        assert_eq!(
            handles,
            vec![
                (names::SHOULDER, DragHandle::ShoulderBase),
                (names::ELBOW, DragHandle::Elbow),
                (names::WRIST, DragHandle::Gripper),
            ]
        );
    }

    #[test]
    fn straight_arm_heights() {
        let mut chain = ArmChain::default();
        chain.apply_pose(&Pose::new(0.0, 0.0, 0.0, 50.0));

        let y = |name| chain.world_position(id(&chain, name)).y;
        assert_relative_eq!(y(names::BASE), 0.25, epsilon = 1e-5);
        assert_relative_eq!(y(names::SHOULDER), 0.75, epsilon = 1e-5);
        assert_relative_eq!(y(names::ELBOW), 3.25, epsilon = 1e-5);
        assert_relative_eq!(y(names::WRIST), 5.25, epsilon = 1e-5);
        assert_relative_eq!(y(names::FINGER_A), 5.55, epsilon = 1e-5);
    }

    #[test]
    fn shoulder_moves_downstream_world_positions_only() {
        let mut chain = ArmChain::default();
        let mut state = PoseState::default();
        chain.apply_pose(&state.pose());

        let downstream = [
            names::ELBOW,
            names::FOREARM,
            names::WRIST,
            names::FINGER_A,
            names::FINGER_B,
        ];
        let before_pos: Vec<_> = downstream
            .iter()
            .map(|n| chain.world_position(id(&chain, n)))
            .collect();
        let before_rot: Vec<_> = downstream
            .iter()
            .map(|n| chain.local_rotation(id(&chain, n)))
            .collect();
        let before_local: Vec<_> = downstream
            .iter()
            .map(|n| *chain.local_transform(id(&chain, n)))
            .collect();
        let shoulder_before = chain.world_position(id(&chain, names::SHOULDER));

        chain.apply_pose(&state.set_joint(JointId::Shoulder, 30.0));

        for (i, n) in downstream.iter().enumerate() {
            let sid = id(&chain, n);
            let moved = (chain.world_position(sid) - before_pos[i]).norm();
            assert!(moved > 1e-3, "{n} did not move");
            assert_relative_eq!(chain.local_rotation(sid), before_rot[i]);
            assert_relative_eq!(*chain.local_transform(sid), before_local[i], epsilon = 1e-6);
        }
        // The shoulder pivot itself stays put.
        let shoulder_after = chain.world_position(id(&chain, names::SHOULDER));
        assert_relative_eq!(shoulder_after, shoulder_before, epsilon = 1e-6);
    }

    #[test]
    fn elbow_does_not_move_upstream() {
        let mut chain = ArmChain::default();
        chain.apply_pose(&Pose::INITIAL);
        let upper = chain.world_position(id(&chain, names::UPPER_ARM));
        let elbow = chain.world_position(id(&chain, names::ELBOW));

        chain.apply_pose(&Pose::INITIAL.with(JointId::Elbow, 120.0));
        assert_relative_eq!(chain.world_position(id(&chain, names::UPPER_ARM)), upper, epsilon = 1e-6);
        assert_relative_eq!(chain.world_position(id(&chain, names::ELBOW)), elbow, epsilon = 1e-6);
    }

    #[test]
    fn fingers_symmetric_about_wrist() {
        let mut chain = ArmChain::default();
        chain.apply_pose(&Pose::INITIAL);

        let wrist = chain.world_transform(id(&chain, names::WRIST));
        let a = wrist.inverse() * chain.world_transform(id(&chain, names::FINGER_A));
        let b = wrist.inverse() * chain.world_transform(id(&chain, names::FINGER_B));
        assert_relative_eq!(a.translation.x, -0.2, epsilon = 1e-5);
        assert_relative_eq!(b.translation.x, 0.2, epsilon = 1e-5);
    }
}
