//! Windowless arm driven through the same plugins as the viewer.

use bevy::prelude::*;

use armature_core::{ArmConfig, ArmatureCorePlugin, DragHandle, JointId, Pose, PoseState};
use armature_input::{ArmInput, ArmatureInputPlugin};
use armature_kinematics::{ArmChain, ArmatureKinematicsPlugin};

/// World-space state of one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentReport {
    pub name: String,
    pub position: Vec3,
    /// Driven rotation in degrees, 0 for segments without one.
    pub rotation: f32,
}

/// Headless arm app: core, kinematics and input plugins, no window.
///
/// Inputs go through the [`ArmInput`] stream exactly as the viewer's sliders
/// and pointer observers send them.
pub struct HeadlessArm {
    app: App,
}

impl HeadlessArm {
    pub fn new(config: ArmConfig) -> Self {
        let mut app = App::new();
        app.insert_resource(config);
        app.add_plugins((ArmatureCorePlugin, ArmatureKinematicsPlugin, ArmatureInputPlugin));
        app.finish();
        app.cleanup();
        app.update();
        Self { app }
    }

    /// Queue `inputs` in order and run one frame.
    pub fn send(&mut self, inputs: impl IntoIterator<Item = ArmInput>) {
        for input in inputs {
            self.app.world_mut().send_event(input);
        }
        self.app.update();
    }

    /// Apply slider values in order.
    pub fn set_joints(&mut self, values: &[(JointId, f32)]) {
        self.send(values.iter().map(|&(joint, value)| ArmInput::slider(joint, value)));
    }

    /// Replay a drag gesture split into `steps` moves.
    pub fn drag(&mut self, handle: DragHandle, from: Vec2, to: Vec2, steps: u32) {
        self.send(ArmInput::drag_gesture(handle, from, to, steps));
    }

    pub fn pose(&self) -> Pose {
        self.app.world().resource::<PoseState>().pose()
    }

    pub fn chain(&self) -> &ArmChain {
        self.app.world().resource::<ArmChain>()
    }

    /// World positions and driven rotations of every segment, in tree order.
    pub fn report(&self) -> Vec<SegmentReport> {
        let chain = self.chain();
        chain
            .iter()
            .map(|(id, segment)| {
                let p = chain.world_position(id);
                SegmentReport {
                    name: segment.name.clone(),
                    position: Vec3::new(p.x, p.y, p.z),
                    rotation: chain.local_rotation(id),
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_at_initial_pose() {
        let arm = HeadlessArm::new(ArmConfig::default());
        assert_eq!(arm.pose(), Pose::INITIAL);
        assert_eq!(arm.report().len(), 8);
    }

    #[test]
    fn sliders_move_chain() {
        let mut arm = HeadlessArm::new(ArmConfig::default());
        arm.set_joints(&[(JointId::Shoulder, 0.0), (JointId::Elbow, 0.0)]);

        let wrist = arm.report().into_iter().find(|s| s.name == "wrist").unwrap();
        assert_relative_eq!(wrist.position.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(wrist.position.y, 5.25, epsilon = 1e-5);
    }

    #[test]
    fn drag_uses_router() {
        let mut arm = HeadlessArm::new(ArmConfig::default());
        arm.drag(DragHandle::ShoulderBase, Vec2::new(100.0, 0.0), Vec2::new(130.0, 0.0), 5);
        assert_relative_eq!(arm.pose().base(), 15.0, epsilon = 1e-4);
    }
}
