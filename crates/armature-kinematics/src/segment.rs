//! Rigid segments of the arm and what drives them.

use nalgebra::{UnitQuaternion, Vector3};

use armature_core::{DragHandle, JointId, RotationAxis};

/// Index of a segment inside its [`ArmChain`](crate::ArmChain).
///
/// Parents always have a smaller index than their children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub(crate) usize);

impl SegmentId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Which side of the wrist a gripper finger sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FingerSide {
    /// Offset by `-gap` along the wrist's lateral (X) axis.
    A,
    /// Offset by `+gap`.
    B,
}

impl FingerSide {
    pub const fn sign(self) -> f32 {
        match self {
            Self::A => -1.0,
            Self::B => 1.0,
        }
    }
}

/// How a pose value moves a segment relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentDrive {
    /// Rigidly attached.
    Fixed,
    /// Rotates about `axis` by the joint's angle in degrees.
    Rotate { joint: JointId, axis: RotationAxis },
    /// Gripper finger, slides along X by the gripper gap.
    Finger(FingerSide),
}

/// A rigid part of the arm.
#[derive(Clone, Debug)]
pub struct Segment {
    /// Unique name within the chain.
    pub name: String,
    /// Static translation from the parent frame.
    pub offset: Vector3<f32>,
    /// Static orientation applied before the driven rotation.
    pub fixed_rotation: UnitQuaternion<f32>,
    /// Pose binding.
    pub drive: SegmentDrive,
    /// Drag handle, if pointer gestures may grab this segment.
    pub handle: Option<DragHandle>,
    pub(crate) parent: Option<SegmentId>,
}

impl Segment {
    /// A fixed segment at `offset` from its parent.
    #[must_use]
    pub fn new(name: impl Into<String>, offset: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            offset: Vector3::new(offset[0], offset[1], offset[2]),
            fixed_rotation: UnitQuaternion::identity(),
            drive: SegmentDrive::Fixed,
            handle: None,
            parent: None,
        }
    }

    /// Bind the segment's rotation to `joint` about `axis`.
    #[must_use]
    pub const fn rotating(mut self, joint: JointId, axis: RotationAxis) -> Self {
        self.drive = SegmentDrive::Rotate { joint, axis };
        self
    }

    /// Make the segment a gripper finger.
    #[must_use]
    pub const fn finger(mut self, side: FingerSide) -> Self {
        self.drive = SegmentDrive::Finger(side);
        self
    }

    /// Static yaw about +Y, in radians.
    #[must_use]
    pub fn with_fixed_yaw(mut self, radians: f32) -> Self {
        self.fixed_rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), radians);
        self
    }

    /// Mark the segment as manipulable through `handle`.
    #[must_use]
    pub const fn with_handle(mut self, handle: DragHandle) -> Self {
        self.handle = Some(handle);
        self
    }

    pub const fn parent(&self) -> Option<SegmentId> {
        self.parent
    }

    /// Joint whose value moves this segment, if any.
    pub const fn joint(&self) -> Option<JointId> {
        match self.drive {
            SegmentDrive::Rotate { joint, .. } => Some(joint),
            SegmentDrive::Finger(_) => Some(JointId::Gripper),
            SegmentDrive::Fixed => None,
        }
    }
}
