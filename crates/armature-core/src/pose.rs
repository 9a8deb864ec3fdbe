//! The arm pose and its single authoritative store.
//!
//! [`Pose`] is an immutable snapshot whose values are always inside their
//! joint ranges. [`PoseState`] is the Bevy resource that owns the live pose;
//! every mutation goes through [`PoseState::set_joint`], which clamps.

use bevy::prelude::*;

use crate::joint::JointId;

// ---------------------------------------------------------------------------
// Pose
// ---------------------------------------------------------------------------

/// Snapshot of all joint values.
///
/// Fields are private so a `Pose` can only be built through clamping
/// constructors: every value is always within its joint's range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    base: f32,
    shoulder: f32,
    elbow: f32,
    gripper: f32,
}

impl Pose {
    /// Startup configuration: base 0°, shoulder −45°, elbow 45°, gripper 50%.
    pub const INITIAL: Self = Self {
        base: 0.0,
        shoulder: -45.0,
        elbow: 45.0,
        gripper: 50.0,
    };

    /// Build a pose, clamping every value. NaN values fall back to
    /// [`Pose::INITIAL`].
    #[must_use]
    pub fn new(base: f32, shoulder: f32, elbow: f32, gripper: f32) -> Self {
        Self::INITIAL
            .with(JointId::Base, base)
            .with(JointId::Shoulder, shoulder)
            .with(JointId::Elbow, elbow)
            .with(JointId::Gripper, gripper)
    }

    pub const fn base(&self) -> f32 {
        self.base
    }

    pub const fn shoulder(&self) -> f32 {
        self.shoulder
    }

    pub const fn elbow(&self) -> f32 {
        self.elbow
    }

    pub const fn gripper(&self) -> f32 {
        self.gripper
    }

    pub const fn get(&self, joint: JointId) -> f32 {
        match joint {
            JointId::Base => self.base,
            JointId::Shoulder => self.shoulder,
            JointId::Elbow => self.elbow,
            JointId::Gripper => self.gripper,
        }
    }

    /// Copy of this pose with `joint` set to the clamped `value`.
    ///
    /// NaN leaves the joint unchanged.
    #[must_use]
    pub fn with(mut self, joint: JointId, value: f32) -> Self {
        if value.is_nan() {
            return self;
        }
        let value = joint.range().clamp(value);
        match joint {
            JointId::Base => self.base = value,
            JointId::Shoulder => self.shoulder = value,
            JointId::Elbow => self.elbow = value,
            JointId::Gripper => self.gripper = value,
        }
        self
    }

    /// `(joint, value)` pairs in slider order.
    pub fn iter(&self) -> impl Iterator<Item = (JointId, f32)> + '_ {
        JointId::ALL.into_iter().map(|joint| (joint, self.get(joint)))
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::INITIAL
    }
}

// ---------------------------------------------------------------------------
// PoseState
// ---------------------------------------------------------------------------

/// Resource holding the live pose of the arm.
///
/// Mutations are serialized by the Bevy scheduler (`ResMut`), so readers
/// never observe a partially applied update.
///
/// # Example
///
/// ```
/// use armature_core::{JointId, PoseState};
///
/// let mut state = PoseState::default();
/// let pose = state.set_joint(JointId::Shoulder, 250.0);
/// assert!((pose.shoulder() - 90.0).abs() < f32::EPSILON);
/// ```
#[derive(Resource, Clone, Debug)]
pub struct PoseState {
    pose: Pose,
    initial: Pose,
    revision: u64,
}

impl Default for PoseState {
    fn default() -> Self {
        Self::new(Pose::INITIAL)
    }
}

impl PoseState {
    #[must_use]
    pub const fn new(initial: Pose) -> Self {
        Self {
            pose: initial,
            initial,
            revision: 0,
        }
    }

    /// Current pose snapshot.
    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.pose
    }

    #[must_use]
    pub const fn get(&self, joint: JointId) -> f32 {
        self.pose.get(joint)
    }

    /// Number of mutations that changed a value since creation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Store `value` for `joint`, clamped to the joint's range, and return the
    /// resulting pose. NaN is ignored.
    pub fn set_joint(&mut self, joint: JointId, value: f32) -> Pose {
        if value.is_nan() {
            debug!("armature-core: ignoring NaN value for {joint}");
            return self.pose;
        }
        self.replace(self.pose.with(joint, value))
    }

    /// Restore the initial configuration.
    pub fn reset(&mut self) -> Pose {
        self.replace(self.initial)
    }

    fn replace(&mut self, next: Pose) -> Pose {
        if next != self.pose {
            self.pose = next;
            self.revision += 1;
        }
        self.pose
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
