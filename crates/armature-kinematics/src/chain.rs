//! Segment arena and forward kinematics.
//!
//! An [`ArmChain`] stores segments in a flat `Vec` with parent indices.
//! Parents are always pushed before their children, so a single forward
//! pass over the arena visits the tree root-to-leaf and can compose world
//! transforms as `world[parent] * local[child]`.

use bevy::prelude::Resource;
use nalgebra::{Isometry3, Translation3, Unit, UnitQuaternion, Vector3};

use armature_core::{DragHandle, GripperConfig, Pose, RotationAxis};

use crate::error::ChainError;
use crate::segment::{Segment, SegmentDrive, SegmentId};

/// Hierarchical transform chain of the arm.
#[derive(Resource, Debug, Clone)]
pub struct ArmChain {
    segments: Vec<Segment>,
    /// Parent-relative transforms, recomputed by [`apply_pose`](Self::apply_pose).
    local: Vec<Isometry3<f32>>,
    /// Root-relative transforms.
    world: Vec<Isometry3<f32>>,
    gripper: GripperConfig,
    pose: Pose,
}

impl ArmChain {
    /// Empty chain using `gripper` to map openings to finger gaps.
    #[must_use]
    pub const fn new(gripper: GripperConfig) -> Self {
        Self {
            segments: Vec::new(),
            local: Vec::new(),
            world: Vec::new(),
            gripper,
            pose: Pose::INITIAL,
        }
    }

    /// Append a segment under `parent` (`None` for a root).
    ///
    /// The new segment's transforms reflect the last applied pose.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate name, an unknown parent, or a rotation bound to
    /// a joint without an axis.
    pub fn add(
        &mut self,
        parent: Option<SegmentId>,
        segment: Segment,
    ) -> Result<SegmentId, ChainError> {
        if self.find(&segment.name).is_some() {
            return Err(ChainError::DuplicateSegment(segment.name));
        }
        if let Some(p) = parent
            && p.0 >= self.segments.len()
        {
            return Err(ChainError::UnknownParent {
                segment: segment.name,
                parent: p.0,
            });
        }
        if let SegmentDrive::Rotate { joint, .. } = segment.drive
            && joint.axis().is_none()
        {
            return Err(ChainError::NotRotational(joint));
        }
        Ok(self.push(parent, segment))
    }

    pub(crate) fn push(&mut self, parent: Option<SegmentId>, mut segment: Segment) -> SegmentId {
        debug_assert!(parent.is_none_or(|p| p.0 < self.segments.len()));
        segment.parent = parent;
        let id = SegmentId(self.segments.len());
        let local = self.local_for(&segment, &self.pose);
        let world = parent.map_or(local, |p| self.world[p.0] * local);
        self.segments.push(segment);
        self.local.push(local);
        self.world.push(world);
        id
    }

    /// Write `pose` into every bound segment and recompute all transforms,
    /// root outward.
    pub fn apply_pose(&mut self, pose: &Pose) {
        self.pose = *pose;
        for i in 0..self.segments.len() {
            let segment = &self.segments[i];
            let local = self.local_for(segment, pose);
            let world = segment.parent.map_or(local, |p| self.world[p.0] * local);
            self.local[i] = local;
            self.world[i] = world;
        }
    }

    /// Swap the finger gap range and re-apply the current pose.
    pub fn set_gripper(&mut self, gripper: GripperConfig) {
        self.gripper = gripper;
        let pose = self.pose;
        self.apply_pose(&pose);
    }

    fn local_for(&self, segment: &Segment, pose: &Pose) -> Isometry3<f32> {
        let mut translation = segment.offset;
        let mut rotation = segment.fixed_rotation;
        match segment.drive {
            SegmentDrive::Fixed => {}
            SegmentDrive::Rotate { joint, axis } => {
                rotation *= axis_rotation(axis, pose.get(joint).to_radians());
            }
            SegmentDrive::Finger(side) => {
                translation.x += side.sign() * self.gripper.gap(pose.gripper());
            }
        }
        Isometry3::from_parts(Translation3::from(translation), rotation)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Pose applied by the last [`apply_pose`](Self::apply_pose).
    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.pose
    }

    #[must_use]
    pub const fn gripper(&self) -> &GripperConfig {
        &self.gripper
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Look up a segment by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<SegmentId> {
        self.segments
            .iter()
            .position(|s| s.name == name)
            .map(SegmentId)
    }

    /// Segment by id. Ids are only handed out by this chain, so the lookup
    /// cannot fail for them.
    #[must_use]
    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }

    /// Segments in tree order (every parent before its children).
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| (SegmentId(i), s))
    }

    /// Direct children of `id`.
    pub fn children(&self, id: SegmentId) -> impl Iterator<Item = SegmentId> + '_ {
        self.iter()
            .filter(move |(_, s)| s.parent == Some(id))
            .map(|(child, _)| child)
    }

    /// Drag handle of a segment, if it is manipulable.
    #[must_use]
    pub fn handle(&self, id: SegmentId) -> Option<DragHandle> {
        self.segments.get(id.0).and_then(|s| s.handle)
    }

    /// Parent-relative transform.
    #[must_use]
    pub fn local_transform(&self, id: SegmentId) -> &Isometry3<f32> {
        &self.local[id.0]
    }

    /// Root-relative transform.
    #[must_use]
    pub fn world_transform(&self, id: SegmentId) -> &Isometry3<f32> {
        &self.world[id.0]
    }

    /// Root-relative position of the segment origin.
    #[must_use]
    pub fn world_position(&self, id: SegmentId) -> Vector3<f32> {
        self.world[id.0].translation.vector
    }

    /// Driven rotation of a segment in degrees (0 for segments that do not
    /// rotate).
    ///
    /// This is the segment's own joint value; it does not change when an
    /// upstream joint moves.
    #[must_use]
    pub fn local_rotation(&self, id: SegmentId) -> f32 {
        match self.segments[id.0].drive {
            SegmentDrive::Rotate { joint, .. } => self.pose.get(joint),
            SegmentDrive::Fixed | SegmentDrive::Finger(_) => 0.0,
        }
    }
}

/// Rotation of `radians` about a joint axis.
fn axis_rotation(axis: RotationAxis, radians: f32) -> UnitQuaternion<f32> {
    let [x, y, z] = axis.vector();
    UnitQuaternion::from_axis_angle(&Unit::new_normalize(Vector3::new(x, y, z)), radians)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
