//! Pointer displacement to joint values.
//!
//! Each [`DragHandle`] has a fixed set of [`DragRule`]s saying which screen
//! axis drives which joint and in which direction. The [`DragMapper`] turns a
//! pointer move into clamped target values using the configured tracking mode
//! and per-joint gain (`sensitivity * scale`).

use bevy::math::Vec2;

use armature_core::{DragConfig, DragHandle, DragTracking, JointId, Pose};

use crate::session::DragSession;

// ---------------------------------------------------------------------------
// DragRule
// ---------------------------------------------------------------------------

/// Screen axis read by a rule. Screen Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenAxis {
    Horizontal,
    Vertical,
}

impl ScreenAxis {
    pub const fn component(self, v: Vec2) -> f32 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }
}

/// One axis-to-joint binding of a drag handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRule {
    pub joint: JointId,
    pub axis: ScreenAxis,
    /// `1.0` or `-1.0`. Vertical rules are inverted so dragging down lowers
    /// the joint.
    pub sign: f32,
}

impl DragRule {
    const fn new(joint: JointId, axis: ScreenAxis, sign: f32) -> Self {
        Self { joint, axis, sign }
    }
}

const SHOULDER_BASE_RULES: [DragRule; 2] = [
    DragRule::new(JointId::Base, ScreenAxis::Horizontal, 1.0),
    DragRule::new(JointId::Shoulder, ScreenAxis::Vertical, -1.0),
];
const ELBOW_RULES: [DragRule; 1] = [DragRule::new(JointId::Elbow, ScreenAxis::Vertical, -1.0)];
const GRIPPER_RULES: [DragRule; 1] = [DragRule::new(JointId::Gripper, ScreenAxis::Horizontal, 1.0)];

/// Rules applied for a gesture on `handle`.
pub const fn rules(handle: DragHandle) -> &'static [DragRule] {
    match handle {
        DragHandle::ShoulderBase => &SHOULDER_BASE_RULES,
        DragHandle::Elbow => &ELBOW_RULES,
        DragHandle::Gripper => &GRIPPER_RULES,
    }
}

// ---------------------------------------------------------------------------
// DragMapper
// ---------------------------------------------------------------------------

/// Converts pointer gestures into joint targets.
///
/// # Example
///
/// ```
/// use armature_core::{DragConfig, DragHandle, JointId, Pose};
/// use armature_drag::DragMapper;
/// use bevy::math::Vec2;
///
/// let mapper = DragMapper::new(DragConfig::default());
/// let pose = Pose::new(10.0, 0.0, 45.0, 50.0);
/// let mut session = mapper.begin(DragHandle::ShoulderBase, pose, Vec2::new(100.0, 0.0)).unwrap();
///
/// let targets = mapper.update(&mut session, &pose, Vec2::new(130.0, 0.0), Vec2::new(30.0, 0.0));
/// assert_eq!(targets[0], (JointId::Base, 25.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragMapper {
    config: DragConfig,
}

impl DragMapper {
    #[must_use]
    pub const fn new(config: DragConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &DragConfig {
        &self.config
    }

    pub const fn tracking(&self) -> DragTracking {
        self.config.tracking
    }

    /// Start a gesture on `handle`, or `None` if the handle is disabled.
    #[must_use]
    pub fn begin(&self, handle: DragHandle, pose: Pose, position: Vec2) -> Option<DragSession> {
        self.config
            .is_enabled(handle)
            .then(|| DragSession::new(handle, pose, position))
    }

    /// Record a pointer move and compute the new value of every joint the
    /// session's handle drives.
    ///
    /// `current` is the live pose (used by incremental tracking), `position`
    /// the pointer position and `delta` the displacement since the previous
    /// move. Every returned value is within its joint's range.
    pub fn update(
        &self,
        session: &mut DragSession,
        current: &Pose,
        position: Vec2,
        delta: Vec2,
    ) -> Vec<(JointId, f32)> {
        session.record_move(position);
        let total = session.total_delta();

        rules(session.handle())
            .iter()
            .map(|rule| {
                let gain = rule.sign * self.config.gain(rule.joint);
                let raw = match self.config.tracking {
                    DragTracking::Incremental => {
                        current.get(rule.joint) + rule.axis.component(delta) * gain
                    }
                    DragTracking::Absolute => {
                        session.start_pose().get(rule.joint) + rule.axis.component(total) * gain
                    }
                };
                (rule.joint, rule.joint.range().clamp(raw))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
