//! Single write path from every input source into [`PoseState`].
//!
//! Sliders and drag gestures are equally authoritative: both end in
//! [`PoseState::set_joint`], and whichever write lands last wins.

use bevy::prelude::*;

use armature_core::{DragConfig, DragHandle, JointId, Pose, PoseState};
use armature_drag::{DragMapper, DragSession};

use crate::event::ArmInput;

/// Routes slider values and drag gestures into the pose.
///
/// Holds the drag mapper and at most one active [`DragSession`].
///
/// # Example
///
/// ```
/// use armature_core::{JointId, PoseState};
/// use armature_input::InputRouter;
/// use bevy::math::Vec2;
///
/// let mut state = PoseState::default();
/// let mut router = InputRouter::default();
///
/// router.set_shoulder(&mut state, 120.0);
/// assert!((state.get(JointId::Shoulder) - 90.0).abs() < f32::EPSILON);
///
/// // A move without a drag-start is ignored.
/// router.drag_move(&mut state, Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
/// assert!((state.get(JointId::Shoulder) - 90.0).abs() < f32::EPSILON);
/// ```
#[derive(Resource, Clone, Debug, Default)]
pub struct InputRouter {
    mapper: DragMapper,
    session: Option<DragSession>,
}

#[allow(clippy::unused_self)]
impl InputRouter {
    #[must_use]
    pub const fn new(config: DragConfig) -> Self {
        Self {
            mapper: DragMapper::new(config),
            session: None,
        }
    }

    pub const fn mapper(&self) -> &DragMapper {
        &self.mapper
    }

    /// Swap in a new drag configuration. An active gesture is dropped.
    pub fn reconfigure(&mut self, config: DragConfig) {
        self.end_drag();
        self.mapper = DragMapper::new(config);
    }

    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    // -----------------------------------------------------------------------
    // Sliders
    // -----------------------------------------------------------------------

    /// Write one joint value. Out-of-range values are clamped.
    pub fn set_joint(&self, state: &mut PoseState, joint: JointId, value: f32) -> Pose {
        state.set_joint(joint, value)
    }

    pub fn set_base(&self, state: &mut PoseState, degrees: f32) -> Pose {
        self.set_joint(state, JointId::Base, degrees)
    }

    pub fn set_shoulder(&self, state: &mut PoseState, degrees: f32) -> Pose {
        self.set_joint(state, JointId::Shoulder, degrees)
    }

    pub fn set_elbow(&self, state: &mut PoseState, degrees: f32) -> Pose {
        self.set_joint(state, JointId::Elbow, degrees)
    }

    pub fn set_gripper(&self, state: &mut PoseState, percent: f32) -> Pose {
        self.set_joint(state, JointId::Gripper, percent)
    }

    /// Restore the initial pose. An active gesture is dropped so its next
    /// move cannot snap the arm back to the pre-reset snapshot.
    pub fn reset(&mut self, state: &mut PoseState) -> Pose {
        self.end_drag();
        state.reset()
    }

    // -----------------------------------------------------------------------
    // Drag gestures
    // -----------------------------------------------------------------------

    /// Start a gesture on `handle`. A stale session is replaced. Returns
    /// `false` if the handle is disabled.
    pub fn begin_drag(&mut self, state: &PoseState, handle: DragHandle, position: Vec2) -> bool {
        if self.session.is_some() {
            debug!("armature-input: replacing stale drag session");
        }
        self.session = self.mapper.begin(handle, state.pose(), position);
        match self.session {
            Some(_) => {
                debug!("armature-input: drag start on {handle} at {position}");
                true
            }
            None => {
                debug!("armature-input: drag on disabled handle {handle} ignored");
                false
            }
        }
    }

    /// Apply a pointer move to the active gesture. No-op without one.
    pub fn drag_move(&mut self, state: &mut PoseState, position: Vec2, delta: Vec2) -> Pose {
        let Some(session) = self.session.as_mut() else {
            debug!("armature-input: drag move without a session ignored");
            return state.pose();
        };
        for (joint, value) in self.mapper.update(session, &state.pose(), position, delta) {
            state.set_joint(joint, value);
        }
        state.pose()
    }

    /// Finish the active gesture, returning its session. No-op without one.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        let session = self.session.take();
        match &session {
            Some(s) => debug!(
                "armature-input: drag end on {} after {} moves",
                s.handle(),
                s.moves()
            ),
            None => debug!("armature-input: drag end without a session ignored"),
        }
        session
    }

    // -----------------------------------------------------------------------
    // Event dispatch
    // -----------------------------------------------------------------------

    /// Apply one [`ArmInput`]. Returns `true` if the pose changed.
    ///
    /// Hover events carry no pose change and are ignored here.
    pub fn handle(&mut self, input: &ArmInput, state: &mut PoseState) -> bool {
        let before = state.revision();
        match *input {
            ArmInput::Slider { joint, value } => {
                self.set_joint(state, joint, value);
            }
            ArmInput::DragStart { handle, position } => {
                self.begin_drag(state, handle, position);
            }
            ArmInput::DragMove { position, delta } => {
                self.drag_move(state, position, delta);
            }
            ArmInput::DragEnd => {
                self.end_drag();
            }
            ArmInput::Reset => {
                self.reset(state);
            }
            ArmInput::Hover(_) => {}
        }
        state.revision() != before
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
