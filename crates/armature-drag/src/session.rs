//! Per-gesture drag state.

use bevy::math::Vec2;

use armature_core::{DragHandle, Pose};

/// Snapshot taken when a drag gesture starts.
///
/// Created on drag-start, read on every drag-move and dropped on drag-end.
/// Absolute tracking recomputes joint values from `start_pose` and the total
/// pointer displacement, so the result never depends on how many move events
/// arrived in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    handle: DragHandle,
    start_pose: Pose,
    start_position: Vec2,
    last_position: Vec2,
    moves: u32,
}

impl DragSession {
    #[must_use]
    pub const fn new(handle: DragHandle, start_pose: Pose, start_position: Vec2) -> Self {
        Self {
            handle,
            start_pose,
            start_position,
            last_position: start_position,
            moves: 0,
        }
    }

    pub const fn handle(&self) -> DragHandle {
        self.handle
    }

    /// Pose at gesture start.
    pub const fn start_pose(&self) -> Pose {
        self.start_pose
    }

    /// Pointer position (screen pixels, Y down) at gesture start.
    pub const fn start_position(&self) -> Vec2 {
        self.start_position
    }

    /// Pointer position of the latest move.
    pub const fn last_position(&self) -> Vec2 {
        self.last_position
    }

    /// Displacement from the gesture start to the latest move.
    pub fn total_delta(&self) -> Vec2 {
        self.last_position - self.start_position
    }

    /// Number of moves recorded so far.
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    pub(crate) fn record_move(&mut self, position: Vec2) {
        self.last_position = position;
        self.moves = self.moves.saturating_add(1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_no_displacement() {
        let session = DragSession::new(DragHandle::Elbow, Pose::INITIAL, Vec2::new(10.0, 20.0));
        assert_eq!(session.total_delta(), Vec2::ZERO);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.start_pose(), Pose::INITIAL);
    }

    #[test]
    fn record_move_tracks_total() {
        let mut session = DragSession::new(DragHandle::Gripper, Pose::INITIAL, Vec2::new(10.0, 20.0));
        session.record_move(Vec2::new(15.0, 18.0));
        session.record_move(Vec2::new(30.0, 25.0));

        assert_eq!(session.total_delta(), Vec2::new(20.0, 5.0));
        assert_eq!(session.last_position(), Vec2::new(30.0, 25.0));
        assert_eq!(session.start_position(), Vec2::new(10.0, 20.0));
        assert_eq!(session.moves(), 2);
    }
}
