//! Drag handles: the segments a pointer gesture can grab.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::joint::JointId;

/// A manipulable joint and the pose values it drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragHandle {
    /// Shoulder sphere: horizontal drag yaws the base, vertical drag pitches
    /// the shoulder.
    ShoulderBase,
    /// Elbow sphere: vertical drag pitches the elbow.
    Elbow,
    /// Wrist sphere: horizontal drag opens/closes the gripper.
    Gripper,
}

impl DragHandle {
    pub const ALL: [Self; 3] = [Self::ShoulderBase, Self::Elbow, Self::Gripper];

    pub const fn name(self) -> &'static str {
        match self {
            Self::ShoulderBase => "shoulder_base",
            Self::Elbow => "elbow",
            Self::Gripper => "gripper",
        }
    }

    /// Joints written by a gesture on this handle.
    pub const fn joints(self) -> &'static [JointId] {
        match self {
            Self::ShoulderBase => &[JointId::Base, JointId::Shoulder],
            Self::Elbow => &[JointId::Elbow],
            Self::Gripper => &[JointId::Gripper],
        }
    }
}

impl fmt::Display for DragHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DragHandle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|handle| handle.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseError::UnknownHandle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_joints() {
        assert_eq!(
            DragHandle::ShoulderBase.joints(),
            &[JointId::Base, JointId::Shoulder]
        );
        assert_eq!(DragHandle::Elbow.joints(), &[JointId::Elbow]);
        assert_eq!(DragHandle::Gripper.joints(), &[JointId::Gripper]);
    }

    #[test]
    fn parse_handle_names() {
        assert_eq!(
            "shoulder-base".parse::<DragHandle>().unwrap(),
            DragHandle::ShoulderBase
        );
        assert_eq!("ELBOW".parse::<DragHandle>().unwrap(), DragHandle::Elbow);
        assert!("wrist".parse::<DragHandle>().is_err());
    }
}
