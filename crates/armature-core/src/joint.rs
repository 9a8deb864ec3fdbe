//! Joint identities, ranges and rotation axes.
//!
//! The arm has three rotating joints and a gripper. The gripper value is a
//! normalized opening in percent, not an angle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

// ---------------------------------------------------------------------------
// JointRange
// ---------------------------------------------------------------------------

/// Closed value range `[min, max]` of a joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointRange {
    pub min: f32,
    pub max: f32,
}

impl JointRange {
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range. NaN passes through unchanged.
    #[must_use]
    pub fn clamp(self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// ---------------------------------------------------------------------------
// RotationAxis
// ---------------------------------------------------------------------------

/// Axis a rotating joint turns about, in its segment's local frame (Y up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    /// Yaw about +Y.
    Vertical,
    /// Pitch about +Z.
    Lateral,
}

impl RotationAxis {
    /// Unit vector of the axis.
    #[must_use]
    pub const fn vector(self) -> [f32; 3] {
        match self {
            Self::Vertical => [0.0, 1.0, 0.0],
            Self::Lateral => [0.0, 0.0, 1.0],
        }
    }
}

// ---------------------------------------------------------------------------
// JointId
// ---------------------------------------------------------------------------

/// One controllable value of the arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointId {
    Base,
    Shoulder,
    Elbow,
    Gripper,
}

impl JointId {
    /// All joints in slider order.
    pub const ALL: [Self; 4] = [Self::Base, Self::Shoulder, Self::Elbow, Self::Gripper];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
            Self::Gripper => "gripper",
        }
    }

    /// Human-readable label for UI display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Base => "Base Rotation",
            Self::Shoulder => "Shoulder Angle",
            Self::Elbow => "Elbow Angle",
            Self::Gripper => "Gripper",
        }
    }

    /// Valid range: degrees for rotating joints, percent for the gripper.
    pub const fn range(self) -> JointRange {
        match self {
            Self::Base => JointRange::new(-180.0, 180.0),
            Self::Shoulder => JointRange::new(-90.0, 90.0),
            Self::Elbow => JointRange::new(0.0, 145.0),
            Self::Gripper => JointRange::new(0.0, 100.0),
        }
    }

    /// Rotation axis, or `None` for the gripper.
    pub const fn axis(self) -> Option<RotationAxis> {
        match self {
            Self::Base => Some(RotationAxis::Vertical),
            Self::Shoulder | Self::Elbow => Some(RotationAxis::Lateral),
            Self::Gripper => None,
        }
    }

    /// Unit suffix for display (`°` or `%`).
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Gripper => "%",
            _ => "°",
        }
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JointId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|joint| joint.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownJoint(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
