//! Forward kinematics for the armature robot arm.
//!
//! # Architecture
//!
//! ```text
//! PoseState ──► ArmChain::apply_pose ──► per-segment world transforms
//! ```
//!
//! The [`ArmChain`] is an arena of [`Segment`]s with parent indices. Each
//! segment has a fixed offset from its parent and optionally a binding to one
//! pose value (a rotation, or a gripper finger slide). Applying a pose walks
//! the arena root to leaf and composes `world = world[parent] * local`, so
//! moving an upstream joint repositions everything downstream without
//! touching the downstream segments' own values.

pub mod arm;
pub mod chain;
pub mod error;
pub mod plugin;
pub mod segment;

pub use arm::names;
pub use chain::ArmChain;
pub use error::ChainError;
pub use plugin::ArmatureKinematicsPlugin;
pub use segment::{FingerSide, Segment, SegmentDrive, SegmentId};

pub mod prelude {
    pub use crate::{ArmChain, ArmatureKinematicsPlugin, SegmentId, names};
}
