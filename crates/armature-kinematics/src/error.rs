//! Error types for chain construction.

use armature_core::JointId;

/// Errors raised while adding segments to an [`ArmChain`](crate::ArmChain).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// A segment with this name already exists.
    #[error("duplicate segment: {0}")]
    DuplicateSegment(String),

    /// The parent index does not refer to an existing segment.
    #[error("unknown parent segment index {parent} for {segment}")]
    UnknownParent { segment: String, parent: usize },

    /// A rotation binding was requested for a joint that has no axis.
    #[error("joint {0} does not rotate")]
    NotRotational(JointId),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
