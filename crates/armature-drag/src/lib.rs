//! Drag-to-angle mapping for the armature robot arm.
//!
//! A drag gesture on a handle starts a [`DragSession`]; every pointer move
//! goes through the [`DragMapper`], which returns clamped joint targets for
//! the router to write into the pose. Two tracking modes are supported:
//!
//! - **Absolute** (default): `start_value ± total_delta * gain`, recomputed
//!   from the session snapshot on every move.
//! - **Incremental**: `live_value ± delta * gain`, clamped after each move.
//!
//! [`CursorFeedback`] tracks hover and grab state for the cursor icon.

pub mod cursor;
pub mod mapper;
pub mod session;

pub use cursor::{CursorFeedback, CursorState};
pub use mapper::{DragMapper, DragRule, ScreenAxis, rules};
pub use session::DragSession;
