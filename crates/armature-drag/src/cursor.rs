//! Cursor feedback for drag handles.

use bevy::prelude::Resource;

use armature_core::DragHandle;

/// Cursor the viewport should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorState {
    #[default]
    Default,
    /// Hovering a handle that can be grabbed.
    Grab,
    /// A drag gesture is active.
    Grabbing,
}

/// Hover and grab state that decides the [`CursorState`].
///
/// `Grabbing` wins while a drag is active; on release the cursor returns to
/// `Grab` if the pointer still hovers a handle, else `Default`.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorFeedback {
    hovered: Option<DragHandle>,
    grabbing: bool,
}

impl CursorFeedback {
    /// Pointer entered (`Some`) or left (`None`) a handle.
    pub fn hover(&mut self, handle: Option<DragHandle>) {
        self.hovered = handle;
    }

    pub fn begin_grab(&mut self) {
        self.grabbing = true;
    }

    pub fn end_grab(&mut self) {
        self.grabbing = false;
    }

    pub const fn hovered(&self) -> Option<DragHandle> {
        self.hovered
    }

    pub const fn is_grabbing(&self) -> bool {
        self.grabbing
    }

    pub const fn state(&self) -> CursorState {
        if self.grabbing {
            CursorState::Grabbing
        } else if self.hovered.is_some() {
            CursorState::Grab
        } else {
            CursorState::Default
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
