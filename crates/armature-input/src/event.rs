//! The ordered input stream.

use bevy::prelude::*;

use armature_core::{DragHandle, JointId};

/// One user input, from a slider, the pointer, or the reset button.
///
/// Sliders and pointer gestures share this stream so their relative order
/// within a frame is preserved; the router applies them in arrival order.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum ArmInput {
    /// A slider moved to `value`.
    Slider { joint: JointId, value: f32 },
    /// Pointer pressed on a handle at `position` (screen pixels, Y down).
    DragStart { handle: DragHandle, position: Vec2 },
    /// Pointer moved while pressed. `delta` is the displacement since the
    /// previous move.
    DragMove { position: Vec2, delta: Vec2 },
    /// Pointer released.
    DragEnd,
    /// Pointer entered (`Some`) or left (`None`) a handle.
    Hover(Option<DragHandle>),
    /// Restore the initial pose.
    Reset,
}

impl ArmInput {
    #[must_use]
    pub const fn slider(joint: JointId, value: f32) -> Self {
        Self::Slider { joint, value }
    }

    /// A scripted drag on `handle` from `from` to `to`, split into `steps`
    /// equal moves and ending with a release.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn drag_gesture(handle: DragHandle, from: Vec2, to: Vec2, steps: u32) -> Vec<Self> {
        let steps = steps.max(1);
        let step = (to - from) / steps as f32;

        let mut inputs = Vec::with_capacity(steps as usize + 2);
        inputs.push(Self::DragStart {
            handle,
            position: from,
        });
        inputs.extend((1..=steps).map(|i| Self::DragMove {
            position: from + step * i as f32,
            delta: step,
        }));
        inputs.push(Self::DragEnd);
        inputs
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
