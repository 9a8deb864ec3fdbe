//! Bevy systems that drain the [`ArmInput`] stream.

use bevy::prelude::*;

use armature_core::{ArmConfig, PoseState};
use armature_drag::CursorFeedback;

use crate::event::ArmInput;
use crate::router::InputRouter;

/// Apply every queued [`ArmInput`] in arrival order.
///
/// [`PoseState`] is only marked changed when a value actually moved, so the
/// downstream kinematics sync does not run for no-op inputs. Hovering a
/// disabled handle leaves the cursor at its default.
pub fn route_arm_input(
    mut events: EventReader<ArmInput>,
    mut router: ResMut<InputRouter>,
    mut pose: ResMut<PoseState>,
    mut cursor: ResMut<CursorFeedback>,
) {
    let mut changed = false;
    for input in events.read() {
        changed |= router.handle(input, pose.bypass_change_detection());
        match *input {
            ArmInput::Hover(handle) => {
                let config = router.mapper().config();
                cursor.hover(handle.filter(|h| config.is_enabled(*h)));
            }
            ArmInput::DragStart { .. } if router.is_dragging() => cursor.begin_grab(),
            ArmInput::DragStart { .. } | ArmInput::DragEnd | ArmInput::Reset => {
                cursor.end_grab();
            }
            _ => {}
        }
    }
    if changed {
        pose.set_changed();
    }
}

/// Push a changed [`ArmConfig`] drag section into the router.
///
/// An invalid drag section is rejected and the router keeps its current one.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_router_config(config: Res<ArmConfig>, mut router: ResMut<InputRouter>) {
    if *router.mapper().config() == config.drag {
        return;
    }
    if let Err(e) = config.drag.validate() {
        warn!("armature-input: {e}; keeping previous drag configuration");
        return;
    }
    info!("armature-input: drag tracking is now {}", config.drag.tracking);
    router.reconfigure(config.drag.clone());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
