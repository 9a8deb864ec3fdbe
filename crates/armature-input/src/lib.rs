//! Input routing for the armature robot arm.
//!
//! Every input source feeds one ordered [`ArmInput`] event stream:
//!
//! - sliders send [`ArmInput::Slider`]
//! - pointer gestures send `DragStart` / `DragMove` / `DragEnd` / `Hover`
//! - the reset button sends [`ArmInput::Reset`]
//!
//! [`InputRouter`] applies them to [`PoseState`](armature_core::PoseState)
//! through a single `set_joint` path, so sliders and drags are equally
//! authoritative and the last write wins.
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use armature_core::{ArmatureCorePlugin, JointId};
//! use armature_input::prelude::*;
//!
//! let mut app = App::new();
//! app.add_plugins((ArmatureCorePlugin, ArmatureInputPlugin));
//! app.world_mut().send_event(ArmInput::slider(JointId::Elbow, 90.0));
//! app.update();
//! ```

pub mod event;
pub mod router;
pub mod systems;

use bevy::prelude::*;

use armature_core::{ArmConfig, ArmatureSet};
use armature_drag::CursorFeedback;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use event::ArmInput;
pub use router::InputRouter;

// ---------------------------------------------------------------------------
// ArmatureInputPlugin
// ---------------------------------------------------------------------------

/// Registers [`ArmInput`], the [`InputRouter`] and [`CursorFeedback`]
/// resources, and the routing systems.
///
/// Runs in [`ArmatureSet::Route`], before kinematics.
pub struct ArmatureInputPlugin;

impl Plugin for ArmatureInputPlugin {
    fn build(&self, app: &mut App) {
        let drag = app
            .world()
            .get_resource::<ArmConfig>()
            .map(|c| c.drag.clone())
            .unwrap_or_default();

        app.add_event::<ArmInput>()
            .insert_resource(InputRouter::new(drag))
            .init_resource::<CursorFeedback>()
            .add_systems(
                Update,
                (
                    systems::sync_router_config.run_if(resource_changed::<ArmConfig>),
                    systems::route_arm_input,
                )
                    .chain()
                    .in_set(ArmatureSet::Route),
            );
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{ArmInput, ArmatureInputPlugin, InputRouter};
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
