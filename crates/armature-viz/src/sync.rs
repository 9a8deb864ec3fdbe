//! Presentation systems: segment transforms, orbit lock, cursor and theme.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;
use bevy_panorbit_camera::PanOrbitCamera;
use nalgebra::Isometry3;

use armature_drag::{CursorFeedback, CursorState};
use armature_input::InputRouter;
use armature_kinematics::ArmChain;

use crate::config::VizConfig;
use crate::scene::SegmentVisual;

/// Convert a chain transform into a Bevy [`Transform`].
pub fn isometry_to_transform(iso: &Isometry3<f32>) -> Transform {
    let t = iso.translation.vector;
    let r = iso.rotation;
    Transform {
        translation: Vec3::new(t.x, t.y, t.z),
        rotation: Quat::from_xyzw(r.i, r.j, r.k, r.w),
        scale: Vec3::ONE,
    }
}

// ---------------------------------------------------------------------------
// Segment transforms
// ---------------------------------------------------------------------------

/// Copy every segment's world transform onto its entity.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_segment_visuals(chain: Res<ArmChain>, mut query: Query<(&SegmentVisual, &mut Transform)>) {
    for (visual, mut transform) in &mut query {
        if visual.0.index() < chain.len() {
            *transform = isometry_to_transform(chain.world_transform(visual.0));
        }
    }
}

// ---------------------------------------------------------------------------
// Orbit lock
// ---------------------------------------------------------------------------

/// Disable camera orbiting while a joint drag is active, so the same
/// pointer gesture does not also rotate the view.
#[allow(clippy::needless_pass_by_value)]
pub fn lock_orbit_while_dragging(router: Res<InputRouter>, mut cameras: Query<&mut PanOrbitCamera>) {
    let enabled = !router.is_dragging();
    for mut camera in &mut cameras {
        if camera.enabled != enabled {
            camera.enabled = enabled;
        }
    }
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

pub const fn cursor_icon(state: CursorState) -> SystemCursorIcon {
    match state {
        CursorState::Default => SystemCursorIcon::Default,
        CursorState::Grab => SystemCursorIcon::Grab,
        CursorState::Grabbing => SystemCursorIcon::Grabbing,
    }
}

/// Set the primary window's cursor from [`CursorFeedback`].
#[allow(clippy::needless_pass_by_value)]
pub fn apply_cursor_icon(
    mut commands: Commands,
    cursor: Res<CursorFeedback>,
    windows: Query<Entity, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    commands
        .entity(window)
        .insert(CursorIcon::from(cursor_icon(cursor.state())));
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[allow(clippy::needless_pass_by_value)]
pub fn apply_theme(config: Res<VizConfig>, mut clear: ResMut<ClearColor>) {
    clear.0 = config.clear_color();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
