//! Pointer observers on handle segments.
//!
//! Observers translate `bevy_picking` pointer events into [`ArmInput`]s.
//! They only ask whether the picked entity carries a [`HandleVisual`], so
//! the set of grabbable segments comes from the chain, not from a list kept
//! here. Only the primary button starts or drives a gesture.

use bevy::picking::events::{Drag, DragEnd, DragStart, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use armature_input::ArmInput;

use crate::scene::HandleVisual;

#[allow(clippy::needless_pass_by_value)]
pub fn on_drag_start(
    trigger: Trigger<Pointer<DragStart>>,
    handles: Query<&HandleVisual>,
    mut inputs: EventWriter<ArmInput>,
) {
    if trigger.button != PointerButton::Primary {
        return;
    }
    if let Ok(handle) = handles.get(trigger.target()) {
        inputs.write(ArmInput::DragStart {
            handle: handle.0,
            position: trigger.pointer_location.position,
        });
    }
}

#[allow(clippy::needless_pass_by_value)]
pub fn on_drag(
    trigger: Trigger<Pointer<Drag>>,
    handles: Query<&HandleVisual>,
    mut inputs: EventWriter<ArmInput>,
) {
    if trigger.button != PointerButton::Primary || !handles.contains(trigger.target()) {
        return;
    }
    inputs.write(ArmInput::DragMove {
        position: trigger.pointer_location.position,
        delta: trigger.delta,
    });
}

#[allow(clippy::needless_pass_by_value)]
pub fn on_drag_end(
    trigger: Trigger<Pointer<DragEnd>>,
    handles: Query<&HandleVisual>,
    mut inputs: EventWriter<ArmInput>,
) {
    if trigger.button != PointerButton::Primary || !handles.contains(trigger.target()) {
        return;
    }
    inputs.write(ArmInput::DragEnd);
}

#[allow(clippy::needless_pass_by_value)]
pub fn on_over(
    trigger: Trigger<Pointer<Over>>,
    handles: Query<&HandleVisual>,
    mut inputs: EventWriter<ArmInput>,
) {
    if let Ok(handle) = handles.get(trigger.target()) {
        inputs.write(ArmInput::Hover(Some(handle.0)));
    }
}

#[allow(clippy::needless_pass_by_value)]
pub fn on_out(
    trigger: Trigger<Pointer<Out>>,
    handles: Query<&HandleVisual>,
    mut inputs: EventWriter<ArmInput>,
) {
    if handles.contains(trigger.target()) {
        inputs.write(ArmInput::Hover(None));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use armature_core::DragHandle;
    use bevy::picking::backend::HitData;
    use bevy::picking::pointer::{Location, PointerId};
    use bevy::render::camera::{ManualTextureViewHandle, NormalizedRenderTarget};

    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_event::<ArmInput>();
        app.add_observer(on_drag_start)
            .add_observer(on_drag)
            .add_observer(on_drag_end)
            .add_observer(on_over)
            .add_observer(on_out);
        app
    }

    fn pointer<E: std::fmt::Debug + Clone + Reflect>(position: Vec2, event: E) -> Pointer<E> {
        let location = Location {
            target: NormalizedRenderTarget::TextureView(ManualTextureViewHandle(0)),
            position,
        };
        Pointer::new(PointerId::Mouse, location, Entity::PLACEHOLDER, event)
    }

    fn hit() -> HitData {
        HitData::new(Entity::PLACEHOLDER, 1.0, None, None)
    }

    fn drain(app: &mut App) -> Vec<ArmInput> {
        app.world_mut()
            .resource_mut::<Events<ArmInput>>()
            .drain()
            .collect()
    }

    #[test]
    fn primary_drag_on_handle_emits_gesture() {
        let mut app = build_test_app();
        let handle = app.world_mut().spawn(HandleVisual(DragHandle::Elbow)).id();
        let at = Vec2::new(40.0, 60.0);

        app.world_mut().trigger_targets(
            pointer(
                at,
                DragStart {
                    button: PointerButton::Secondary,
                    hit: hit(),
                },
            ),
            handle,
        );
        assert!(drain(&mut app).is_empty());

        app.world_mut().trigger_targets(
            pointer(
                at,
                DragStart {
                    button: PointerButton::Primary,
                    hit: hit(),
                },
            ),
            handle,
        );
        app.world_mut().trigger_targets(
            pointer(
                at + Vec2::new(5.0, 0.0),
                Drag {
                    button: PointerButton::Primary,
                    distance: Vec2::new(5.0, 0.0),
                    delta: Vec2::new(5.0, 0.0),
                },
            ),
            handle,
        );
        app.world_mut().trigger_targets(
            pointer(
                at + Vec2::new(5.0, 0.0),
                DragEnd {
                    button: PointerButton::Primary,
                    distance: Vec2::new(5.0, 0.0),
                },
            ),
            handle,
        );

        assert_eq!(
            drain(&mut app),
            vec![
                ArmInput::DragStart {
                    handle: DragHandle::Elbow,
                    position: at,
                },
                ArmInput::DragMove {
                    position: Vec2::new(45.0, 60.0),
                    delta: Vec2::new(5.0, 0.0),
                },
                ArmInput::DragEnd,
            ]
        );
    }

    #[test]
    fn non_handle_entities_are_ignored() {
        let mut app = build_test_app();
        let ground = app.world_mut().spawn_empty().id();

        app.world_mut().trigger_targets(
            pointer(
                Vec2::ZERO,
                DragStart {
                    button: PointerButton::Primary,
                    hit: hit(),
                },
            ),
            ground,
        );
        app.world_mut()
            .trigger_targets(pointer(Vec2::ZERO, Over { hit: hit() }), ground);
        assert!(drain(&mut app).is_empty());
    }

    #[test]
    fn hover_enters_and_leaves_handle() {
        let mut app = build_test_app();
        let handle = app.world_mut().spawn(HandleVisual(DragHandle::Gripper)).id();

        app.world_mut()
            .trigger_targets(pointer(Vec2::ZERO, Over { hit: hit() }), handle);
        app.world_mut()
            .trigger_targets(pointer(Vec2::ZERO, Out { hit: hit() }), handle);

        assert_eq!(
            drain(&mut app),
            vec![ArmInput::Hover(Some(DragHandle::Gripper)), ArmInput::Hover(None)]
        );
    }
}
