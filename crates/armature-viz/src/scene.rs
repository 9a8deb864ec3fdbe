//! One mesh entity per arm segment.
//!
//! Entities are flat (no `ChildOf`): their `Transform` is the segment's world
//! transform, copied from the [`ArmChain`] by
//! [`sync_segment_visuals`](crate::sync::sync_segment_visuals).

use bevy::prelude::*;

use armature_core::DragHandle;
use armature_kinematics::{ArmChain, SegmentId, names};

/// Links a rendered entity to its chain segment.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentVisual(pub SegmentId);

/// Marks a segment entity that drag gestures can grab.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandleVisual(pub DragHandle);

/// Mesh for a segment of the default arm, by name. Unknown segments get a
/// small marker sphere.
fn segment_mesh(name: &str) -> Mesh {
    match name {
        names::BASE => Cylinder::new(1.0, 0.5).into(),
        names::SHOULDER => Sphere::new(0.4).into(),
        names::UPPER_ARM => Cylinder::new(0.25, 2.5).into(),
        names::ELBOW => Sphere::new(0.35).into(),
        names::FOREARM => Cylinder::new(0.2, 2.0).into(),
        names::WRIST => Sphere::new(0.25).into(),
        names::FINGER_A | names::FINGER_B => Cuboid::new(0.1, 0.6, 0.1).into(),
        _ => Sphere::new(0.1).into(),
    }
}

/// Startup system that spawns the arm's mesh entities.
///
/// Handle segments use the joint material and carry a [`HandleVisual`].
#[allow(clippy::needless_pass_by_value)]
pub fn spawn_arm(
    mut commands: Commands,
    chain: Res<ArmChain>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let arm_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.7, 0.7),
        ..default()
    });
    let joint_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.2, 0.2),
        ..default()
    });

    for (id, segment) in chain.iter() {
        let material = if segment.handle.is_some() {
            joint_mat.clone()
        } else {
            arm_mat.clone()
        };
        let mut entity = commands.spawn((
            Name::new(segment.name.clone()),
            SegmentVisual(id),
            Mesh3d(meshes.add(segment_mesh(&segment.name))),
            MeshMaterial3d(material),
            Transform::default(),
        ));
        if let Some(handle) = segment.handle {
            entity.insert(HandleVisual(handle));
        }
    }
    debug!("armature-viz: spawned {} segment meshes", chain.len());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_one_entity_per_segment() {
        let mut app = App::new();
        app.insert_resource(ArmChain::default());
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.add_systems(Startup, spawn_arm);
        app.update();

        let world = app.world_mut();
        let segments = world.query::<&SegmentVisual>().iter(world).count();
        assert_eq!(segments, 8);

        let mut handles: Vec<_> = world
            .query::<&HandleVisual>()
            .iter(world)
            .map(|h| h.0)
            .collect();
        handles.sort_by_key(|h| h.name());
        assert_eq!(
            handles,
            vec![DragHandle::Elbow, DragHandle::Gripper, DragHandle::ShoulderBase]
        );
    }
}
