//! Camera, ground and lighting.
//!
//! Uses `bevy_panorbit_camera` for orbit camera controls.

use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Height the camera orbits around, roughly the middle of the arm.
const FOCUS: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Spawn the orbit camera in front of the arm.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Transform::from_xyz(0.0, 5.0, -10.0).looking_at(FOCUS, Vec3::Y),
        PanOrbitCamera {
            focus: FOCUS,
            radius: Some(11.0),
            ..default()
        },
        Camera3d::default(),
    ));
}

/// Spawn a ground plane and basic lighting.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // 10 x 10 ground.
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(5.0)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.38, 0.35),
            ..default()
        })),
        Pickable::IGNORE,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.5, 0.0)),
    ));

    // Sky-like fill from above.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 350.0,
        ..default()
    });
}
