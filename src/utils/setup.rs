use bevy::prelude::*;

use crate::log;
use crate::utils::constants::scene_constants::{
    CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z, DIE_SIZE, DIE_THICKNESS,
};
use crate::utils::objects::{Die, FaceImages, RollingLabel, UIEntity};

/// Systems
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    // Camera
    commands.spawn((
        Camera3d::default(),
        // Fixed position looking at the die at the origin
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Light
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(2.0, 2.0, 4.0),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0, // Bevy 0.17.0 uses a 0-100 scale here
        affects_lightmapped_meshes: true,
    });

    // Face images, indexed by face value; index 0 is the rest art shown
    // before the first roll.
    let faces = FaceImages(std::array::from_fn(|face| {
        asset_server.load(format!("textures/die_face_{face}.png"))
    }));

    // The die: a flat slab showing the current face texture
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(DIE_SIZE, DIE_SIZE, DIE_THICKNESS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(faces.handle(0)),
            // Blend so the mid-roll opacity dip renders
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::default(),
        Die,
    ));

    commands.insert_resource(faces);

    // Status label, hidden until a roll is in flight
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                bottom: Val::Px(40.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            RollingLabel,
            UIEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Rolling..."),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });

    log!("🎲 Dice Roller started!");
    log!("👆 Tap or click anywhere to roll the die");
}
