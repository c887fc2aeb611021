//! Render-side systems: apply the sampled visual state to the die entity,
//! the window clear color, and the status label. These systems only read the
//! sequencer's state.
use bevy::prelude::*;

use crate::utils::objects::{Die, DieVisual, FaceImages, RollState, RollingLabel};

/// Applies the spin, snap overlay and scale pulse to the die transform.
pub fn apply_die_transform(
    visual: Res<DieVisual>,
    mut die_query: Query<&mut Transform, With<Die>>,
) {
    let Ok(mut transform) = die_query.single_mut() else {
        return;
    };

    let rot = visual.rotation_deg;
    transform.rotation = Quat::from_euler(
        EulerRot::XYZ,
        rot.x.to_radians(),
        rot.y.to_radians(),
        (rot.z + visual.snap_deg).to_radians(),
    );
    transform.scale = Vec3::splat(visual.scale);
}

/// Swaps the face texture and applies the opacity dip on the die material.
pub fn apply_die_material(
    visual: Res<DieVisual>,
    faces: Res<FaceImages>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    die_query: Query<&MeshMaterial3d<StandardMaterial>, With<Die>>,
) {
    let Ok(material_handle) = die_query.single() else {
        return;
    };
    let Some(material) = materials.get_mut(&material_handle.0) else {
        return;
    };

    material.base_color_texture = Some(faces.handle(visual.face));
    material.base_color.set_alpha(visual.opacity);
}

/// Drives the window background toward the current face color.
pub fn apply_background(visual: Res<DieVisual>, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = visual.background;
}

/// Shows the "Rolling..." label only while a roll is in flight.
pub fn update_rolling_label(
    state: Res<RollState>,
    mut label_query: Query<&mut Visibility, With<RollingLabel>>,
) {
    let Ok(mut visibility) = label_query.single_mut() else {
        return;
    };
    *visibility = if state.is_rolling() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}
