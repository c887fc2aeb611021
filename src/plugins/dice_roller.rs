use bevy::prelude::*;
use rand::Rng;

use crate::utils::config::RollConfig;
use crate::utils::constants::color_constants::face_color;
use crate::utils::objects::{BackgroundFade, CurrentFace, DieVisual, RandomGen, RollState};
use crate::utils::touch_inputs::TapInputPlugin;

/// Top-level plugin wiring the whole die roller screen.
pub struct DiceRollerPlugin;

impl Plugin for DiceRollerPlugin {
    fn build(&self, app: &mut App) {
        let config = RollConfig::load_or_default();
        // A pinned seed gives reproducible rolls; otherwise reseed per launch.
        let rng = match config.seed {
            Some(seed) => RandomGen::from_seed(seed),
            None => RandomGen::from_seed(rand::rng().random()),
        };

        app.insert_resource(config)
            .insert_resource(rng)
            .init_resource::<RollState>()
            .init_resource::<CurrentFace>()
            .init_resource::<BackgroundFade>()
            .init_resource::<DieVisual>()
            .insert_resource(ClearColor(face_color(0)))
            .add_plugins(TapInputPlugin)
            .add_systems(Startup, crate::utils::setup::setup)
            .add_systems(
                Update,
                (
                    // Sequencer: consume taps, advance the timeline, sample
                    // the frame's visual state
                    crate::utils::roll::start_roll,
                    crate::utils::roll::advance_roll,
                    crate::utils::animation::sample_die_visual,
                    // Render side: apply the sampled state
                    crate::utils::render::apply_die_transform,
                    crate::utils::render::apply_die_material,
                    crate::utils::render::apply_background,
                    crate::utils::render::update_rolling_label,
                )
                    .chain(),
            );
    }
}
