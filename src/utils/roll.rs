//! Roll sequencer: drives one complete roll from tap to settled result.
//!
//! The timeline is a timer-driven state machine sampled every frame against
//! `Res<Time>`: ten fast shuffle samples, one settle sample, a pause until
//! the fixed total duration, then resolution back to `Idle`.
use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

use crate::log;
use crate::utils::animation::{background_color_at, snap_angle};
use crate::utils::config::RollConfig;
use crate::utils::constants::color_constants::face_color;
use crate::utils::constants::roll_constants::{SPIN_MAX_DEG, SPIN_MIN_DEG};
use crate::utils::objects::{
    ActiveRoll, BackgroundFade, CurrentFace, RandomGen, RollState, SnapEase,
};
use crate::utils::touch_inputs::TapEvent;

/// Uniform draw of a die face in 1..=6.
pub fn draw_face(rng: &mut RandomGen) -> u8 {
    rng.random_gen.random_range(1..=6)
}

/// Uniform snap target angle in [0°, 360°).
pub fn draw_snap_target(rng: &mut RandomGen) -> f32 {
    rng.random_gen.random_range(0.0..360.0)
}

/// Per-axis total spin in [720°, 1800°), drawn independently per axis.
pub fn draw_spin_targets(rng: &mut RandomGen) -> Vec3 {
    Vec3::new(
        rng.random_gen.random_range(SPIN_MIN_DEG..SPIN_MAX_DEG),
        rng.random_gen.random_range(SPIN_MIN_DEG..SPIN_MAX_DEG),
        rng.random_gen.random_range(SPIN_MIN_DEG..SPIN_MAX_DEG),
    )
}

/// Sets the displayed face and retargets the background fade from the color
/// currently on screen, so mid-fade changes stay smooth.
fn assign_face(new_face: u8, now: Duration, face: &mut CurrentFace, fade: &mut BackgroundFade) {
    if face.0 == new_face {
        return;
    }
    fade.from = background_color_at(fade, now);
    fade.to = face_color(new_face);
    fade.changed_at = now;
    face.0 = new_face;
}

/// System starting a roll on tap. A tap while a roll is in flight is drained
/// and ignored, never queued.
pub fn start_roll(
    mut taps: MessageReader<TapEvent>,
    time: Res<Time>,
    mut state: ResMut<RollState>,
    mut rng: ResMut<RandomGen>,
) {
    let tapped = taps.read().count() > 0;
    if !tapped || state.is_rolling() {
        return;
    }

    let now = time.elapsed();
    *state = RollState::Rolling(ActiveRoll {
        started_at: now,
        target_rotations: draw_spin_targets(&mut rng),
        next_sample: 0,
        snap: SnapEase {
            from_deg: 0.0,
            target_deg: 0.0,
            changed_at: now,
        },
    });
}

/// System advancing an in-flight roll: takes every timeline sample that has
/// come due since the last frame, then resolves the roll at full duration.
pub fn advance_roll(
    time: Res<Time>,
    config: Res<RollConfig>,
    mut state: ResMut<RollState>,
    mut rng: ResMut<RandomGen>,
    mut face: ResMut<CurrentFace>,
    mut fade: ResMut<BackgroundFade>,
) {
    let RollState::Rolling(mut roll) = *state else {
        return;
    };

    let now = time.elapsed();
    let elapsed = now.saturating_sub(roll.started_at).as_secs_f32();

    // Samples 0..shuffle_steps are the fast shuffle; sample shuffle_steps is
    // the settle value, held through the final pause.
    let due = ((elapsed / config.shuffle_step_secs) as u32).min(config.shuffle_steps);
    while roll.next_sample <= due {
        assign_face(draw_face(&mut rng), now, &mut face, &mut fade);
        roll.snap = SnapEase {
            from_deg: snap_angle(&roll.snap, now),
            target_deg: draw_snap_target(&mut rng),
            changed_at: now,
        };
        roll.next_sample += 1;
    }

    if elapsed >= config.roll_duration_secs() {
        // The result is a fresh independent draw, not the last value flashed
        // during settle. Matches the shipped behavior; see DESIGN.md.
        let result = draw_face(&mut rng);
        assign_face(result, now, &mut face, &mut fade);
        log!("Rolled a {result}");
        *state = RollState::Idle;
        return;
    }

    *state = RollState::Rolling(roll);
}
