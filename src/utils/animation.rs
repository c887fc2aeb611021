//! Interpolation helpers and the per-frame visual sampling system.
//!
//! The sequencer only records timestamps and targets; everything the render
//! side needs is recomputed here each frame as a pure function of
//! `(RollState, elapsed)`.
use bevy::color::Mix;
use bevy::prelude::*;
use std::time::Duration;

use crate::utils::config::RollConfig;
use crate::utils::constants::animation_constants::{
    COLOR_FADE_SECS, OPACITY_DIP, SCALE_PULSE, SNAP_EASE_SECS,
};
use crate::utils::objects::{BackgroundFade, CurrentFace, DieVisual, RollState, SnapEase};

/// Cubic ease-in/ease-out over [0, 1], clamped outside.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Eased progress of a roll, 0 at trigger and exactly 1 at the full duration.
pub fn roll_progress(elapsed_secs: f32, duration_secs: f32) -> f32 {
    ease_in_out(elapsed_secs / duration_secs)
}

/// Scale pulse: neutral at both ends of the roll, peaking at mid-roll.
pub fn scale_curve(progress: f32) -> f32 {
    1.0 + SCALE_PULSE * (progress * std::f32::consts::PI).sin()
}

/// Opacity dip mirroring the scale pulse.
pub fn opacity_curve(progress: f32) -> f32 {
    1.0 - OPACITY_DIP * (progress * std::f32::consts::PI).sin()
}

/// Displayed snap angle: eases toward the latest per-step target over a
/// fixed window, then holds it.
pub fn snap_angle(snap: &SnapEase, now: Duration) -> f32 {
    let since = now.saturating_sub(snap.changed_at).as_secs_f32();
    let t = ease_in_out(since / SNAP_EASE_SECS);
    snap.from_deg + (snap.target_deg - snap.from_deg) * t
}

/// Displayed background color: eases from the color shown at the last face
/// change toward the new face's color.
pub fn background_color_at(fade: &BackgroundFade, now: Duration) -> Color {
    let since = now.saturating_sub(fade.changed_at).as_secs_f32();
    let t = since / COLOR_FADE_SECS;
    if t >= 1.0 {
        fade.to
    } else {
        let from = Srgba::from(fade.from);
        let to = Srgba::from(fade.to);
        Color::Srgba(from.mix(&to, ease_in_out(t)))
    }
}

/// System sampling the renderable visual state for the current frame.
pub fn sample_die_visual(
    time: Res<Time>,
    state: Res<RollState>,
    face: Res<CurrentFace>,
    fade: Res<BackgroundFade>,
    config: Res<RollConfig>,
    mut visual: ResMut<DieVisual>,
) {
    let now = time.elapsed();
    visual.face = face.0;
    visual.background = background_color_at(&fade, now);

    match *state {
        RollState::Idle => {
            // Rest pose is snapped, not eased, so the next roll starts clean.
            visual.rotation_deg = Vec3::ZERO;
            visual.snap_deg = 0.0;
            visual.scale = 1.0;
            visual.opacity = 1.0;
        }
        RollState::Rolling(roll) => {
            let elapsed = now.saturating_sub(roll.started_at).as_secs_f32();
            let progress = roll_progress(elapsed, config.roll_duration_secs());
            // All three axes complete their different targets in lockstep.
            visual.rotation_deg = roll.target_rotations * progress;
            visual.snap_deg = snap_angle(&roll.snap, now);
            visual.scale = scale_curve(progress);
            visual.opacity = opacity_curve(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::color_constants::face_color;

    #[test]
    fn ease_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        // Clamped outside the unit interval.
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn scale_and_opacity_are_neutral_at_rest_and_peak_mid_roll() {
        assert!((scale_curve(0.0) - 1.0).abs() < 1e-6);
        assert!((scale_curve(1.0) - 1.0).abs() < 1e-4);
        assert!((scale_curve(0.5) - (1.0 + SCALE_PULSE)).abs() < 1e-6);

        assert!((opacity_curve(0.0) - 1.0).abs() < 1e-6);
        assert!((opacity_curve(1.0) - 1.0).abs() < 1e-4);
        assert!((opacity_curve(0.5) - (1.0 - OPACITY_DIP)).abs() < 1e-6);
    }

    #[test]
    fn snap_eases_then_holds() {
        let snap = SnapEase {
            from_deg: 0.0,
            target_deg: 90.0,
            changed_at: Duration::from_secs(1),
        };
        // Before the retarget timestamp: still at the old angle.
        assert_eq!(snap_angle(&snap, Duration::from_millis(500)), 0.0);
        // At the retarget instant.
        assert_eq!(snap_angle(&snap, Duration::from_secs(1)), 0.0);
        // Past the ease window: holds the target.
        assert_eq!(snap_angle(&snap, Duration::from_secs(2)), 90.0);
        // Mid-ease: strictly between.
        let mid = snap_angle(&snap, Duration::from_millis(1150));
        assert!(mid > 0.0 && mid < 90.0);
    }

    #[test]
    fn background_reaches_target_after_fade_window() {
        let fade = BackgroundFade {
            from: face_color(0),
            to: face_color(3),
            changed_at: Duration::ZERO,
        };
        assert_eq!(background_color_at(&fade, Duration::ZERO), face_color(0));
        assert_eq!(background_color_at(&fade, Duration::from_secs(1)), face_color(3));
    }

    #[test]
    fn full_spin_completes_at_progress_one() {
        let targets = Vec3::new(720.0, 1080.0, 1440.0);
        let progress = roll_progress(3.0, 3.0);
        assert_eq!(targets * progress, targets);
        assert_eq!(roll_progress(0.0, 3.0), 0.0);
    }
}
