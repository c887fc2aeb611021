// Constants used by the die roller, structured into modules.

/// Roll timeline
pub mod roll_constants {
    // Number of fast face changes before the die settles.
    pub const SHUFFLE_STEPS: u32 = 10;

    // Hold time of each shuffle step in seconds.
    pub const SHUFFLE_STEP_SECS: f32 = 0.15;

    // Pause after the settle sample so the whole roll lands on a fixed duration.
    pub const SETTLE_PAUSE_SECS: f32 = 1.5;

    // Total spin per axis, drawn fresh each roll (2 to 5 full turns).
    pub const SPIN_MIN_DEG: f32 = 720.0;
    pub const SPIN_MAX_DEG: f32 = 1800.0;
}

/// Animation curves
pub mod animation_constants {
    // Ease duration for the per-step snap rotation.
    pub const SNAP_EASE_SECS: f32 = 0.3;

    // Ease duration for the background color fade.
    pub const COLOR_FADE_SECS: f32 = 0.3;

    // Peak growth of the die at mid-roll (scale = 1 + PULSE at progress 0.5).
    pub const SCALE_PULSE: f32 = 0.25;

    // Peak dim of the die at mid-roll (opacity = 1 - DIP at progress 0.5).
    pub const OPACITY_DIP: f32 = 0.15;
}

/// Face colors
pub mod color_constants {
    use bevy::prelude::Color;

    // Face value 1..=6 is a settled die; 0 is the rest/uninitialized face.
    pub const FACE_COUNT: usize = 7;

    // Background color per face, index 0 is the rest face shown before the first roll.
    pub const FACE_COLORS: [Color; FACE_COUNT] = [
        Color::srgb(0.16, 0.17, 0.21), // 0: rest, dark slate
        Color::srgb(0.76, 0.22, 0.19), // 1: red
        Color::srgb(0.85, 0.49, 0.15), // 2: orange
        Color::srgb(0.83, 0.73, 0.19), // 3: yellow
        Color::srgb(0.27, 0.63, 0.28), // 4: green
        Color::srgb(0.21, 0.45, 0.77), // 5: blue
        Color::srgb(0.51, 0.27, 0.68), // 6: purple
    ];

    /// Total lookup from face value to background color.
    /// A face outside 0..=6 is a logic fault, not a runtime condition.
    pub fn face_color(face: u8) -> Color {
        debug_assert!((face as usize) < FACE_COUNT, "face {face} out of domain");
        FACE_COLORS[face as usize]
    }
}

/// Touch gestures
pub mod touch_constants {
    // Maximum finger travel in logical pixels for a press to still count as a tap.
    pub const TAP_MAX_DISTANCE: f32 = 10.0;

    // Maximum press duration in seconds for a tap.
    pub const TAP_MAX_DURATION_SECS: f32 = 0.3;
}

/// 3D scene
pub mod scene_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 6.0;

    // Die slab dimensions.
    pub const DIE_SIZE: f32 = 2.0;
    pub const DIE_THICKNESS: f32 = 0.25;
}

/// Generic app constants
pub mod game_constants {
    // Fallback seed when the config file pins none and entropy is unavailable.
    pub const DEFAULT_SEED: u64 = 69;
}

#[cfg(test)]
mod tests {
    use super::color_constants::{face_color, FACE_COLORS, FACE_COUNT};
    use super::roll_constants::{SETTLE_PAUSE_SECS, SHUFFLE_STEPS, SHUFFLE_STEP_SECS};

    #[test]
    fn color_map_covers_rest_and_all_faces() {
        assert_eq!(FACE_COUNT, 7);
        for face in 0u8..=6 {
            let _ = face_color(face);
        }
        assert_eq!(face_color(0), FACE_COLORS[0]);
    }

    #[test]
    fn timeline_lands_on_three_seconds() {
        let total = SHUFFLE_STEPS as f32 * SHUFFLE_STEP_SECS + SETTLE_PAUSE_SECS;
        assert!((total - 3.0).abs() < 1e-5);
    }
}
