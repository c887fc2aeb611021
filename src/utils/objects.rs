// This file defines the resources and components used by the die roller.
use bevy::prelude::*;
use rand_chacha::rand_core::SeedableRng;
use std::time::Duration;

use crate::utils::constants::color_constants::{face_color, FACE_COUNT};
use crate::utils::constants::game_constants::DEFAULT_SEED;
use rand_chacha::ChaCha8Rng;

/// Ease of the per-step snap rotation toward a freshly drawn target angle.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapEase {
    pub from_deg: f32,
    pub target_deg: f32,
    // App-elapsed timestamp of the last retarget.
    pub changed_at: Duration,
}

/// Data carried by an in-flight roll.
#[derive(Clone, Copy, Debug)]
pub struct ActiveRoll {
    // App-elapsed timestamp when the roll was triggered.
    pub started_at: Duration,
    // Total spin per axis in degrees, completed in lockstep by the progress curve.
    pub target_rotations: Vec3,
    // Index of the next timeline sample to take (0..SHUFFLE_STEPS shuffle, then settle).
    pub next_sample: u32,
    pub snap: SnapEase,
}

/// Roll lifecycle. The `Rolling` variant owns all per-roll data, so at most
/// one timeline can be in flight and a finished roll leaves nothing behind.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub enum RollState {
    #[default]
    Idle,
    Rolling(ActiveRoll),
}

impl RollState {
    pub fn is_rolling(&self) -> bool {
        matches!(self, RollState::Rolling(_))
    }
}

/// The currently displayed die value: 1..=6, or 0 before the first roll.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurrentFace(pub u8);

/// Background color fade, retargeted whenever the face changes.
#[derive(Resource, Clone, Copy, Debug)]
pub struct BackgroundFade {
    pub from: Color,
    pub to: Color,
    pub changed_at: Duration,
}

impl Default for BackgroundFade {
    fn default() -> Self {
        Self {
            from: face_color(0),
            to: face_color(0),
            changed_at: Duration::ZERO,
        }
    }
}

/// Per-frame sampled visual state of the die, written by the sequencer side
/// and read by the render systems.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DieVisual {
    pub face: u8,
    // Spin angles per axis in degrees.
    pub rotation_deg: Vec3,
    // Per-step snap rotation overlay on the Z axis, degrees.
    pub snap_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    pub background: Color,
}

impl Default for DieVisual {
    fn default() -> Self {
        Self {
            face: 0,
            rotation_deg: Vec3::ZERO,
            snap_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
            background: face_color(0),
        }
    }
}

impl DieVisual {
    /// True when no animation state is left over (rest pose between rolls).
    pub fn is_at_rest(&self) -> bool {
        self.rotation_deg == Vec3::ZERO
            && self.snap_deg == 0.0
            && self.scale == 1.0
            && self.opacity == 1.0
    }
}

/// Random number generator
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGen {
    fn default() -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(DEFAULT_SEED),
        }
    }
}

/// Image handles for the die faces, indexed by face value (0 = rest art).
#[derive(Resource, Clone, Default)]
pub struct FaceImages(pub [Handle<Image>; FACE_COUNT]);

impl FaceImages {
    pub fn handle(&self, face: u8) -> Handle<Image> {
        debug_assert!((face as usize) < FACE_COUNT, "face {face} out of domain");
        self.0[face as usize].clone()
    }
}

/// Component marking the die entity.
#[derive(Component)]
pub struct Die;

/// Component marking the "Rolling..." status label.
#[derive(Component)]
pub struct RollingLabel;

/// A component that marks an entity as a UI entity.
#[derive(Component)]
pub struct UIEntity;
