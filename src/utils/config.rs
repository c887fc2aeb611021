//! Optional configuration file layer for the roll timeline.
//!
//! A `dice_roller.toml` next to the binary can pin the RNG seed (for
//! reproducible runs) or retune the timeline. A missing or unparsable file
//! falls back to the built-in defaults.
use bevy::prelude::*;
use serde::Deserialize;

use crate::utils::constants::roll_constants::{
    SETTLE_PAUSE_SECS, SHUFFLE_STEPS, SHUFFLE_STEP_SECS,
};

#[cfg(not(target_arch = "wasm32"))]
use crate::log;

pub const CONFIG_FILE: &str = "dice_roller.toml";

/// Roll timeline parameters, all optional in the file.
#[derive(Resource, Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RollConfig {
    /// Fixed RNG seed; absent means a fresh seed per launch.
    pub seed: Option<u64>,
    pub shuffle_steps: u32,
    pub shuffle_step_secs: f32,
    pub settle_pause_secs: f32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_steps: SHUFFLE_STEPS,
            shuffle_step_secs: SHUFFLE_STEP_SECS,
            settle_pause_secs: SETTLE_PAUSE_SECS,
        }
    }
}

impl RollConfig {
    /// Total roll duration: every shuffle step plus the settle pause.
    pub fn roll_duration_secs(&self) -> f32 {
        self.shuffle_steps as f32 * self.shuffle_step_secs + self.settle_pause_secs
    }

    /// Read the config file if present, otherwise use defaults.
    /// On wasm there is no filesystem, so defaults always apply.
    pub fn load_or_default() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(text) = std::fs::read_to_string(CONFIG_FILE) {
            match toml::from_str(&text) {
                Ok(config) => {
                    log!("Loaded roll config from {CONFIG_FILE}");
                    return config;
                }
                Err(err) => {
                    log!("Ignoring invalid {CONFIG_FILE}: {err}");
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeline_is_three_seconds() {
        let config = RollConfig::default();
        assert!((config.roll_duration_secs() - 3.0).abs() < 1e-5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn parses_full_file() {
        let config: RollConfig = toml::from_str(
            "seed = 42\nshuffle_steps = 5\nshuffle_step_secs = 0.1\nsettle_pause_secs = 0.5\n",
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.shuffle_steps, 5);
        assert!((config.roll_duration_secs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: RollConfig = toml::from_str("seed = 7\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.shuffle_steps, SHUFFLE_STEPS);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<RollConfig>("dice_count = 2\n").is_err());
    }
}
