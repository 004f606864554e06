//! Game settings and preferences
//!
//! Loaded once at startup from a JSON file next to the binary. Missing
//! or malformed files fall back to defaults so the game always starts.

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_DELAY_MS;

/// Environment variable naming an alternate settings file
pub const SETTINGS_ENV: &str = "ELEPHANT_RUN_CONFIG";
/// Settings file looked up in the working directory by default
pub const SETTINGS_FILE: &str = "elephant-run.json";

/// Game settings; every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between presented frames, in milliseconds
    pub frame_delay_ms: u64,
    /// How many frames the headless demo runs before exiting on its own
    pub demo_frames: u64,
    /// Fixed seed for the stage palette; seeded from the clock when
    /// absent
    pub rng_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_delay_ms: FRAME_DELAY_MS,
            demo_frames: 600,
            rng_seed: None,
        }
    }
}

impl Settings {
    /// Load from `ELEPHANT_RUN_CONFIG` or the default file. A missing
    /// file is normal; a malformed one is logged and ignored.
    pub fn load() -> Self {
        let path = std::env::var(SETTINGS_ENV).unwrap_or_else(|_| SETTINGS_FILE.to_string());
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {path}");
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings in {path}: {err}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
