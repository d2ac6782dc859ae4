//! Runtime settings
//!
//! Loaded from a JSON file. Every field has a default, so a partial (or
//! missing) file is fine.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FPS, SPAWN_INTERVAL};

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error while reading the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON or wrong field types.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Value parsed but out of range.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Bubble overlay settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame pump rate (frames per second)
    pub fps: u32,
    /// Time between spawns (milliseconds)
    pub spawn_interval_ms: u64,
    /// RNG seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Frames to run before exiting; unbounded when absent
    pub frames: Option<u64>,

    // === Headless compositor ===
    /// Width announced in the configure event
    pub output_width: u32,
    /// Height announced in the configure event
    pub output_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,
            spawn_interval_ms: SPAWN_INTERVAL.as_millis() as u64,
            seed: None,
            frames: None,

            output_width: 1920,
            output_height: 1080,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const CONFIG_ENV: &'static str = "BUBBLES_CONFIG";

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults (with a warning) on error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Failed to load settings from {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.fps == 0 {
            return Err(SettingsError::Invalid {
                field: "fps",
                reason: "must be at least 1".into(),
            });
        }
        if self.spawn_interval_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "spawn_interval_ms",
                reason: "must be at least 1".into(),
            });
        }
        if self.output_width == 0 || self.output_height == 0 {
            return Err(SettingsError::Invalid {
                field: "output_width/output_height",
                reason: format!("{}x{} is empty", self.output_width, self.output_height),
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
