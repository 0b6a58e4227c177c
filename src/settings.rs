//! Game configuration
//!
//! Loaded from an optional JSON file. Every field has a default, so a partial
//! file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{EmitterTuning, Rect};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// World edges in world units (y up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub north: f32,
    pub south: f32,
    pub east: f32,
    pub west: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            north: WORLD_NORTH,
            south: WORLD_SOUTH,
            east: WORLD_EAST,
            west: WORLD_WEST,
        }
    }
}

impl WorldBounds {
    pub fn rect(&self) -> Rect {
        Rect::from_bounds(self.north, self.south, self.east, self.west)
    }
}

/// Audio preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Directory holding the `sfx/` samples
    pub asset_dir: PathBuf,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// Pacing of the headless session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Simulated wall-clock time between presented frames
    pub frame_ms: u64,
    /// Simulated time after which the window is closed
    pub max_duration_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            frame_ms: 8,
            max_duration_ms: 120_000,
        }
    }
}

/// Everything configurable about a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,
    pub world: WorldBounds,
    pub player_radius: f32,
    pub emitters: EmitterTuning,
    pub audio: AudioSettings,
    pub session: SessionSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            world: WorldBounds::default(),
            player_radius: PLAYER_RADIUS,
            emitters: EmitterTuning::default(),
            audio: AudioSettings::default(),
            session: SessionSettings::default(),
        }
    }
}

impl GameConfig {
    /// Read and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from '{}'", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e} - using default config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.world;
        if w.north <= w.south || w.east <= w.west {
            return Err(ConfigError::Invalid(format!(
                "world bounds are inverted (north {}, south {}, east {}, west {})",
                w.north, w.south, w.east, w.west
            )));
        }
        if self.player_radius <= 0.0 {
            return Err(ConfigError::Invalid("player_radius must be positive".into()));
        }

        let e = &self.emitters;
        if e.emitter_radius <= 0.0 || e.particle_radius <= 0.0 {
            return Err(ConfigError::Invalid("emitter and particle radii must be positive".into()));
        }
        if e.particle_min_step <= 0.0 || e.particle_max_step < e.particle_min_step {
            return Err(ConfigError::Invalid(format!(
                "particle step range [{}, {}] must be positive and ordered",
                e.particle_min_step, e.particle_max_step
            )));
        }
        if !(0.0..=1.0).contains(&e.burst_probability) {
            return Err(ConfigError::Invalid(format!(
                "burst_probability {} is outside [0, 1]",
                e.burst_probability
            )));
        }
        if e.max_placement_attempts == 0 {
            return Err(ConfigError::Invalid("max_placement_attempts must be at least 1".into()));
        }
        if self.session.frame_ms == 0 {
            return Err(ConfigError::Invalid("session.frame_ms must be at least 1".into()));
        }
        Ok(())
    }
}
