//! Death Box - dodge the neutrons until every atom goes stable
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, emitters, particles, waves)
//! - `sequence`: Growable storage backing emitters and particles
//! - `scheduler`: Wall-clock to fixed-tick conversion
//! - `game`: Phase loops (title, playing, credits)
//! - `platform`: Input, clock and presentation abstraction
//! - `camera`: World/screen projection
//! - `audio`: Sound effect triggers
//! - `settings`: JSON configuration

pub mod audio;
pub mod camera;
pub mod game;
pub mod platform;
pub mod scheduler;
pub mod sequence;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use game::{Game, SessionSummary};
pub use sequence::GrowableSequence;
pub use settings::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation step in milliseconds (~60 Hz)
    pub const UPDATE_STEP_MS: u64 = 1000 / 60;
    /// Fixed simulation step in seconds
    pub const SIM_DT: f32 = UPDATE_STEP_MS as f32 / 1000.0;

    /// Window size in pixels
    pub const DISPLAY_WIDTH: f32 = 1280.0;
    pub const DISPLAY_HEIGHT: f32 = 720.0;

    /// World bounds, y up
    pub const WORLD_NORTH: f32 = 600.0;
    pub const WORLD_SOUTH: f32 = -600.0;
    pub const WORLD_EAST: f32 = 800.0;
    pub const WORLD_WEST: f32 = -800.0;

    pub const PLAYER_RADIUS: f32 = 30.0;
    pub const EMITTER_RADIUS: f32 = 20.0;
    pub const PARTICLE_RADIUS: f32 = 5.0;

    /// Per-tick displacement range of a fresh particle
    pub const PARTICLE_MIN_STEP: f32 = 0.1;
    pub const PARTICLE_MAX_STEP: f32 = 5.1;

    pub const EMISSIONS_PER_EMITTER: u32 = 10;
    /// Emitters in the first wave; each later wave adds two
    pub const FIRST_WAVE_SIZE: u32 = 5;
    /// Stable waves needed to roll the credits
    pub const WINS_FOR_CREDITS: u32 = 3;
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

    /// Sleep between static menu frames
    pub const MENU_IDLE_MS: u64 = 100;
    /// Share of the remaining distance the camera covers per tick
    pub const CAMERA_FOLLOW_FRACTION: f32 = 0.015;
}
