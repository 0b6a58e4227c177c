//! Death Box entry point
//!
//! Runs a scripted headless session: the pointer sweeps a circle around the
//! screen center and Play is clicked again whenever the title screen is up.
//!
//! Usage: `death-box [config.json]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use death_box::consts::*;
use death_box::game::layout;
use death_box::platform::{HeadlessPlatform, InputEvent};
use death_box::{AudioManager, Game, GameConfig, SoundEffect};

/// Pointer samples per sweep
const SWEEP_SAMPLES: u64 = 120;
const SWEEP_INTERVAL_MS: u64 = 50;
const SWEEP_RADIUS: f32 = 200.0;
const REPLAY_INTERVAL_MS: u64 = 5_000;

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn scripted_platform(config: &GameConfig) -> HeadlessPlatform {
    let duration = config.session.max_duration_ms;
    let mut platform = HeadlessPlatform::new(config.session.frame_ms).with_deadline(duration);
    let center = Vec2::new(DISPLAY_WIDTH / 2.0, DISPLAY_HEIGHT / 2.0);

    for at in (0..duration).step_by(REPLAY_INTERVAL_MS as usize) {
        platform.schedule(at, InputEvent::MouseDown(layout::play_button().center()));
    }
    for (i, at) in (0..duration).step_by(SWEEP_INTERVAL_MS as usize).enumerate() {
        let angle = (i as u64 % SWEEP_SAMPLES) as f32 / SWEEP_SAMPLES as f32 * std::f32::consts::TAU;
        platform.schedule(at, InputEvent::MouseMotion(center + Vec2::from_angle(angle) * SWEEP_RADIUS));
    }
    platform
}

fn main() {
    env_logger::init();
    log::info!("Death Box (headless) starting...");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref());
    let seed = config.seed.unwrap_or_else(clock_seed);

    let platform = scripted_platform(&config);
    let audio = AudioManager::new(&config.audio);
    let mut game = Game::new(platform, audio, config, seed);

    let summary = game.run();
    log::info!(
        "Session over: {} round(s), {} death(s), {} win(s), {} tick(s)",
        summary.rounds,
        summary.deaths,
        summary.wins,
        summary.ticks
    );

    let frames = game.platform().stats();
    log::info!(
        "Frames: {} title, {} credits, {} playing",
        frames.title,
        frames.credits,
        frames.playing
    );
    for effect in SoundEffect::ALL {
        log::info!(
            "{:?}: loaded={}, played {} time(s)",
            effect,
            game.audio().is_loaded(effect),
            game.audio().play_count(effect)
        );
    }
}
