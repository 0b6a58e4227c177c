//! State of one round of play
//!
//! A round starts when the player presses play and ends on death, victory or
//! quit. Nothing here outlives the round.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::Rect;
use super::player::Player;
use super::population::{EmitterPopulation, PopulationReport};
use crate::audio::AudioSink;
use crate::camera::Camera;
use crate::consts::*;
use crate::settings::GameConfig;

/// Emitters spawned by the `k`-th regeneration
#[inline]
pub fn wave_size(k: u32) -> u32 {
    2 * k + FIRST_WAVE_SIZE
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub world: Rect,
    pub player: Player,
    pub camera: Camera,
    pub population: EmitterPopulation,
    /// Waves that went fully stable so far
    pub win_count: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a round with the first wave already placed
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let world = config.world.rect();
        let center = world.center();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            world,
            player: Player::new(center, config.player_radius),
            camera: Camera::new(Vec2::ZERO, Vec2::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)),
            population: EmitterPopulation::new(config.emitters.clone()),
            win_count: 0,
            time_ticks: 0,
        };

        state.camera.look_at(state.player.pos);
        state.regenerate(FIRST_WAVE_SIZE);
        state
    }

    /// Size of the wave placed when the current one goes stable
    pub fn next_wave_size(&self) -> u32 {
        wave_size(self.win_count)
    }

    /// Replace the population with `n` freshly placed emitters
    pub fn regenerate(&mut self, n: u32) -> u32 {
        self.population.generate(n, &self.player, &self.world, &mut self.rng)
    }

    /// Advance every emitter and particle against the player
    pub fn update_population<A: AudioSink + ?Sized>(&mut self, audio: &A, dt: f32) -> PopulationReport {
        self.population
            .update(&mut self.player, audio, &self.world, &mut self.rng, dt)
    }
}
