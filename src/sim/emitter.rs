//! Atoms: stationary emitters that release neutrons until they run out
//!
//! An emitter only releases a new batch once every particle of the previous
//! batch is gone. When its budget is spent and the last particle has cleared,
//! it becomes stable for the rest of the generation.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect};
use super::particle::{Particle, ParticleFate};
use super::player::PlayerBody;
use crate::consts::*;
use crate::sequence::GrowableSequence;

/// Tunable numbers shared by every emitter of a population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterTuning {
    /// Batches each emitter releases before going stable
    pub emissions_per_emitter: u32,
    pub emitter_radius: f32,
    pub particle_radius: f32,
    /// Per-tick displacement range of a fresh particle (world units)
    pub particle_min_step: f32,
    pub particle_max_step: f32,
    /// Chance that a generated emitter uses a radial burst
    pub burst_probability: f64,
    /// Particles per radial burst
    pub burst_count: u32,
    /// Rejection-sampling budget per placed emitter
    pub max_placement_attempts: u32,
}

impl Default for EmitterTuning {
    fn default() -> Self {
        Self {
            emissions_per_emitter: EMISSIONS_PER_EMITTER,
            emitter_radius: EMITTER_RADIUS,
            particle_radius: PARTICLE_RADIUS,
            particle_min_step: PARTICLE_MIN_STEP,
            particle_max_step: PARTICLE_MAX_STEP,
            burst_probability: 0.0,
            burst_count: 6,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl EmitterTuning {
    /// Speed (units/s) of a fresh particle for a tick of `dt` seconds
    fn sample_speed<R: Rng + ?Sized>(&self, rng: &mut R, dt: f32) -> f32 {
        debug_assert!(dt > 0.0, "tick duration must be positive");
        let step = if self.particle_max_step > self.particle_min_step {
            rng.random_range(self.particle_min_step..self.particle_max_step)
        } else {
            self.particle_min_step
        };
        step / dt
    }
}

/// How an emitter releases a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmissionPattern {
    /// One particle in a uniformly random direction
    RandomDirection,
    /// `count` particles evenly spread around a random starting angle
    RadialBurst { count: u32 },
}

impl EmissionPattern {
    /// Push one batch into `out`, returning how many particles were released
    fn emit<R: Rng + ?Sized>(
        self,
        origin: Vec2,
        tuning: &EmitterTuning,
        rng: &mut R,
        dt: f32,
        out: &mut GrowableSequence<Particle>,
    ) -> u32 {
        match self {
            EmissionPattern::RandomDirection => {
                let angle = rng.random_range(0.0..TAU);
                let speed = tuning.sample_speed(rng, dt);
                out.push(Particle::new(origin, Vec2::from_angle(angle), speed, tuning.particle_radius));
                1
            }
            EmissionPattern::RadialBurst { count } => {
                let count = count.max(1);
                let phase = rng.random_range(0.0..TAU);
                let speed = tuning.sample_speed(rng, dt);
                out.reserve(out.size() + count as usize);
                for i in 0..count {
                    let angle = phase + TAU * i as f32 / count as f32;
                    out.push(Particle::new(origin, Vec2::from_angle(angle), speed, tuning.particle_radius));
                }
                count
            }
        }
    }
}

/// Lifecycle state of an emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    Active,
    Stable,
}

/// What one emitter did during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterReport {
    pub emitted: u32,
    pub removed: u32,
    pub player_hit: bool,
    pub stabilized: bool,
}

/// A stationary hazard source
#[derive(Debug, Clone)]
pub struct Emitter {
    pos: Vec2,
    radius: f32,
    remaining_emissions: u32,
    total_emissions: u32,
    pattern: EmissionPattern,
    state: EmitterState,
    particles: GrowableSequence<Particle>,
}

impl Emitter {
    pub fn new(pos: Vec2, radius: f32, emissions: u32, pattern: EmissionPattern) -> Self {
        Self {
            pos,
            radius,
            remaining_emissions: emissions,
            total_emissions: emissions,
            pattern,
            // An emitter with nothing to release has nothing to wait for
            state: if emissions == 0 {
                EmitterState::Stable
            } else {
                EmitterState::Active
            },
            particles: GrowableSequence::new(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    pub fn state(&self) -> EmitterState {
        self.state
    }

    pub fn is_stable(&self) -> bool {
        self.state == EmitterState::Stable
    }

    pub fn remaining_emissions(&self) -> u32 {
        self.remaining_emissions
    }

    pub fn total_emissions(&self) -> u32 {
        self.total_emissions
    }

    pub fn pattern(&self) -> EmissionPattern {
        self.pattern
    }

    pub fn particles(&self) -> &GrowableSequence<Particle> {
        &self.particles
    }

    /// Fraction of the emission budget already spent (1.0 = fully stable)
    pub fn stability(&self) -> f32 {
        if self.total_emissions == 0 {
            return 1.0;
        }
        1.0 - self.remaining_emissions as f32 / self.total_emissions as f32
    }

    /// Advance this emitter and its particles by one tick
    pub fn update<P, R>(
        &mut self,
        player: &mut P,
        world: &Rect,
        tuning: &EmitterTuning,
        rng: &mut R,
        dt: f32,
    ) -> EmitterReport
    where
        P: PlayerBody + ?Sized,
        R: Rng + ?Sized,
    {
        let mut report = EmitterReport::default();

        if self.particles.is_empty() && self.remaining_emissions > 0 {
            self.remaining_emissions -= 1;
            report.emitted = self.pattern.emit(self.pos, tuning, rng, dt, &mut self.particles);
            log::debug!(
                "Emitter at ({:.0}, {:.0}) released {} particle(s), {} batch(es) left",
                self.pos.x,
                self.pos.y,
                report.emitted,
                self.remaining_emissions
            );
        }

        // A removal swaps the last particle into slot `i`, which still has to
        // be stepped this tick, so `i` only advances past survivors.
        let mut i = 0;
        while i < self.particles.size() {
            let fate = self.particles.at_mut(i).step(player, world, dt);
            if fate.is_removed() {
                self.particles.remove_unordered(i);
                report.removed += 1;
                report.player_hit |= fate == ParticleFate::HitPlayer;
            } else {
                i += 1;
            }
        }

        if self.state == EmitterState::Active && self.remaining_emissions == 0 && self.particles.is_empty() {
            self.state = EmitterState::Stable;
            report.stabilized = true;
            log::debug!("Emitter at ({:.0}, {:.0}) is stable", self.pos.x, self.pos.y);
        }

        report
    }
}
