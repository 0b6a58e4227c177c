//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, passed in explicitly
//! - Stable iteration order within a tick
//! - No rendering or platform dependencies

pub mod emitter;
pub mod geometry;
pub mod particle;
pub mod phase;
pub mod player;
pub mod population;
pub mod state;
pub mod tick;

pub use emitter::{EmissionPattern, Emitter, EmitterReport, EmitterState, EmitterTuning};
pub use geometry::{Circle, Rect};
pub use particle::{Particle, ParticleFate};
pub use phase::{GamePhase, PhaseEvent};
pub use player::{Player, PlayerBody};
pub use population::{EmitterPopulation, PopulationReport};
pub use state::{GameState, wave_size};
pub use tick::{TickInput, tick};
