//! Fixed timestep simulation tick
//!
//! One call advances a round by exactly one logical step and reports the
//! phase event it produced, if any.

use glam::Vec2;

use super::phase::PhaseEvent;
use super::player::PlayerBody;
use super::state::GameState;
use crate::audio::AudioSink;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in world space, if it moved
    pub pointer: Option<Vec2>,
}

/// Advance the round by one fixed timestep.
///
/// Order: wave check, player, camera, emitters, death check. Returns as soon
/// as a phase event is known; nothing else runs on that tick.
pub fn tick<A: AudioSink + ?Sized>(state: &mut GameState, input: &TickInput, audio: &A, dt: f32) -> Option<PhaseEvent> {
    state.time_ticks += 1;

    if state.population.all_stable() {
        let n = state.next_wave_size();
        state.regenerate(n);
        state.win_count += 1;
        log::info!("Wave {} cleared at tick {}", state.win_count, state.time_ticks);

        if state.win_count >= WINS_FOR_CREDITS {
            log::info!("Win!");
            return Some(PhaseEvent::Won);
        }
    }

    state.player.update(input, &state.world);
    state.camera.follow(state.player.pos, CAMERA_FOLLOW_FRACTION);
    state.update_population(audio, dt);

    if state.player.is_dead() {
        log::info!("Dead! (tick {})", state.time_ticks);
        return Some(PhaseEvent::PlayerDied);
    }

    None
}
