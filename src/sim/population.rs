//! The atom system: every emitter of the current generation
//!
//! The population is the only owner of emitter and particle memory.
//! Regeneration drops the previous generation wholesale and places a fresh
//! set by rejection sampling.

use glam::Vec2;
use rand::Rng;

use super::emitter::{EmissionPattern, Emitter, EmitterTuning};
use super::geometry::{Circle, Rect};
use super::player::PlayerBody;
use crate::audio::{AudioSink, SoundEffect};
use crate::sequence::GrowableSequence;

/// Aggregate of one population tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationReport {
    pub emitted: u32,
    pub stabilized: u32,
    pub removed: u32,
    pub player_hit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EmitterPopulation {
    emitters: GrowableSequence<Emitter>,
    tuning: EmitterTuning,
    /// Number of completed `generate` calls
    generation: u32,
}

impl EmitterPopulation {
    pub fn new(tuning: EmitterTuning) -> Self {
        Self {
            emitters: GrowableSequence::new(),
            tuning,
            generation: 0,
        }
    }

    pub fn emitters(&self) -> &GrowableSequence<Emitter> {
        &self.emitters
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.emitters.size()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }

    /// Live particles across every emitter
    pub fn particle_count(&self) -> usize {
        self.emitters.iter().map(|e| e.particles().size()).sum()
    }

    /// Add a hand-placed emitter to the current generation
    pub fn insert(&mut self, emitter: Emitter) {
        self.emitters.push(emitter);
    }

    /// True when no emitter can still release or has particles in flight.
    /// An empty population is trivially stable.
    pub fn all_stable(&self) -> bool {
        self.emitters.iter().all(Emitter::is_stable)
    }

    /// Replace the population with `n` emitters that overlap neither each
    /// other nor the player.
    ///
    /// Each emitter gets `max_placement_attempts` samples. When they run out
    /// generation stops and the emitters placed so far are kept. Returns the
    /// number placed.
    pub fn generate<P, R>(&mut self, n: u32, player: &P, world: &Rect, rng: &mut R) -> u32
    where
        P: PlayerBody + ?Sized,
        R: Rng + ?Sized,
    {
        self.emitters.release();
        self.emitters.reserve(n as usize);
        self.generation += 1;

        let radius = self.tuning.emitter_radius;
        let Some(area) = world.inset(radius) else {
            log::warn!(
                "World {:?} too small for emitters of radius {}, generation {} is empty",
                world,
                radius,
                self.generation
            );
            return 0;
        };

        let burst_probability = self.tuning.burst_probability.clamp(0.0, 1.0);
        let mut placed = 0;
        while placed < n {
            let Some(pos) = self.sample_free_position(&area, player, rng) else {
                log::warn!(
                    "Gave up placing emitters after {} attempts: {}/{} placed",
                    self.tuning.max_placement_attempts,
                    placed,
                    n
                );
                break;
            };

            let pattern = if rng.random_bool(burst_probability) {
                EmissionPattern::RadialBurst {
                    count: self.tuning.burst_count,
                }
            } else {
                EmissionPattern::RandomDirection
            };
            self.emitters.push(Emitter::new(pos, radius, self.tuning.emissions_per_emitter, pattern));
            placed += 1;
        }

        log::info!("Generation {}: {} emitter(s)", self.generation, placed);
        placed
    }

    fn sample_free_position<P, R>(&self, area: &Rect, player: &P, rng: &mut R) -> Option<Vec2>
    where
        P: PlayerBody + ?Sized,
        R: Rng + ?Sized,
    {
        let radius = self.tuning.emitter_radius;
        for _ in 0..self.tuning.max_placement_attempts {
            let candidate = Circle::new(
                Vec2::new(
                    rng.random_range(area.min.x..=area.max.x),
                    rng.random_range(area.min.y..=area.max.y),
                ),
                radius,
            );
            let blocked = player.intersects(&candidate)
                || self.emitters.iter().any(|e| e.bounding_circle().intersects(&candidate));
            if !blocked {
                return Some(candidate.center);
            }
        }
        None
    }

    /// Advance every emitter by one tick.
    ///
    /// Each sound plays at most once per tick however many emitters
    /// triggered it.
    pub fn update<P, A, R>(&mut self, player: &mut P, audio: &A, world: &Rect, rng: &mut R, dt: f32) -> PopulationReport
    where
        P: PlayerBody + ?Sized,
        A: AudioSink + ?Sized,
        R: Rng + ?Sized,
    {
        let mut report = PopulationReport::default();
        for emitter in self.emitters.iter_mut() {
            let tick = emitter.update(player, world, &self.tuning, rng, dt);
            report.emitted += tick.emitted;
            report.removed += tick.removed;
            report.player_hit |= tick.player_hit;
            if tick.stabilized {
                report.stabilized += 1;
            }
        }

        if report.emitted > 0 {
            audio.play(SoundEffect::EmitParticle);
        }
        if report.stabilized > 0 {
            audio.play(SoundEffect::EmitterStable);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingAudio;
    use crate::consts::*;
    use crate::sim::player::Player;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world() -> Rect {
        Rect::from_bounds(WORLD_NORTH, WORLD_SOUTH, WORLD_EAST, WORLD_WEST)
    }

    #[test]
    fn test_generate_places_non_overlapping_emitters() {
        let mut rng = Pcg32::seed_from_u64(1234);
        let player = Player::new(Vec2::ZERO, PLAYER_RADIUS);
        let mut population = EmitterPopulation::new(EmitterTuning::default());

        assert_eq!(population.generate(25, &player, &world(), &mut rng), 25);
        assert_eq!(population.len(), 25);
        assert_eq!(population.generation(), 1);

        let emitters = population.emitters().as_slice();
        for (i, a) in emitters.iter().enumerate() {
            assert!(!player.intersects(&a.bounding_circle()));
            assert!(world().contains(a.position()));
            for b in &emitters[i + 1..] {
                assert!(!a.bounding_circle().intersects(&b.bounding_circle()));
            }
            assert_eq!(a.remaining_emissions(), EMISSIONS_PER_EMITTER);
        }
    }

    #[test]
    fn test_regenerate_discards_previous_generation() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut player = Player::new(Vec2::ZERO, PLAYER_RADIUS);
        let audio = RecordingAudio::default();
        let mut population = EmitterPopulation::new(EmitterTuning::default());

        population.generate(5, &player, &world(), &mut rng);
        population.update(&mut player, &audio, &world(), &mut rng, SIM_DT);
        assert!(population.particle_count() > 0);

        population.generate(7, &player, &world(), &mut rng);
        assert_eq!(population.len(), 7);
        assert_eq!(population.particle_count(), 0);
        assert!(population.emitters().iter().all(|e| !e.is_stable()));
    }

    #[test]
    fn test_crowded_world_stops_instead_of_hanging() {
        let mut rng = Pcg32::seed_from_u64(77);
        let player = Player::new(Vec2::new(1000.0, 1000.0), PLAYER_RADIUS);
        let tuning = EmitterTuning {
            max_placement_attempts: 50,
            ..EmitterTuning::default()
        };
        let mut population = EmitterPopulation::new(tuning);
        // Room for a single emitter of radius 20 at most
        let tiny = Rect::from_bounds(30.0, -30.0, 30.0, -30.0);

        let placed = population.generate(10, &player, &tiny, &mut rng);
        assert!(placed >= 1 && placed < 10);
        assert_eq!(population.len(), placed as usize);

        let nothing = Rect::from_bounds(5.0, -5.0, 5.0, -5.0);
        assert_eq!(population.generate(3, &player, &nothing, &mut rng), 0);
        assert!(population.all_stable());
    }

    #[test]
    fn test_sounds_play_once_per_tick() {
        let mut rng = Pcg32::seed_from_u64(21);
        let mut player = Player::new(Vec2::new(10_000.0, 10_000.0), PLAYER_RADIUS);
        let audio = RecordingAudio::default();
        let mut population = EmitterPopulation::new(EmitterTuning::default());
        let wide = Rect::from_bounds(1.0e6, -1.0e6, 1.0e6, -1.0e6);

        population.generate(6, &Player::new(Vec2::ZERO, PLAYER_RADIUS), &world(), &mut rng);
        let report = population.update(&mut player, &audio, &wide, &mut rng, SIM_DT);

        assert_eq!(report.emitted, 6);
        assert_eq!(audio.played(), vec![SoundEffect::EmitParticle]);
    }

    #[test]
    fn test_all_stable_after_emissions_clear() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut player = Player::new(Vec2::new(10_000.0, 10_000.0), PLAYER_RADIUS);
        let audio = RecordingAudio::default();
        let tuning = EmitterTuning {
            emissions_per_emitter: 2,
            ..EmitterTuning::default()
        };
        let mut population = EmitterPopulation::new(tuning);
        population.insert(Emitter::new(Vec2::ZERO, EMITTER_RADIUS, 2, EmissionPattern::RandomDirection));
        population.insert(Emitter::new(Vec2::new(100.0, 0.0), EMITTER_RADIUS, 1, EmissionPattern::RandomDirection));
        let small = Rect::from_bounds(200.0, -200.0, 200.0, -200.0);

        let mut stabilized = 0;
        for _ in 0..20_000 {
            if population.all_stable() {
                break;
            }
            stabilized += population.update(&mut player, &audio, &small, &mut rng, SIM_DT).stabilized;
        }

        assert!(population.all_stable());
        assert_eq!(stabilized, 2);
        assert_eq!(population.particle_count(), 0);
        assert!(audio.played().contains(&SoundEffect::EmitterStable));
    }
}
