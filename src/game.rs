//! Phase loops
//!
//! Each phase runs its own loop and returns the event that ends it the moment
//! that event is known. [`Game::run`] applies the event to the phase machine
//! and starts the next loop until the game quits.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::AudioSink;
use crate::consts::*;
use crate::platform::{Frame, InputEvent, Key, Platform};
use crate::scheduler::FixedStep;
use crate::settings::GameConfig;
use crate::sim::{GamePhase, GameState, PhaseEvent, Rect, TickInput, tick};

/// Menu button hit boxes in screen pixels
pub mod layout {
    use super::*;

    const BUTTON_SIZE: Vec2 = Vec2::new(400.0, 100.0);
    const CREDITS_ICON_SIZE: Vec2 = Vec2::new(50.0, 50.0);

    fn screen_center() -> Vec2 {
        Vec2::new(DISPLAY_WIDTH / 2.0, DISPLAY_HEIGHT / 2.0)
    }

    pub fn play_button() -> Rect {
        Rect::from_center_size(screen_center() + Vec2::new(0.0, 100.0), BUTTON_SIZE)
    }

    pub fn quit_button() -> Rect {
        Rect::from_center_size(screen_center() + Vec2::new(0.0, 250.0), BUTTON_SIZE)
    }

    /// Small icon in the top-right corner
    pub fn credits_button() -> Rect {
        let center = Vec2::new(
            DISPLAY_WIDTH - CREDITS_ICON_SIZE.x / 2.0 - 20.0,
            CREDITS_ICON_SIZE.y / 2.0 + 20.0,
        );
        Rect::from_center_size(center, CREDITS_ICON_SIZE)
    }

    pub fn back_button() -> Rect {
        Rect::from_center_size(screen_center() + Vec2::new(0.0, 250.0), BUTTON_SIZE)
    }
}

/// Outcome counters for a whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub deaths: u32,
    pub wins: u32,
    pub ticks: u64,
}

pub struct Game<P, A> {
    platform: P,
    audio: A,
    config: GameConfig,
    phase: GamePhase,
    /// Session generator; every round draws its own seed from it
    rng: Pcg32,
    summary: SessionSummary,
}

impl<P: Platform, A: AudioSink> Game<P, A> {
    pub fn new(platform: P, audio: A, config: GameConfig, seed: u64) -> Self {
        log::info!("Session seed: {}", seed);
        Self {
            platform,
            audio,
            config,
            phase: GamePhase::TitleScreen,
            rng: Pcg32::seed_from_u64(seed),
            summary: SessionSummary::default(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Run phase loops until the game quits
    pub fn run(&mut self) -> SessionSummary {
        while !self.phase.is_terminal() {
            let event = match self.phase {
                GamePhase::TitleScreen => self.run_titlescreen(),
                GamePhase::Playing => self.run_playing(),
                GamePhase::Credits => self.run_credits(),
                GamePhase::Quit => break,
            };
            self.apply(event);
        }
        self.summary
    }

    /// Move the phase machine. Illegal events are a caller bug.
    pub fn apply(&mut self, event: PhaseEvent) {
        match self.phase.next(event) {
            Some(next) => {
                log::info!("{:?} --{:?}--> {:?}", self.phase, event, next);
                self.phase = next;
            }
            None => debug_assert!(false, "illegal transition {:?} on {:?}", self.phase, event),
        }
    }

    pub fn run_titlescreen(&mut self) -> PhaseEvent {
        debug_assert_eq!(self.phase, GamePhase::TitleScreen);

        loop {
            while let Some(event) = self.platform.poll_event() {
                match event {
                    InputEvent::WindowClosed | InputEvent::KeyDown(Key::Escape) => return PhaseEvent::Quit,
                    InputEvent::MouseDown(pos) => {
                        if layout::play_button().contains(pos) {
                            return PhaseEvent::Play;
                        } else if layout::quit_button().contains(pos) {
                            return PhaseEvent::Quit;
                        } else if layout::credits_button().contains(pos) {
                            return PhaseEvent::ShowCredits;
                        }
                    }
                    _ => {}
                }
            }

            self.platform.present(Frame::TitleScreen);
            // Static menu, no need to spin
            self.platform.idle(MENU_IDLE_MS);
        }
    }

    pub fn run_credits(&mut self) -> PhaseEvent {
        debug_assert_eq!(self.phase, GamePhase::Credits);

        loop {
            while let Some(event) = self.platform.poll_event() {
                match event {
                    InputEvent::WindowClosed | InputEvent::KeyDown(Key::Escape) => return PhaseEvent::Quit,
                    InputEvent::MouseDown(pos) if layout::back_button().contains(pos) => {
                        return PhaseEvent::Back;
                    }
                    _ => {}
                }
            }

            self.platform.present(Frame::Credits);
            self.platform.idle(MENU_IDLE_MS);
        }
    }

    /// Start a fresh round seeded from the session generator
    pub fn run_playing(&mut self) -> PhaseEvent {
        let seed = self.rng.random::<u64>();
        log::info!("Round {} seed: {}", self.summary.rounds + 1, seed);
        let state = GameState::new(&self.config, seed);
        self.play(state)
    }

    /// Drive `state` at the fixed step until the round ends.
    ///
    /// Per frame: drain input, run every due tick, present once.
    pub fn play(&mut self, mut state: GameState) -> PhaseEvent {
        debug_assert_eq!(self.phase, GamePhase::Playing);
        self.summary.rounds += 1;

        let mut scheduler = FixedStep::new(UPDATE_STEP_MS, self.platform.now_ms());
        let mut input = TickInput::default();

        loop {
            while let Some(event) = self.platform.poll_event() {
                match event {
                    InputEvent::WindowClosed | InputEvent::KeyDown(Key::Escape) => return PhaseEvent::Quit,
                    InputEvent::MouseMotion(screen) => {
                        input.pointer = Some(state.camera.screen_to_world(screen));
                    }
                    _ => {}
                }
            }

            scheduler.accumulate(self.platform.now_ms());
            while scheduler.try_step() {
                self.summary.ticks += 1;
                if let Some(event) = tick(&mut state, &input, &self.audio, SIM_DT) {
                    match event {
                        PhaseEvent::PlayerDied => self.summary.deaths += 1,
                        PhaseEvent::Won => self.summary.wins += 1,
                        _ => {}
                    }
                    return event;
                }
            }

            self.platform.present(Frame::Playing(&state));
        }
    }
}
