//! Scripted platform with a simulated clock
//!
//! Time only moves when a frame is presented or the game idles, so a run is
//! fully reproducible. Events fire once the clock reaches their timestamp.

use std::collections::VecDeque;

use super::{Frame, InputEvent, Platform};

/// Frames presented per phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub title: u64,
    pub credits: u64,
    pub playing: u64,
}

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    clock_ms: u64,
    /// Clock advance per presented frame
    frame_ms: u64,
    /// The window closes once the clock reaches this
    deadline_ms: Option<u64>,
    /// Pending events, sorted by time
    script: VecDeque<(u64, InputEvent)>,
    stats: FrameStats,
}

impl HeadlessPlatform {
    pub fn new(frame_ms: u64) -> Self {
        Self {
            clock_ms: 0,
            frame_ms,
            deadline_ms: None,
            script: VecDeque::new(),
            stats: FrameStats::default(),
        }
    }

    pub fn with_deadline(mut self, deadline_ms: u64) -> Self {
        self.deadline_ms = Some(deadline_ms);
        self
    }

    /// Queue `event` to fire at `at_ms`
    pub fn schedule(&mut self, at_ms: u64, event: InputEvent) {
        let index = self.script.partition_point(|(t, _)| *t <= at_ms);
        self.script.insert(index, (at_ms, event));
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn pending_events(&self) -> usize {
        self.script.len()
    }
}

impl Platform for HeadlessPlatform {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if self.deadline_ms.is_some_and(|deadline| self.clock_ms >= deadline) {
            return Some(InputEvent::WindowClosed);
        }
        match self.script.front() {
            Some((at, _)) if *at <= self.clock_ms => self.script.pop_front().map(|(_, event)| event),
            _ => None,
        }
    }

    fn now_ms(&self) -> u64 {
        self.clock_ms
    }

    fn idle(&mut self, ms: u64) {
        self.clock_ms += ms;
    }

    fn present(&mut self, frame: Frame<'_>) {
        match frame {
            Frame::TitleScreen => self.stats.title += 1,
            Frame::Credits => self.stats.credits += 1,
            Frame::Playing(state) => {
                self.stats.playing += 1;
                let player = state.camera.world_to_screen(state.player.pos);
                log::trace!(
                    "frame {} @ {} ms: player at ({:.0}, {:.0}) px, {} emitter(s), {} particle(s)",
                    self.stats.playing,
                    self.clock_ms,
                    player.x,
                    player.y,
                    state.population.len(),
                    state.population.particle_count()
                );
            }
        }
        self.clock_ms += self.frame_ms;
    }
}
