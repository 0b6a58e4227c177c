//! Platform abstraction layer
//!
//! Handles the outside world for the phase loops:
//! - Time (millisecond clock)
//! - Input events, already decoded
//! - Idling in static menus
//! - Presenting a frame

pub mod headless;

use glam::Vec2;

use crate::sim::GameState;

pub use headless::HeadlessPlatform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Decoded input event. Positions are in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    WindowClosed,
    KeyDown(Key),
    MouseMotion(Vec2),
    MouseDown(Vec2),
}

/// What a phase loop asks the platform to draw
#[derive(Debug, Clone, Copy)]
pub enum Frame<'a> {
    TitleScreen,
    Credits,
    Playing(&'a GameState),
}

pub trait Platform {
    /// Next pending event, without blocking
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Monotonic clock in milliseconds
    fn now_ms(&self) -> u64;

    /// Block for `ms` milliseconds
    fn idle(&mut self, ms: u64);

    fn present(&mut self, frame: Frame<'_>);
}
