//! Neutron particles: straight-line movers released by emitters

use glam::Vec2;

use super::geometry::{Circle, Rect};
use super::player::PlayerBody;

/// What happened to a particle during its step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleFate {
    /// Still inside the world, keep it
    Alive,
    /// Touched the player, remove it
    HitPlayer,
    /// Left the world bounds, remove it
    OutOfBounds,
}

impl ParticleFate {
    #[inline]
    pub fn is_removed(self) -> bool {
        self != ParticleFate::Alive
    }
}

/// A moving hazard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Unit direction
    pub dir: Vec2,
    /// World units per second
    pub speed: f32,
    pub radius: f32,
}

impl Particle {
    pub fn new(pos: Vec2, dir: Vec2, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            dir,
            speed,
            radius,
        }
    }

    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Move by one step, then test the player before the world edge.
    ///
    /// A player hit marks the player dead.
    pub fn step<P: PlayerBody + ?Sized>(&mut self, player: &mut P, world: &Rect, dt: f32) -> ParticleFate {
        self.pos += self.dir * self.speed * dt;

        if player.intersects(&self.bounding_circle()) {
            player.mark_dead();
            ParticleFate::HitPlayer
        } else if !world.contains(self.pos) {
            ParticleFate::OutOfBounds
        } else {
            ParticleFate::Alive
        }
    }
}
