//! The player avatar
//!
//! The simulation only sees the player as a collision circle plus a death
//! flag, through [`PlayerBody`].

use glam::Vec2;

use super::geometry::{Circle, Rect};
use super::tick::TickInput;

/// What particles and emitter placement need to know about the player
pub trait PlayerBody {
    fn position(&self) -> Vec2;
    fn intersects(&self, circle: &Circle) -> bool;
    fn mark_dead(&mut self);
    fn is_dead(&self) -> bool;
}

/// Pointer-driven avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    dead: bool,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            dead: false,
        }
    }

    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Follow the pointer, staying inside the world
    pub fn update(&mut self, input: &TickInput, world: &Rect) {
        if let Some(target) = input.pointer {
            self.pos = world.clamp(target);
        }
    }
}

impl PlayerBody for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn intersects(&self, circle: &Circle) -> bool {
        self.bounding_circle().intersects(circle)
    }

    fn mark_dead(&mut self) {
        self.dead = true;
    }

    fn is_dead(&self) -> bool {
        self.dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_follows_pointer_inside_world() {
        let world = Rect::from_bounds(100.0, -100.0, 100.0, -100.0);
        let mut player = Player::new(Vec2::ZERO, 30.0);

        player.update(&TickInput { pointer: Some(Vec2::new(40.0, -20.0)) }, &world);
        assert_eq!(player.position(), Vec2::new(40.0, -20.0));

        player.update(&TickInput { pointer: Some(Vec2::new(500.0, 0.0)) }, &world);
        assert_eq!(player.position(), Vec2::new(100.0, 0.0));

        // No pointer movement keeps the position
        player.update(&TickInput::default(), &world);
        assert_eq!(player.position(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_player_death_flag() {
        let mut player = Player::new(Vec2::ZERO, 30.0);
        assert!(!player.is_dead());
        assert!(player.intersects(&Circle::new(Vec2::new(34.0, 0.0), 5.0)));
        player.mark_dead();
        assert!(player.is_dead());
    }
}
