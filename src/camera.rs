//! 2D camera: world (y up) to screen (y down, origin top-left)

use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// World position shown at the center of the screen
    pub pos: Vec2,
    /// Screen size in pixels
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(pos: Vec2, viewport: Vec2) -> Self {
        Self { pos, viewport }
    }

    pub fn look_at(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let rel = world - self.pos;
        Vec2::new(rel.x + self.viewport.x / 2.0, self.viewport.y / 2.0 - rel.y)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x - self.viewport.x / 2.0 + self.pos.x,
            self.viewport.y / 2.0 - screen.y + self.pos.y,
        )
    }

    /// Close `fraction` of the gap to `target`
    pub fn follow(&mut self, target: Vec2, fraction: f32) {
        if target == self.pos {
            return;
        }
        self.pos += (target - self.pos) * fraction;
    }
}
