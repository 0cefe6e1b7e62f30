use crate::{Aabb, Config, GameRng};
use glam::Vec2;

/// Which edge of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // human, pointer controlled
    Right, // scripted opponent
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge Y (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(config.paddle_x(self.side), self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Ball component - the pong ball
///
/// `pos` is the top-left corner of its square bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn center(&self, config: &Config) -> Vec2 {
        self.pos + Vec2::splat(config.ball_size / 2.0)
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(config.ball_size))
    }

    /// Reset ball to center with a random serve
    ///
    /// Horizontal speed is always `ball_speed` toward a random side;
    /// vertical speed is uniform in `[-ball_speed, ball_speed]`.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();

        let dir_x = if rng.coin_flip() { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            config.ball_speed * dir_x,
            config.ball_speed * rng.unit_range(),
        );
    }
}
