use crate::{Ball, Config, GameRng, Paddle, Side};
use glam::Vec2;

/// Mutable simulation state: both paddles and the ball
#[derive(Debug, Clone)]
pub struct State {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
}

impl State {
    /// Paddles centered, ball served from the middle
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(config, rng);

        Self {
            left: Paddle::new(Side::Left, config.paddle_spawn_y()),
            right: Paddle::new(Side::Right, config.paddle_spawn_y()),
            ball,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
