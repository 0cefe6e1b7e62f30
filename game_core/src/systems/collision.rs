use crate::{Config, Events, Side, State};

/// Check ball collisions with walls, then the left paddle, then the right
pub fn check_collisions(state: &mut State, config: &Config, events: &mut Events) {
    bounce_off_walls(state, config, events);
    bounce_off_paddle(state, config, Side::Left, events);
    bounce_off_paddle(state, config, Side::Right, events);
}

/// Reflect the ball off the top and bottom walls
///
/// Both walls are checked every frame, independently of each other.
pub fn bounce_off_walls(state: &mut State, config: &Config, events: &mut Events) {
    let ball = &mut state.ball;

    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
    if ball.pos.y + config.ball_size >= config.arena_height {
        ball.pos.y = config.arena_height - config.ball_size;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Reflect the ball off one paddle and add english
///
/// Only X is corrected on contact: the ball is snapped flush against the
/// paddle's inner face even when it came in over the top or bottom edge.
pub fn bounce_off_paddle(state: &mut State, config: &Config, side: Side, events: &mut Events) {
    let paddle = *state.paddle(side);
    let ball = &mut state.ball;

    if !ball.bounds(config).overlaps(&paddle.bounds(config)) {
        return;
    }

    let paddle_x = config.paddle_x(side);
    ball.pos.x = match side {
        Side::Left => paddle_x + config.paddle_width,
        Side::Right => paddle_x - config.ball_size,
    };
    ball.vel.x = -ball.vel.x;

    // Off-center hits steer the ball away from the paddle's middle
    let hit_offset = ball.center(config).y - paddle.center_y(config);
    ball.vel.y += hit_offset * config.english_factor;

    events.ball_hit_paddle = true;
}
