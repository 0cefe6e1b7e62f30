use crate::{Config, State};

/// Move the opponent paddle toward the ball
///
/// Reacts to the ball's current position only, at a fixed rate per frame,
/// and holds still while within the dead zone of the ball's center.
pub fn move_opponent(state: &mut State, config: &Config) {
    let paddle_center = state.right.center_y(config);
    let ball_center = state.ball.center(config).y;

    if paddle_center < ball_center - config.ai_dead_zone {
        state.right.y += config.ai_speed;
    } else if paddle_center > ball_center + config.ai_dead_zone {
        state.right.y -= config.ai_speed;
    }

    state.right.y = config.clamp_paddle_y(state.right.y);
}
