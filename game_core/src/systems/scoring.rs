use crate::{Config, Events, GameRng, Score, State};

/// Serve a fresh ball once the current one has left the arena
///
/// The ball must be fully past an edge by one ball size before it counts.
pub fn check_scoring(
    state: &mut State,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let ball = &mut state.ball;

    if ball.pos.x < -config.ball_size {
        score.increment_right();
        events.right_scored = true;
    } else if ball.pos.x > config.arena_width + config.ball_size {
        score.increment_left();
        events.left_scored = true;
    } else {
        return;
    }

    ball.reset(config, rng);
    log::debug!(
        "point scored ({} - {}), serving at {:?}",
        score.left,
        score.right,
        ball.vel
    );
}
