use crate::State;

/// Move ball by one frame of velocity
pub fn move_ball(state: &mut State) {
    state.ball.pos += state.ball.vel;
}
