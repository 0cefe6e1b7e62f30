pub mod components;
pub mod config;
pub mod frame_loop;
pub mod game;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use frame_loop::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Advance the Pong simulation by one frame
///
/// Order matters: each system assumes the corrections made by the ones
/// before it.
pub fn step(
    state: &mut State,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(state);

    // 2. Bounce off walls, then paddles
    check_collisions(state, config, events);

    // 3. Serve a new ball if this one left the arena
    check_scoring(state, config, score, events, rng);

    // 4. Opponent follows the ball
    move_opponent(state, config);
}
