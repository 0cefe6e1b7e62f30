use crate::{Config, State};

/// Point the human paddle at the pointer
///
/// `client_y` is the pointer position in page coordinates and
/// `surface_top` the drawing surface's top offset in the same space.
/// The paddle is centered on the pointer and clamped to the arena.
/// Later calls simply overwrite earlier ones.
pub fn track_pointer(state: &mut State, config: &Config, client_y: f32, surface_top: f32) {
    let pointer_y = client_y - surface_top;
    let target = pointer_y - config.paddle_height / 2.0;
    state.left.y = config.clamp_paddle_y(target);
}
