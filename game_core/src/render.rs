//! Drawing the arena
//!
//! The core never talks to a real canvas; it paints through [`Surface`],
//! which the host implements.

use crate::{Config, Params, State};
use glam::Vec2;

/// 2D drawing capability supplied by the host
///
/// Calls are fire-and-forget: the renderer never reads pixels back.
pub trait Surface {
    /// Pixel size of the drawing area, queried once at startup
    fn size(&self) -> (f32, f32);

    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);

    fn draw_dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f32], color: &str);
}

/// Paint the current state: both paddles, the ball and the center line
pub fn draw_frame(surface: &mut dyn Surface, state: &State, config: &Config) {
    surface.clear(0.0, 0.0, config.arena_width, config.arena_height);

    for paddle in [&state.left, &state.right] {
        surface.fill_rect(
            config.paddle_x(paddle.side),
            paddle.y,
            config.paddle_width,
            config.paddle_height,
            Params::COLOR,
        );
    }

    // Ball is a circle inscribed in its bounding box
    surface.fill_circle(
        state.ball.center(config),
        config.ball_size / 2.0,
        Params::COLOR,
    );

    let mid_x = config.arena_width / 2.0;
    surface.draw_dashed_line(
        Vec2::new(mid_x, 0.0),
        Vec2::new(mid_x, config.arena_height),
        &Params::CENTER_LINE_DASH,
        Params::COLOR,
    );
}
