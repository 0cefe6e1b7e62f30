use crate::render::{draw_frame, Surface};
use crate::systems::track_pointer;
use crate::{Config, Events, GameRng, Score, State};

/// A running match: configuration plus everything that changes per frame
pub struct Game {
    pub config: Config,
    pub state: State,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
}

impl Game {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let state = State::new(&config, &mut rng);
        log::info!(
            "new game on {}x{} arena, serving at {:?}",
            config.arena_width,
            config.arena_height,
            state.ball.vel
        );

        Self {
            config,
            state,
            score: Score::new(),
            events: Events::new(),
            rng,
        }
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self) {
        crate::step(
            &mut self.state,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Pointer moved over the surface (page Y and surface top offset)
    pub fn pointer_moved(&mut self, client_y: f32, surface_top: f32) {
        track_pointer(&mut self.state, &self.config, client_y, surface_top);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        draw_frame(surface, &self.state, &self.config);
    }
}
