//! Driving the game once per display refresh

use crate::render::Surface;
use crate::Game;
use std::cell::RefCell;
use std::rc::Rc;

/// Host scheduler that calls back once per display refresh
///
/// There is no delta time: each tick advances the simulation by exactly one
/// frame, so game speed follows the refresh rate.
pub trait TickSource {
    /// Invoke `on_tick` on every tick until the host stops ticking
    fn start(self, on_tick: Box<dyn FnMut()>);
}

/// Step then draw the game on every tick of `ticks`
///
/// The game is shared so that input handlers on the same thread can keep
/// writing to it between ticks.
pub fn run<T, S>(ticks: T, game: Rc<RefCell<Game>>, mut surface: S)
where
    T: TickSource,
    S: Surface + 'static,
{
    ticks.start(Box::new(move || {
        let mut game = game.borrow_mut();
        game.step();
        game.render(&mut surface);
    }));
}
