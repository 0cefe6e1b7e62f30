//! Browser client for Pong
//!
//! Binds `game_core` to an HTML canvas: Canvas 2D drawing,
//! `requestAnimationFrame` ticks and mouse input.
//! Only built for the wasm32 target.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod error;
mod input;
mod ticker;

use canvas::CanvasSurface;
use error::ClientError;
use game_core::{Config, Game, GameRng, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use ticker::AnimationFrameTicks;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Keeps a running game reachable from JS
#[wasm_bindgen]
pub struct PongHandle {
    game: Rc<RefCell<Game>>,
}

#[wasm_bindgen]
impl PongHandle {
    /// Points won by the human (left) player
    #[wasm_bindgen(getter)]
    pub fn score_left(&self) -> u32 {
        self.game.borrow().score.left
    }

    /// Points won by the opponent (right)
    #[wasm_bindgen(getter)]
    pub fn score_right(&self) -> u32 {
        self.game.borrow().score.right
    }
}

/// Start a game on the canvas with the given element id
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<PongHandle, JsValue> {
    console_error_panic_hook::set_once();
    // Logger may already be set if the page starts more than one game
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&ClientError::from(e).to_string()));
    }

    Ok(start_game(canvas_id)?)
}

fn start_game(canvas_id: &str) -> Result<PongHandle, ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| ClientError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ClientError::NotACanvas(canvas_id.to_string()))?;

    let surface = CanvasSurface::new(&canvas)?;
    let (width, height) = surface.size();
    let game = Rc::new(RefCell::new(Game::new(
        Config::with_arena(width, height),
        GameRng::from_entropy(),
    )));

    input::listen_pointer(&canvas, game.clone())?;
    game_core::run(AnimationFrameTicks::new(window), game.clone(), surface);

    log::info!("Pong running on #{}", canvas_id);
    Ok(PongHandle { game })
}
