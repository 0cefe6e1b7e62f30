//! Pointer input handling

use crate::error::ClientError;
use game_core::Game;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Feed `mousemove` over the canvas into the human paddle
///
/// The canvas offset is read per event so scrolling and layout changes
/// are picked up.
pub fn listen_pointer(
    canvas: &HtmlCanvasElement,
    game: Rc<RefCell<Game>>,
) -> Result<(), ClientError> {
    let target = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        game.borrow_mut().pointer_moved(event.client_y() as f32, rect.top() as f32);
    });

    canvas
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
        .map_err(|e| ClientError::Listener {
            event: "mousemove",
            reason: format!("{:?}", e),
        })?;
    // Listener lives as long as the page
    closure.forget();

    Ok(())
}
