//! `requestAnimationFrame` tick source

use game_core::TickSource;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Ticks once per display refresh, forever
pub struct AnimationFrameTicks {
    window: Window,
}

impl AnimationFrameTicks {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) {
    if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {:?}", e);
    }
}

impl TickSource for AnimationFrameTicks {
    fn start(self, mut on_tick: Box<dyn FnMut()>) {
        // The closure re-schedules itself, so it has to hold a handle to itself
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let next = slot.clone();
        let window = self.window.clone();

        *slot.borrow_mut() = Some(Closure::new(move || {
            on_tick();
            if let Some(callback) = next.borrow().as_ref() {
                request_frame(&window, callback);
            }
        }));

        if let Some(callback) = slot.borrow().as_ref() {
            request_frame(&self.window, callback);
        }
    }
}
