use crate::constants::MAX_FRAME_DT_SEC;
use cursor_core::FrameHandler;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that calls its handler with the elapsed seconds.
///
/// The tick closure re-schedules itself through a shared slot; `stop` cancels the pending
/// frame and empties the slot, which frees the closure.
pub struct AnimationLoop {
    window: web::Window,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl AnimationLoop {
    pub fn start(window: &web::Window, mut on_frame: FrameHandler) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        let window_clone = window.clone();
        let mut last_instant = Instant::now();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now = Instant::now();
            let dt_sec = (now - last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
            last_instant = now;
            on_frame(dt_sec);
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_clone.set(request_frame(&window_clone, cb));
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(request_frame(window, cb));
        }

        Self {
            window: window.clone(),
            pending,
            tick,
        }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &web::Window, cb: &Closure<dyn FnMut()>) -> Option<i32> {
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
