use cursor_core::PointerHandler;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A pointer listener that stays attached for as long as this value lives.
pub struct EventListener {
    target: web::EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl EventListener {
    /// Attach `handler` to `event_type` on `target`, feeding it client coordinates.
    pub fn pointer(
        target: &web::EventTarget,
        event_type: &'static str,
        mut handler: PointerHandler,
    ) -> Self {
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            handler(client_pos(&ev));
        }) as Box<dyn FnMut(_)>);

        if let Err(e) =
            target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] failed to attach {}: {:?}", event_type, e);
        }

        Self {
            target: target.clone(),
            event_type,
            closure,
        }
    }

    #[inline]
    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

#[inline]
pub fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
