use crate::constants::*;
use crate::events::EventListener;
use crate::frame::AnimationLoop;
use crate::style;
use cursor_core::{
    mount, CursorConfig, FrameHandler, Host, Mounted, PointerHandler, Rect, Source, Stage,
    TargetSpec, Transform2D,
};
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Anything the DOM host hands out; dropping it detaches.
pub enum Subscription {
    Listener(EventListener),
    Frame(AnimationLoop),
}

impl Drop for Subscription {
    fn drop(&mut self) {
        match self {
            Subscription::Listener(l) => log::trace!("[dom] detach {}", l.event_type()),
            Subscription::Frame(f) => f.stop(),
        }
    }
}

pub struct DomHost {
    window: web::Window,
}

impl DomHost {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Ok(Self { window })
    }

    pub fn document(&self) -> anyhow::Result<web::Document> {
        self.window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))
    }
}

impl Stage for DomHost {
    type Element = web::HtmlElement;

    fn bounding_rect(&self, element: &web::HtmlElement) -> Option<Rect> {
        if !element.is_connected() {
            return None;
        }
        let r = element.get_bounding_client_rect();
        let rect = Rect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        );
        rect.center().is_finite().then_some(rect)
    }

    fn set_transform(&self, element: &web::HtmlElement, transform: &Transform2D) {
        _ = element
            .style()
            .set_property("transform", &style::cursor_transform_css(transform));
    }

    fn set_offset(&self, element: &web::HtmlElement, offset: Vec2) {
        _ = element
            .style()
            .set_property("transform", &style::offset_css(offset));
    }
}

impl Host for DomHost {
    type Subscription = Subscription;

    fn listen(&self, source: Source<'_, web::HtmlElement>, handler: PointerHandler) -> Subscription {
        let (target, event_type): (&web::EventTarget, &'static str) = match source {
            Source::PointerMove => (self.window.as_ref(), EVENT_POINTER_MOVE),
            Source::Enter(el) => (el.as_ref(), EVENT_POINTER_ENTER),
            Source::Leave(el) => (el.as_ref(), EVENT_POINTER_LEAVE),
            Source::Move(el) => (el.as_ref(), EVENT_POINTER_MOVE),
        };
        Subscription::Listener(EventListener::pointer(target, event_type, handler))
    }

    fn every_frame(&self, tick: FrameHandler) -> Subscription {
        Subscription::Frame(AnimationLoop::start(&self.window, tick))
    }
}

/// Find the overlay's elements in the current document and mount the cursor on them.
pub fn mount_document(config: CursorConfig) -> anyhow::Result<Mounted<DomHost>> {
    let host = Rc::new(DomHost::new()?);
    let document = host.document()?;

    let anchor = query_html(&document, CURSOR_SELECTOR)?;
    if let Some(el) = &anchor {
        prepare_anchor(el);
    }
    let targets = collect_targets(&document)?;

    Ok(mount(&host, anchor, targets, config)?)
}

fn query_html(
    root: &web::Document,
    selector: &str,
) -> anyhow::Result<Option<web::HtmlElement>> {
    let el = root
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?;
    Ok(el.and_then(|e| e.dyn_into::<web::HtmlElement>().ok()))
}

/// Every `[data-hover]` control, paired with its `[data-hover-bounds]` child if it has one.
fn collect_targets(document: &web::Document) -> anyhow::Result<Vec<TargetSpec<web::HtmlElement>>> {
    let list = document
        .query_selector_all(TARGET_SELECTOR)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", TARGET_SELECTOR, e))?;

    let mut targets = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(element) = list
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let region = element
            .query_selector(HOVER_BOUNDS_SELECTOR)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            .unwrap_or_else(|| element.clone());
        targets.push(TargetSpec::new(element, region));
    }
    Ok(targets)
}

// The overlay must never swallow the events it is tracking.
fn prepare_anchor(el: &web::HtmlElement) {
    let style = el.style();
    _ = style.set_property("pointer-events", "none");
    _ = style.set_property("will-change", "transform");
}
