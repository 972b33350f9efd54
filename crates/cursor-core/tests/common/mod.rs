// In-memory host used by the integration tests: elements are string ids, geometry is a
// table of rects, and writes are recorded for inspection.

#![allow(dead_code)]

use cursor_core::{FrameHandler, Host, PointerHandler, Rect, Source, Stage, Transform2D};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

pub type El = &'static str;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Kind {
    Frame,
    PointerMove,
    Enter(El),
    Leave(El),
    Move(El),
}

enum Handler {
    Pointer(PointerHandler),
    Frame(FrameHandler),
}

struct Entry {
    id: u64,
    kind: Kind,
    handler: Rc<RefCell<Handler>>,
}

type Registry = Rc<RefCell<Vec<Entry>>>;

pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Vec<Entry>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.upgrade() {
            reg.borrow_mut().retain(|e| e.id != self.id);
        }
    }
}

#[derive(Default)]
pub struct FakeHost {
    rects: RefCell<HashMap<El, Rect>>,
    transforms: RefCell<Vec<(El, Transform2D)>>,
    offsets: RefCell<Vec<(El, Vec2)>>,
    registry: Registry,
    next_id: Cell<u64>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn set_rect(&self, el: El, rect: Rect) {
        self.rects.borrow_mut().insert(el, rect);
    }

    pub fn detach(&self, el: El) {
        self.rects.borrow_mut().remove(el);
    }

    pub fn live_listeners(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn transform_writes(&self) -> usize {
        self.transforms.borrow().len()
    }

    pub fn last_transform(&self) -> Option<Transform2D> {
        self.transforms.borrow().last().map(|(_, t)| *t)
    }

    pub fn offset_writes(&self, el: El) -> usize {
        self.offsets.borrow().iter().filter(|(e, _)| *e == el).count()
    }

    pub fn last_offset(&self, el: El) -> Option<Vec2> {
        self.offsets
            .borrow()
            .iter()
            .rev()
            .find(|(e, _)| *e == el)
            .map(|(_, o)| *o)
    }

    fn handlers(&self, kind: Kind) -> Vec<Rc<RefCell<Handler>>> {
        self.registry
            .borrow()
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.handler.clone())
            .collect()
    }

    fn dispatch_pointer(&self, kind: Kind, p: Vec2) {
        for h in self.handlers(kind) {
            if let Handler::Pointer(f) = &mut *h.borrow_mut() {
                f(p);
            }
        }
    }

    pub fn frame(&self, dt: f32) {
        for h in self.handlers(Kind::Frame) {
            if let Handler::Frame(f) = &mut *h.borrow_mut() {
                f(dt);
            }
        }
    }

    pub fn frames(&self, count: usize, dt: f32) {
        for _ in 0..count {
            self.frame(dt);
        }
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        self.dispatch_pointer(Kind::PointerMove, Vec2::new(x, y));
    }

    pub fn enter(&self, region: El, x: f32, y: f32) {
        self.dispatch_pointer(Kind::Enter(region), Vec2::new(x, y));
    }

    pub fn leave(&self, region: El, x: f32, y: f32) {
        self.dispatch_pointer(Kind::Leave(region), Vec2::new(x, y));
    }

    /// Pointer moving inside `region`: the region sees it first, then the window.
    pub fn move_within(&self, region: El, x: f32, y: f32) {
        self.dispatch_pointer(Kind::Move(region), Vec2::new(x, y));
        self.pointer_move(x, y);
    }

    fn register(&self, kind: Kind, handler: Handler) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.registry.borrow_mut().push(Entry {
            id,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }
}

impl Stage for FakeHost {
    type Element = El;

    fn bounding_rect(&self, element: &El) -> Option<Rect> {
        self.rects.borrow().get(element).copied()
    }

    fn set_transform(&self, element: &El, transform: &Transform2D) {
        self.transforms.borrow_mut().push((*element, *transform));
    }

    fn set_offset(&self, element: &El, offset: Vec2) {
        self.offsets.borrow_mut().push((*element, offset));
    }
}

impl Host for FakeHost {
    type Subscription = Subscription;

    fn listen(&self, source: Source<'_, El>, handler: PointerHandler) -> Subscription {
        let kind = match source {
            Source::PointerMove => Kind::PointerMove,
            Source::Enter(e) => Kind::Enter(*e),
            Source::Leave(e) => Kind::Leave(*e),
            Source::Move(e) => Kind::Move(*e),
        };
        self.register(kind, Handler::Pointer(handler))
    }

    fn every_frame(&self, tick: FrameHandler) -> Subscription {
        self.register(Kind::Frame, Handler::Frame(tick))
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

pub fn approx_v(a: Vec2, b: Vec2) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}
