//! Attaching a [`Cursor`] to a [`Host`] and tearing it down again.
//!
//! Everything acquired here lives in [`Mounted`]; dropping it releases the frame
//! registration and every listener.

use crate::config::CursorConfig;
use crate::cursor::Cursor;
use crate::error::CursorError;
use crate::host::{Host, Source};
use crate::magnet::TargetSpec;
use glam::Vec2;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

pub struct Mounted<H: Host> {
    cursor: Rc<RefCell<Cursor<H::Element>>>,
    subscriptions: Vec<H::Subscription>,
}

impl<H: Host> Mounted<H> {
    pub fn cursor(&self) -> Ref<'_, Cursor<H::Element>> {
        self.cursor.borrow()
    }

    /// Frame registration plus every pointer listener.
    #[inline]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl<H: Host> Drop for Mounted<H> {
    fn drop(&mut self) {
        let n = self.subscriptions.len();
        self.subscriptions.clear();
        log::info!("[cursor] unmounted ({} subscriptions released)", n);
    }
}

/// Build a cursor on `anchor` and wire it to `host`.
///
/// Nothing is attached unless the config is valid and the anchor exists.
pub fn mount<H: Host>(
    host: &Rc<H>,
    anchor: Option<H::Element>,
    targets: Vec<TargetSpec<H::Element>>,
    config: CursorConfig,
) -> Result<Mounted<H>, CursorError> {
    config.validate()?;
    let anchor = anchor.ok_or(CursorError::MissingAnchor)?;

    let regions: Vec<H::Element> = targets.iter().map(|t| t.hover_region.clone()).collect();
    let cursor = Rc::new(RefCell::new(Cursor::new(anchor, targets, config)));
    let mut subscriptions = Vec::with_capacity(2 + regions.len() * 3);

    {
        let (h, c) = (host.clone(), cursor.clone());
        subscriptions.push(host.every_frame(Box::new(move |dt: f32| {
            c.borrow_mut().frame(dt, &*h);
        })));
    }
    {
        let (h, c) = (host.clone(), cursor.clone());
        subscriptions.push(host.listen(
            Source::PointerMove,
            Box::new(move |p: Vec2| c.borrow_mut().pointer_move(p, &*h)),
        ));
    }

    for (i, region) in regions.iter().enumerate() {
        let c = cursor.clone();
        subscriptions.push(host.listen(
            Source::Enter(region),
            Box::new(move |_: Vec2| c.borrow_mut().hover_enter(i)),
        ));

        let c = cursor.clone();
        subscriptions.push(host.listen(
            Source::Leave(region),
            Box::new(move |_: Vec2| {
                let mut cursor = c.borrow_mut();
                cursor.hover_exit(i);
                cursor.magnet_release(i);
            }),
        ));

        let (h, c) = (host.clone(), cursor.clone());
        subscriptions.push(host.listen(
            Source::Move(region),
            Box::new(move |p: Vec2| c.borrow_mut().magnet_move(i, p, &*h)),
        ));
    }

    log::info!(
        "[cursor] mounted with {} magnetic targets ({} subscriptions)",
        regions.len(),
        subscriptions.len()
    );
    Ok(Mounted {
        cursor,
        subscriptions,
    })
}
