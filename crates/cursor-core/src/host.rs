//! What the cursor needs from its environment.
//!
//! A [`Stage`] answers geometry queries and takes transform writes. A [`Host`] additionally
//! owns event delivery and the frame scheduler; every registration it hands out is an RAII
//! subscription that detaches when dropped.

use crate::geometry::{Rect, Transform2D};
use glam::Vec2;
use std::fmt;

pub trait Stage {
    type Element: Clone + PartialEq + fmt::Debug;

    /// Live bounding box in client coordinates, or `None` if the element is detached or
    /// cannot be measured.
    fn bounding_rect(&self, element: &Self::Element) -> Option<Rect>;

    /// Immediate assignment of the cursor transform.
    fn set_transform(&self, element: &Self::Element, transform: &Transform2D);

    /// Immediate assignment of a magnetic target's pull offset.
    fn set_offset(&self, element: &Self::Element, offset: Vec2);
}

/// Where a pointer listener is attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Source<'a, E> {
    /// Pointer movement anywhere in the viewport.
    PointerMove,
    Enter(&'a E),
    Leave(&'a E),
    Move(&'a E),
}

pub type PointerHandler = Box<dyn FnMut(Vec2)>;
/// Called once per display frame with the seconds elapsed since the previous frame.
pub type FrameHandler = Box<dyn FnMut(f32)>;

pub trait Host: Stage + 'static {
    type Subscription;

    fn listen(&self, source: Source<'_, Self::Element>, handler: PointerHandler)
        -> Self::Subscription;

    fn every_frame(&self, tick: FrameHandler) -> Self::Subscription;
}
