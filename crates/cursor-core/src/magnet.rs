//! Magnetic pull: the hovered control drifts toward the pointer on an elastic ease.

use crate::config::CursorConfig;
use crate::host::Stage;
use crate::tween::QuickTo;
use glam::Vec2;

/// One registered interactive control.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetSpec<E> {
    /// Receives the pull offset.
    pub element: E,
    /// Its enter/exit defines capture. May be the element itself.
    pub hover_region: E,
}

impl<E: Clone> TargetSpec<E> {
    pub fn new(element: E, hover_region: E) -> Self {
        Self {
            element,
            hover_region,
        }
    }

    /// A target whose hover region is the element itself.
    pub fn solo(element: E) -> Self {
        Self {
            hover_region: element.clone(),
            element,
        }
    }
}

/// Per-target pull state. The two handles are created once and reused for every move.
#[derive(Clone, Debug)]
pub struct MagneticTarget<E> {
    element: E,
    pull: f32,
    x: QuickTo,
    y: QuickTo,
}

impl<E: Clone + PartialEq + std::fmt::Debug> MagneticTarget<E> {
    pub fn new(element: E, config: &CursorConfig) -> Self {
        let ease = config.magnet_ease();
        Self {
            element,
            pull: config.magnet_pull,
            x: QuickTo::new(0.0, config.magnet_duration_sec, ease),
            y: QuickTo::new(0.0, config.magnet_duration_sec, ease),
        }
    }

    #[inline]
    pub fn element(&self) -> &E {
        &self.element
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.y.is_animating()
    }

    /// Pull toward `pointer` by a fraction of its displacement from the element's center.
    pub fn track<S>(&mut self, pointer: Vec2, stage: &S)
    where
        S: Stage<Element = E> + ?Sized,
    {
        let Some(rect) = stage.bounding_rect(&self.element) else {
            self.release();
            return;
        };
        let d = (pointer - rect.center()) * self.pull;
        self.x.to(d.x);
        self.y.to(d.y);
    }

    /// Ease back to rest.
    pub fn release(&mut self) {
        self.x.to(0.0);
        self.y.to(0.0);
    }

    /// Advance both handles; returns the new offset while either is moving.
    pub fn advance(&mut self, dt: f32) -> Option<Vec2> {
        let x = self.x.advance(dt);
        let y = self.y.advance(dt);
        (x.is_some() || y.is_some()).then(|| self.offset())
    }
}
