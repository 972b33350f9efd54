//! Hover capture and target selection.
//!
//! Capture is a small stack of targets whose hover region was entered and not yet exited.
//! The most recently entered one captures the cursor, so overlapping regions resolve
//! deterministically and leaving an inner region hands capture back to the outer one.

use crate::config::CursorConfig;
use crate::geometry::heading_deg;
use crate::host::Stage;
use crate::motion::Stretch;
use glam::Vec2;
use smallvec::SmallVec;

/// What the motion filter should chase after a pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aim {
    pub position: Vec2,
    pub scale: f32,
    /// Captured only: rotation to assign immediately and the scale pair to ease toward.
    pub snap: Option<Stretch>,
}

#[derive(Clone, Debug)]
pub struct InteractionTracker<E> {
    regions: Vec<E>,
    captures: SmallVec<[usize; 2]>,
    tether: f32,
    capture_scale: f32,
    stretch_gain: f32,
    stretch_max_x: f32,
    stretch_max_y: f32,
    stretch_amount: f32,
}

impl<E: Clone + PartialEq + std::fmt::Debug> InteractionTracker<E> {
    pub fn new(config: &CursorConfig, regions: Vec<E>) -> Self {
        Self {
            regions,
            captures: SmallVec::new(),
            tether: config.tether,
            capture_scale: config.capture_scale,
            stretch_gain: config.capture_stretch_gain,
            stretch_max_x: config.capture_stretch_max_x,
            stretch_max_y: config.capture_stretch_max_y,
            stretch_amount: config.capture_stretch_amount,
        }
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        !self.captures.is_empty()
    }

    #[inline]
    pub fn capture_index(&self) -> Option<usize> {
        self.captures.last().copied()
    }

    pub fn capture_target(&self) -> Option<&E> {
        self.capture_index().and_then(|i| self.regions.get(i))
    }

    pub fn hover_enter(&mut self, target: usize) {
        if target >= self.regions.len() {
            log::warn!("[cursor] enter on unknown target {}", target);
            return;
        }
        self.captures.retain(|i| *i != target);
        self.captures.push(target);
        log::debug!("[cursor] captured by target {}", target);
    }

    pub fn hover_exit(&mut self, target: usize) {
        let before = self.captures.len();
        self.captures.retain(|i| *i != target);
        if self.captures.len() != before {
            log::debug!("[cursor] released by target {}", target);
        }
    }

    /// Decide the filter target for a raw pointer position.
    ///
    /// A capture target whose geometry can no longer be measured is dropped from the stack
    /// and the next one (or free-roam) is used instead.
    pub fn on_pointer_move<S>(&mut self, pointer: Vec2, stage: &S) -> Aim
    where
        S: Stage<Element = E> + ?Sized,
    {
        while let Some(index) = self.capture_index() {
            match stage.bounding_rect(&self.regions[index]) {
                Some(rect) => return self.captured_aim(pointer, rect.center()),
                None => {
                    log::warn!(
                        "[cursor] target {} lost its geometry; releasing capture",
                        index
                    );
                    self.captures.pop();
                }
            }
        }
        Aim {
            position: pointer,
            scale: crate::constants::REST_SCALE,
            snap: None,
        }
    }

    fn captured_aim(&self, pointer: Vec2, center: Vec2) -> Aim {
        let d = pointer - center;
        let distance = d.length() * self.stretch_gain;
        let stretch_x = distance.min(self.stretch_max_x).powi(3) * self.stretch_amount;
        let stretch_y = distance.min(self.stretch_max_y).powi(3) * self.stretch_amount;
        Aim {
            position: center + d * self.tether,
            scale: self.capture_scale,
            snap: Some(Stretch {
                rotation_deg: heading_deg(d),
                scale_x: self.capture_scale + stretch_x,
                scale_y: self.capture_scale - stretch_y,
            }),
        }
    }
}
