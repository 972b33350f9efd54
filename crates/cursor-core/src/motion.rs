//! Per-frame motion model: exponential smoothing of position and scale, plus the
//! velocity-derived stretch used while the cursor roams freely.
//!
//! Write access is split. Event handlers only move targets through [`MotionFilter::chase`];
//! `current` and `previous` only change inside [`MotionFilter::update`].

use crate::config::CursorConfig;
use crate::geometry::heading_deg;
use glam::Vec2;

/// Values the filter can interpolate.
pub trait Lerp: Copy + PartialEq {
    fn lerp_to(self, target: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, target: Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, target: Self, t: f32) -> Self {
        self.lerp(target, t)
    }
}

/// Previous/current/target triple chased by a fixed per-frame factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed<V: Lerp> {
    previous: V,
    current: V,
    target: V,
    lerp_factor: f32,
}

impl<V: Lerp> Smoothed<V> {
    pub fn new(initial: V, lerp_factor: f32) -> Self {
        Self {
            previous: initial,
            current: initial,
            target: initial,
            lerp_factor,
        }
    }

    #[inline]
    pub fn previous(&self) -> V {
        self.previous
    }

    #[inline]
    pub fn current(&self) -> V {
        self.current
    }

    #[inline]
    pub fn target(&self) -> V {
        self.target
    }

    #[inline]
    pub fn set_target(&mut self, target: V) {
        self.target = target;
    }

    /// Close `lerp_factor` of the gap, then snapshot. Returns `(before, after)`.
    ///
    /// Once a step no longer changes the value (the gap is below float resolution),
    /// `current` lands exactly on `target`.
    pub fn step(&mut self) -> (V, V) {
        let next = self.current.lerp_to(self.target, self.lerp_factor);
        self.current = if next == self.current {
            self.target
        } else {
            next
        };
        let before = self.previous;
        self.previous = self.current;
        (before, self.current)
    }
}

/// Velocity stretch computed for a free-roaming frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stretch {
    pub rotation_deg: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

/// Result of one [`MotionFilter::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub scale: f32,
    pub delta: Vec2,
    /// `None` while captured: the capture logic owns rotation and scale then.
    pub stretch: Option<Stretch>,
}

#[derive(Clone, Debug)]
pub struct MotionFilter {
    position: Smoothed<Vec2>,
    scale: Smoothed<f32>,
    stretch_gain: f32,
    stretch_max_x: f32,
    stretch_max_y: f32,
}

impl MotionFilter {
    pub fn new(config: &CursorConfig) -> Self {
        Self {
            position: Smoothed::new(config.start_position_vec2(), config.lerp_factor),
            scale: Smoothed::new(crate::constants::REST_SCALE, config.lerp_factor),
            stretch_gain: config.velocity_stretch_gain,
            stretch_max_x: config.velocity_stretch_max_x,
            stretch_max_y: config.velocity_stretch_max_y,
        }
    }

    #[inline]
    pub fn position(&self) -> &Smoothed<Vec2> {
        &self.position
    }

    #[inline]
    pub fn scale(&self) -> &Smoothed<f32> {
        &self.scale
    }

    /// Point the filter at a new position/scale target.
    pub fn chase(&mut self, position: Vec2, scale: f32) {
        self.position.set_target(position);
        self.scale.set_target(scale);
    }

    /// Advance one frame. `captured` is read-only input from the interaction side.
    pub fn update(&mut self, captured: bool) -> Motion {
        let (before, position) = self.position.step();
        let (_, scale) = self.scale.step();
        let delta = position - before;

        let stretch = (!captured).then(|| {
            let distance = delta.length() * self.stretch_gain;
            Stretch {
                rotation_deg: heading_deg(delta),
                scale_x: scale + distance.min(self.stretch_max_x),
                scale_y: scale - distance.min(self.stretch_max_y),
            }
        });

        Motion {
            position,
            scale,
            delta,
            stretch,
        }
    }
}
