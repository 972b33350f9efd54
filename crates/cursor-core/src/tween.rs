//! Time-based tweens of a single numeric property.
//!
//! `Tween` is a one-shot from -> to animation. `QuickTo` is a reusable handle bound to one
//! property: each `to()` restarts from wherever the value currently is, so repeated
//! retargeting never stacks tweens.

use crate::ease::Ease;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            ease,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.ease.apply(self.progress())
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Step the clock by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        self.value()
    }
}

#[derive(Clone, Debug)]
pub struct QuickTo {
    value: f32,
    duration: f32,
    ease: Ease,
    tween: Option<Tween>,
}

impl QuickTo {
    pub fn new(initial: f32, duration: f32, ease: Ease) -> Self {
        Self {
            value: initial,
            duration,
            ease,
            tween: None,
        }
    }

    /// Retarget. The in-flight tween (if any) is replaced in place.
    pub fn to(&mut self, target: f32) {
        match &mut self.tween {
            Some(t) if t.target() == target => {}
            slot => *slot = Some(Tween::new(self.value, target, self.duration, self.ease)),
        }
    }

    /// Advance the clock. Returns the new value while a tween is running, including the
    /// final frame that lands on the target; `None` once idle.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        let tween = self.tween.as_mut()?;
        self.value = tween.advance(dt);
        if tween.is_finished() {
            self.tween = None;
        }
        Some(self.value)
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}
