//! Easing curves for time-based tweens.
//!
//! Shapes follow the GSAP conventions the effect was tuned against: `PowerOut(n)` is
//! `powerN.out` and `ElasticOut` is `elastic.out(amplitude, period)`.

use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// `1 - (1 - t)^(n + 1)`; decelerates with no overshoot.
    PowerOut(i32),
    /// Overshoots and rings down to 1.
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    /// Map normalized time `t` (clamped to `[0, 1]`) to eased progress.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::PowerOut(n) => 1.0 - (1.0 - t).powi(n + 1),
            Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    let a = amplitude.max(1.0);
    let p = period / amplitude.min(1.0);
    let phase = p / TAU * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * t) * ((t - phase) * (TAU / p)).sin() + 1.0
}
