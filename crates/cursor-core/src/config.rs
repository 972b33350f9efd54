//! Runtime tuning for a mounted cursor.
//!
//! Every field has a default taken from `constants.rs`. The struct deserializes with
//! `#[serde(default)]`, so hosts may override only the fields they care about.

use crate::constants::*;
use crate::ease::Ease;
use crate::error::CursorError;
use glam::Vec2;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub lerp_factor: f32,
    pub start_position: [f32; 2],

    pub velocity_stretch_gain: f32,
    pub velocity_stretch_max_x: f32,
    pub velocity_stretch_max_y: f32,

    pub tether: f32,
    pub capture_scale: f32,
    pub capture_stretch_gain: f32,
    pub capture_stretch_max_x: f32,
    pub capture_stretch_max_y: f32,
    pub capture_stretch_amount: f32,
    pub snap_duration_sec: f32,

    pub magnet_pull: f32,
    pub magnet_duration_sec: f32,
    pub magnet_elastic_amplitude: f32,
    pub magnet_elastic_period: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            lerp_factor: LERP_FACTOR,
            start_position: START_POSITION,
            velocity_stretch_gain: VELOCITY_STRETCH_GAIN,
            velocity_stretch_max_x: VELOCITY_STRETCH_MAX_X,
            velocity_stretch_max_y: VELOCITY_STRETCH_MAX_Y,
            tether: TETHER,
            capture_scale: CAPTURE_SCALE,
            capture_stretch_gain: CAPTURE_STRETCH_GAIN,
            capture_stretch_max_x: CAPTURE_STRETCH_MAX_X,
            capture_stretch_max_y: CAPTURE_STRETCH_MAX_Y,
            capture_stretch_amount: CAPTURE_STRETCH_AMOUNT,
            snap_duration_sec: SNAP_DURATION_SEC,
            magnet_pull: MAGNET_PULL,
            magnet_duration_sec: MAGNET_DURATION_SEC,
            magnet_elastic_amplitude: MAGNET_ELASTIC_AMPLITUDE,
            magnet_elastic_period: MAGNET_ELASTIC_PERIOD,
        }
    }
}

impl CursorConfig {
    /// Check the values a host handed us before anything is attached.
    pub fn validate(&self) -> Result<(), CursorError> {
        let fields: [(&'static str, f32); 17] = [
            ("lerp_factor", self.lerp_factor),
            ("start_position.x", self.start_position[0]),
            ("start_position.y", self.start_position[1]),
            ("velocity_stretch_gain", self.velocity_stretch_gain),
            ("velocity_stretch_max_x", self.velocity_stretch_max_x),
            ("velocity_stretch_max_y", self.velocity_stretch_max_y),
            ("tether", self.tether),
            ("capture_scale", self.capture_scale),
            ("capture_stretch_gain", self.capture_stretch_gain),
            ("capture_stretch_max_x", self.capture_stretch_max_x),
            ("capture_stretch_max_y", self.capture_stretch_max_y),
            ("capture_stretch_amount", self.capture_stretch_amount),
            ("snap_duration_sec", self.snap_duration_sec),
            ("magnet_pull", self.magnet_pull),
            ("magnet_duration_sec", self.magnet_duration_sec),
            ("magnet_elastic_amplitude", self.magnet_elastic_amplitude),
            ("magnet_elastic_period", self.magnet_elastic_period),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CursorError::NonFinite { field, value });
            }
        }
        if !(self.lerp_factor > 0.0 && self.lerp_factor <= 1.0) {
            return Err(CursorError::InvalidLerpFactor(self.lerp_factor));
        }
        for (field, value) in [
            ("snap_duration_sec", self.snap_duration_sec),
            ("magnet_duration_sec", self.magnet_duration_sec),
        ] {
            if value <= 0.0 {
                return Err(CursorError::InvalidDuration { field, value });
            }
        }
        for (field, value) in [
            ("magnet_elastic_amplitude", self.magnet_elastic_amplitude),
            ("magnet_elastic_period", self.magnet_elastic_period),
            ("capture_scale", self.capture_scale),
        ] {
            if value <= 0.0 {
                return Err(CursorError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("velocity_stretch_gain", self.velocity_stretch_gain),
            ("velocity_stretch_max_x", self.velocity_stretch_max_x),
            ("velocity_stretch_max_y", self.velocity_stretch_max_y),
            ("capture_stretch_gain", self.capture_stretch_gain),
            ("capture_stretch_max_x", self.capture_stretch_max_x),
            ("capture_stretch_max_y", self.capture_stretch_max_y),
            ("capture_stretch_amount", self.capture_stretch_amount),
        ] {
            if value < 0.0 {
                return Err(CursorError::Negative { field, value });
            }
        }

        // scale_y = scale - cap must stay above zero; the smoothed scale never drops
        // below the smaller of the rest and capture scales
        let min_scale = REST_SCALE.min(self.capture_scale);
        if self.velocity_stretch_max_y >= min_scale {
            return Err(CursorError::InvertingStretch {
                field: "velocity_stretch_max_y",
                value: self.velocity_stretch_max_y,
                limit: min_scale,
            });
        }
        let capture_squash = self.capture_stretch_max_y.powi(3) * self.capture_stretch_amount;
        if capture_squash >= self.capture_scale {
            return Err(CursorError::InvertingStretch {
                field: "capture_stretch_max_y",
                value: self.capture_stretch_max_y,
                limit: (self.capture_scale / self.capture_stretch_amount).cbrt(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn start_position_vec2(&self) -> Vec2 {
        Vec2::from_array(self.start_position)
    }

    #[inline]
    pub fn magnet_ease(&self) -> Ease {
        Ease::ElasticOut {
            amplitude: self.magnet_elastic_amplitude,
            period: self.magnet_elastic_period,
        }
    }
}
