use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CursorError {
    #[error("cursor anchor element is missing")]
    MissingAnchor,
    #[error("lerp_factor must be in (0, 1], got {0}")]
    InvalidLerpFactor(f32),
    #[error("{field} must be a positive duration, got {value}")]
    InvalidDuration { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} = {value} would invert the cursor (must stay below {limit})")]
    InvertingStretch {
        field: &'static str,
        value: f32,
        limit: f32,
    },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}
