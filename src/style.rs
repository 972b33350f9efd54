use crate::constants::{CSS_PX_DECIMALS, CSS_SCALE_DECIMALS, CURSOR_CENTERING};
use cursor_core::Transform2D;
use glam::Vec2;

/// CSS `transform` for the cursor element. Rotation and scale apply about the element's
/// center, then the element is moved so its middle sits on `(x, y)`.
pub fn cursor_transform_css(t: &Transform2D) -> String {
    format!(
        "{} translate({:.p$}px, {:.p$}px) rotate({:.p$}deg) scale({:.s$}, {:.s$})",
        CURSOR_CENTERING,
        t.x,
        t.y,
        t.rotation_deg,
        t.scale_x,
        t.scale_y,
        p = CSS_PX_DECIMALS,
        s = CSS_SCALE_DECIMALS,
    )
}

/// CSS `transform` for a magnetic control's pull offset.
pub fn offset_css(offset: Vec2) -> String {
    format!(
        "translate({:.p$}px, {:.p$}px)",
        offset.x,
        offset.y,
        p = CSS_PX_DECIMALS
    )
}
