use glam::Vec2;

/// Axis-aligned rectangle in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Rendered cursor transform: translation in px, rotation in degrees, non-uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub x: f32,
    pub y: f32,
    pub rotation_deg: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation_deg: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl Transform2D {
    pub fn at(position: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..Self::default()
        }
    }
}

/// Direction of `v` in degrees, `atan2(y, x)`. Zero for a zero vector.
#[inline]
pub fn heading_deg(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}
