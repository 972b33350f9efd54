use crate::ease::Ease;

// Default tuning for the cursor motion model. `CursorConfig::default()` is built from these.

// Smoothing
pub const LERP_FACTOR: f32 = 0.1; // fraction of the remaining gap closed per frame
pub const START_POSITION: [f32; 2] = [-100.0, -100.0]; // off-screen until the first pointer move
pub const REST_SCALE: f32 = 1.0;

// Free-roam stretch
pub const VELOCITY_STRETCH_GAIN: f32 = 0.04; // px/frame -> stretch amount
pub const VELOCITY_STRETCH_MAX_X: f32 = 1.0;
pub const VELOCITY_STRETCH_MAX_Y: f32 = 0.3; // keeps scaleY from inverting

// Capture
pub const TETHER: f32 = 0.15; // damped excursion toward the raw pointer
pub const CAPTURE_SCALE: f32 = 2.0;
pub const CAPTURE_STRETCH_GAIN: f32 = 0.01;
pub const CAPTURE_STRETCH_MAX_X: f32 = 0.6;
pub const CAPTURE_STRETCH_MAX_Y: f32 = 0.3;
pub const CAPTURE_STRETCH_AMOUNT: f32 = 3.0; // multiplier on the cubed distance
pub const SNAP_DURATION_SEC: f32 = 0.5;
pub const SNAP_EASE: Ease = Ease::PowerOut(4); // power4.out

// Magnetic pull on the hovered control
pub const MAGNET_PULL: f32 = 0.2;
pub const MAGNET_DURATION_SEC: f32 = 1.0;
pub const MAGNET_ELASTIC_AMPLITUDE: f32 = 1.0;
pub const MAGNET_ELASTIC_PERIOD: f32 = 0.3;
