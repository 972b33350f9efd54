pub mod config;
pub mod constants;
pub mod cursor;
pub mod ease;
pub mod error;
pub mod geometry;
pub mod host;
pub mod magnet;
pub mod motion;
pub mod mount;
pub mod tracker;
pub mod tween;

pub use config::CursorConfig;
pub use cursor::Cursor;
pub use ease::Ease;
pub use error::CursorError;
pub use geometry::{Rect, Transform2D};
pub use host::{FrameHandler, Host, PointerHandler, Source, Stage};
pub use magnet::{MagneticTarget, TargetSpec};
pub use motion::{Lerp, Motion, MotionFilter, Smoothed, Stretch};
pub use mount::{mount, Mounted};
pub use tracker::{Aim, InteractionTracker};
pub use tween::{QuickTo, Tween};
