/// DOM anchors and frame-loop tuning for the web host.
///
/// Motion tuning lives in `cursor_core::constants`; these only describe how the overlay
/// finds its elements and how frames are timed in the browser.

// Markup contract
pub const CURSOR_SELECTOR: &str = "[data-cursor]"; // the visual cursor element
pub const TARGET_SELECTOR: &str = "[data-hover]"; // magnetic controls
pub const HOVER_BOUNDS_SELECTOR: &str = "[data-hover-bounds]"; // optional enlarged hit area

// Pointer events the host listens for
pub const EVENT_POINTER_MOVE: &str = "pointermove";
pub const EVENT_POINTER_ENTER: &str = "pointerenter";
pub const EVENT_POINTER_LEAVE: &str = "pointerleave";

// Frame timing
// Upper bound on a single frame step, so a backgrounded tab does not jump tweens to the end.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Rendering
pub const CURSOR_CENTERING: &str = "translate(-50%, -50%)"; // cursor is anchored at its middle
pub const CSS_PX_DECIMALS: usize = 3;
pub const CSS_SCALE_DECIMALS: usize = 4;
