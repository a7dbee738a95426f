// Host-side constants: DOM hooks and frame pacing for the web front end.
// Simulation tuning lives in `ink_cursor_core::constants`.

// Viewports narrower than this keep the native cursor
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// DOM hooks
pub const CONTAINER_ID: &str = "ink-cursor";
pub const HOVER_SELECTOR: &str = "a, button, .clickable";
pub const NO_BLOB_CLASS: &str = "no-cursor-blob";
pub const BLOB_SHAPE_ATTR: &str = "data-blob-shape";
pub const BLOB_TARGET_ATTR: &str = "data-blob-target";
pub const CURSOR_HIDE_ATTR: &str = "data-cursor-hide";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Container overrides for `TrailConfig`
pub const AMOUNT_ATTR: &str = "data-amount";
pub const WIDTH_ATTR: &str = "data-width";
pub const IDLE_MS_ATTR: &str = "data-idle-ms";

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches so the trail doesn't jump
