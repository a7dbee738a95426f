// Shared tuning constants for the ink trail, used by the core and the web host.

// Chain layout
pub const MARKER_COUNT: usize = 20; // markers in the chain
pub const MARKER_WIDTH: f32 = 26.0; // css px of an unscaled marker
pub const SCALE_STEP: f32 = 0.05; // base scale lost per index (visual taper)
pub const SINE_EXEMPT_FRACTION: f32 = 0.3; // leading share of markers that never drift

// Trailing
pub const TRAIL_ATTENUATION: f32 = 0.35; // share of the gap to the next marker kept per tick

// Idle drift
pub const IDLE_DELAY_MS: u64 = 150; // pointer silence before the chain goes idle
pub const IDLE_ANGLE_SPEED: f32 = 0.05; // radians per tick
pub const IDLE_RANGE_MARGIN: f32 = 2.0; // px added to every drift amplitude

// Hover blob timing
pub const HOVER_TIME_RATE: f32 = 1.2; // blob time units per second (0.02 per 60 Hz frame)
pub const HOVER_EASE_TAU_SEC: f32 = 0.05; // time constant of rendered transforms chasing the layout
pub const LEAVE_SCALE_SEC: f32 = 0.2; // scale ease-out back to base after hover

// Hover padding added to the element bounds, per shape
pub const PILL_PADDING: [f32; 2] = [20.0, 16.0];
pub const RECT_PADDING: [f32; 2] = [8.0, 6.0];

// Pill layout
pub const PILL_CORE_FRACTION: f32 = 0.3; // markers wobbling at the center
pub const PILL_ORBIT_FRACTION: f32 = 0.7; // markers up to this share orbit; the rest splatter
pub const PILL_CORE_WOBBLE: f32 = 5.0;
pub const PILL_ORBIT_WOBBLE: f32 = 6.0;

// Rounded rectangle layout
pub const RECT_CORE_FRACTION: f32 = 0.4; // markers filling the interior grid
pub const RECT_CORE_COLUMNS: usize = 4;
pub const RECT_CORE_WOBBLE: f32 = 3.0;
pub const RECT_CORNER_RADIUS: f32 = 8.0;
pub const RECT_EDGE_WOBBLE: f32 = 2.0; // px along the outward normal
pub const RECT_EDGE_SPEED: f32 = 15.0; // px of perimeter travelled per blob time unit
