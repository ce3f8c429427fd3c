// Shared ripple tuning constants used by the core and the web frontend.

// Default ripple look
pub const DEFAULT_RADIUS: f32 = 0.3; // extent in the surface's coordinate units
pub const DEFAULT_RING_THICKNESS: f32 = 0.05; // gaussian sigma of the ring band
pub const DEFAULT_SPEED: f32 = 1.0; // ring growth per second
pub const DEFAULT_INTENSITY: f32 = 1.0;
pub const DEFAULT_COLOR: [f32; 3] = [0.35, 0.75, 1.0];

// Numeric floors
pub const MIN_RING_THICKNESS: f32 = 1e-4; // avoids division by zero in the gaussian
pub const MIN_AA_BAND: f32 = 1e-4; // smallest smoothstep band for the area mask

// Area mask band width relative to the per-pixel footprint of the distance
pub const AA_BAND_SCALE: f32 = 1.5;

// Picking
pub const RAY_EPSILON: f32 = 1e-7; // parallel-ray rejection in ray/triangle tests
pub const BARY_SLACK: f32 = 1e-5; // barycentric tolerance on shared edges

// Camera framing
pub const FIT_PADDING: f32 = 1.25; // extra room around the fitted bounds
pub const MIN_CAMERA_DISTANCE: f32 = 0.05;
pub const PITCH_LIMIT: f32 = 1.5; // radians, keeps the orbit away from the poles
