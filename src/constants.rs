use glam::Vec3;

// Frontend tuning constants: camera controls, frame pacing and shading.

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp long stalls (tab switches) to one short step

// Orbit controls
pub const ORBIT_RADIANS_PER_PX: f32 = 0.008;
pub const ZOOM_PER_WHEEL_PX: f32 = 0.0015; // distance scale = exp(delta_y * this)
pub const DRAG_THRESHOLD_PX: f32 = 3.0; // movement before a press turns into an orbit drag

// Shading
pub const LIGHT_DIR: Vec3 = Vec3::new(0.4, 0.9, 0.6); // direction towards the key light
pub const CLEAR_COLOR: [f64; 3] = [0.03, 0.04, 0.08];

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const HINT_ID: &str = "hint-overlay";
pub const MODEL_QUERY_KEY: &str = "model";
