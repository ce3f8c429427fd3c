pub mod asset;
pub mod camera;
pub mod constants;
pub mod error;
pub mod field;
pub mod gpu;
pub mod locator;
pub mod params;
pub mod ray;
pub mod registry;
pub mod surface;

pub static RIPPLE_WGSL: &str = include_str!("../shaders/ripple.wgsl");

pub use camera::*;
pub use error::*;
pub use field::{FieldCoord, FieldSampler, RippleCenter, RipplePhase, RippleState};
pub use locator::{SurfaceHit, SurfaceLocator};
pub use params::*;
pub use registry::SurfaceRegistry;
pub use surface::*;

/// Startup configuration for a viewer session.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub asset_url: String,
    pub ripple: RippleParameters,
    pub fallback: ParamFallback,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            asset_url: "assets/model.glb".to_string(),
            ripple: RippleParameters::default(),
            fallback: ParamFallback::World,
        }
    }
}
