//! Uniform layouts shared with `shaders/ripple.wgsl`.

use crate::field::{FieldSampler, RippleCenter};
use crate::params::CoordinateMode;
use glam::Mat4;

/// Per-surface ripple block. Field order and padding must match
/// `struct Ripple` in the shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RippleUniforms {
    /// xyz = center (xy only in surface-param mode)
    pub center: [f32; 4],
    /// rgb = ripple color, a = peak intensity
    pub color_intensity: [f32; 4],
    /// radius, sigma, ring radius, active (0/1)
    pub shape: [f32; 4],
    /// x = mode (0 surface param, 1 world), yzw unused
    pub mode: [f32; 4],
    pub base_color: [f32; 4],
}

impl RippleUniforms {
    pub fn from_sampler(sampler: &FieldSampler, base_color: [f32; 4]) -> Self {
        let p = &sampler.params;
        let center = match sampler.center {
            Some(RippleCenter::Param(uv)) => [uv.x, uv.y, 0.0, 0.0],
            Some(RippleCenter::World(w)) => [w.x, w.y, w.z, 0.0],
            None => [0.0; 4],
        };
        let mode = match sampler.mode() {
            CoordinateMode::SurfaceParam => 0.0,
            CoordinateMode::World => 1.0,
        };
        Self {
            center,
            color_intensity: [p.color[0], p.color[1], p.color[2], p.intensity.max(0.0)],
            shape: [
                p.radius,
                p.sigma(),
                sampler.ring_radius,
                if sampler.is_active() { 1.0 } else { 0.0 },
            ],
            mode: [mode, 0.0, 0.0, 0.0],
            base_color,
        }
    }
}

/// Per-frame scene block.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = camera eye
    pub eye: [f32; 4],
    /// xyz = direction towards the key light
    pub light_dir: [f32; 4],
    /// x = debug view, y = area-mask band scale, z = min band, w = time
    pub params: [f32; 4],
}

impl SceneUniforms {
    pub fn new(view_proj: Mat4, eye: glam::Vec3, light_dir: glam::Vec3, debug_view: u32, time: f32) -> Self {
        let l = light_dir.normalize_or_zero();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
            light_dir: [l.x, l.y, l.z, 0.0],
            params: [
                debug_view as f32,
                crate::constants::AA_BAND_SCALE,
                crate::constants::MIN_AA_BAND,
                time,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_blocks_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<RippleUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    }
}
