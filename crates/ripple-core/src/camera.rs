//! Camera types consumed by the locator.
//!
//! The core never drives the camera on its own: the frontend owns an
//! [`OrbitCamera`], updates it from user input and hands the resulting
//! [`CameraTransform`] to picking and rendering each frame.

use crate::constants::{FIT_PADDING, MIN_CAMERA_DISTANCE, PITCH_LIMIT};
use crate::ray::Ray;
use crate::surface::Aabb;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// View and projection matrices for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransform {
    pub view: Mat4,
    pub proj: Mat4,
}

impl CameraTransform {
    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        self.view.inverse().w_axis.truncate()
    }

    /// World-space ray through a point in normalized device coordinates.
    ///
    /// The ray starts on the near plane and passes through the far plane.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray> {
        let inv = self.view_proj().inverse();
        if !inv.is_finite() {
            return None;
        }
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        if p_near.w.abs() < 1e-10 || p_far.w.abs() < 1e-10 {
            return None;
        }
        let near = p_near.truncate() / p_near.w;
        let far = p_far.truncate() / p_far.w;
        Ray::new(near, far - near)
    }
}

/// Right-handed orbit camera looking at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 4.0,
            yaw: 0.0,
            pitch: 0.2,
            aspect: 1.0,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.01,
            zfar: 100.0,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(sy * cp, sp, cy * cp) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }

    pub fn transform(&self) -> CameraTransform {
        CameraTransform {
            view: self.view_matrix(),
            proj: self.projection_matrix(),
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Frame `bounds` so the whole bounding sphere is visible; near/far planes
    /// follow the asset scale.
    pub fn fit_to_bounds(&mut self, bounds: &Aabb) {
        let radius = bounds.radius().max(1e-3);
        let half_v = self.fovy_radians * 0.5;
        let half_h = (half_v.tan() * self.aspect).atan();
        let half_fov = half_v.min(half_h).max(1e-3);
        self.target = bounds.center();
        self.distance = (radius / half_fov.sin() * FIT_PADDING).max(MIN_CAMERA_DISTANCE);
        self.znear = (self.distance - radius * 2.0).max(self.distance * 1e-3);
        self.zfar = self.distance + radius * 4.0;
        log::debug!(
            "[camera] fit center=({:.2},{:.2},{:.2}) radius={:.3} distance={:.3}",
            self.target.x,
            self.target.y,
            self.target.z,
            radius,
            self.distance
        );
    }

    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = (self.yaw + d_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scale the orbit distance; `factor < 1` moves closer.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).max(MIN_CAMERA_DISTANCE);
            // keep the far plane behind the target while zooming out
            self.zfar = self.zfar.max(self.distance * 4.0);
            self.znear = self.znear.min(self.distance * 0.5);
        }
    }
}
