//! Ripple field evaluation.
//!
//! The field is a pure function of (query coordinate, center, ring radius,
//! parameters). [`RippleState`] carries the per-surface clock and center and
//! implements the IDLE/ACTIVE state machine; [`FieldSampler`] is the frozen,
//! per-frame view of one surface that a rasterizer samples per fragment.

use crate::constants::{AA_BAND_SCALE, MIN_AA_BAND};
use crate::params::{CoordinateMode, PulsePolicy, RippleParameters};
use glam::{Vec2, Vec3};

/// Center of an active ripple, in the space it was picked in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RippleCenter {
    Param(Vec2),
    World(Vec3),
}

impl RippleCenter {
    pub fn mode(&self) -> CoordinateMode {
        match self {
            RippleCenter::Param(_) => CoordinateMode::SurfaceParam,
            RippleCenter::World(_) => CoordinateMode::World,
        }
    }
}

/// A point at which the field is sampled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldCoord {
    Param(Vec2),
    World(Vec3),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RipplePhase {
    Idle,
    Active,
}

/// Per-surface ripple clock and center.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleState {
    elapsed_time: f32,
    active_center: Option<RippleCenter>,
    activated_at: f32,
}

impl RippleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle state whose clock starts at `elapsed_time` (used on reload so the
    /// session clock keeps running).
    pub fn starting_at(elapsed_time: f32) -> Self {
        Self {
            elapsed_time: elapsed_time.max(0.0),
            active_center: None,
            activated_at: elapsed_time.max(0.0),
        }
    }

    #[inline]
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    #[inline]
    pub fn active_center(&self) -> Option<RippleCenter> {
        self.active_center
    }

    #[inline]
    pub fn phase(&self) -> RipplePhase {
        if self.active_center.is_some() {
            RipplePhase::Active
        } else {
            RipplePhase::Idle
        }
    }

    /// Seconds since the current activation began; zero when idle.
    #[inline]
    pub fn age(&self) -> f32 {
        match self.active_center {
            Some(_) => (self.elapsed_time - self.activated_at).max(0.0),
            None => 0.0,
        }
    }

    /// Advance the clock. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt_sec: f32) {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.elapsed_time += dt_sec;
        }
    }

    /// IDLE→ACTIVE starts a new pulse; ACTIVE→ACTIVE only moves the center.
    /// Returns true when this call started a new activation.
    pub fn activate(&mut self, center: RippleCenter) -> bool {
        let started = self.active_center.is_none();
        if started {
            self.activated_at = self.elapsed_time;
        }
        self.active_center = Some(center);
        started
    }

    /// ACTIVE→IDLE. Returns true if the state was active.
    pub fn clear(&mut self) -> bool {
        self.active_center.take().is_some()
    }
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Width of the area-mask transition for a given per-pixel footprint.
#[inline]
pub fn aa_band(footprint: f32) -> f32 {
    let f = if footprint.is_finite() { footprint.abs() } else { 0.0 };
    (f * AA_BAND_SCALE).max(MIN_AA_BAND)
}

/// Smooth falloff: 1 at the center, 0 from `radius` outward.
pub fn area_mask(distance: f32, radius: f32, footprint: f32) -> f32 {
    if !(radius > 0.0) {
        return 0.0;
    }
    let edge0 = (radius - aa_band(footprint)).max(0.0);
    1.0 - smoothstep(edge0, radius, distance)
}

/// Gaussian band of standard deviation `thickness` centered at `ring_radius`.
pub fn ring(distance: f32, ring_radius: f32, thickness: f32) -> f32 {
    let sigma = thickness.max(crate::constants::MIN_RING_THICKNESS);
    let z = (distance - ring_radius) / sigma;
    (-0.5 * z * z).exp()
}

/// Radius of the traveling ring after `age` seconds of activation.
pub fn ring_center_radius(params: &RippleParameters, age: f32) -> f32 {
    let grown = age.max(0.0) * params.speed.max(0.0);
    match params.pulse {
        PulsePolicy::SinglePulse => grown,
        PulsePolicy::Repeating if params.radius > 0.0 => grown.rem_euclid(params.radius),
        PulsePolicy::Repeating => 0.0,
    }
}

/// Field intensity at `distance` from the center. Never negative; no upper clamp.
pub fn intensity(params: &RippleParameters, distance: f32, ring_radius: f32, footprint: f32) -> f32 {
    if !params.is_renderable() {
        return 0.0;
    }
    let mask = area_mask(distance, params.radius, footprint);
    let band = ring(distance, ring_radius, params.ring_thickness);
    (mask * band * params.intensity).max(0.0)
}

/// Additive color term for the given intensity.
#[inline]
pub fn color_contribution(params: &RippleParameters, intensity: f32) -> [f32; 3] {
    [
        params.color[0] * intensity,
        params.color[1] * intensity,
        params.color[2] * intensity,
    ]
}

/// Distance between a query coordinate and a center of the same kind.
#[inline]
pub fn coord_distance(coord: FieldCoord, center: RippleCenter) -> Option<f32> {
    match (coord, center) {
        (FieldCoord::Param(p), RippleCenter::Param(c)) => Some(p.distance(c)),
        (FieldCoord::World(p), RippleCenter::World(c)) => Some(p.distance(c)),
        _ => None,
    }
}

/// Frozen per-frame view of one surface's field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSampler {
    pub params: RippleParameters,
    pub center: Option<RippleCenter>,
    pub ring_radius: f32,
}

impl FieldSampler {
    pub fn new(params: RippleParameters, state: &RippleState) -> Self {
        Self {
            params,
            center: state.active_center(),
            ring_radius: ring_center_radius(&params, state.age()),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.center.is_some() && self.params.is_renderable()
    }

    /// Coordinate space the rasterizer should feed to [`Self::intensity`].
    pub fn mode(&self) -> CoordinateMode {
        self.center
            .map(|c| c.mode())
            .unwrap_or(self.params.coordinate_mode)
    }

    pub fn intensity(&self, coord: FieldCoord, footprint: f32) -> f32 {
        let Some(center) = self.center else {
            return 0.0;
        };
        match coord_distance(coord, center) {
            Some(d) => intensity(&self.params, d, self.ring_radius, footprint),
            None => 0.0,
        }
    }

    pub fn color(&self, coord: FieldCoord, footprint: f32) -> [f32; 3] {
        color_contribution(&self.params, self.intensity(coord, footprint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn aa_band_has_floor() {
        assert_eq!(aa_band(0.0), MIN_AA_BAND);
        assert_eq!(aa_band(f32::NAN), MIN_AA_BAND);
        assert!((aa_band(0.01) - 0.01 * AA_BAND_SCALE).abs() < 1e-7);
    }

    #[test]
    fn state_machine_transitions() {
        let mut s = RippleState::new();
        assert_eq!(s.phase(), RipplePhase::Idle);
        s.advance(1.0);
        assert!(s.activate(RippleCenter::Param(Vec2::new(0.5, 0.5))));
        assert_eq!(s.phase(), RipplePhase::Active);
        s.advance(0.25);
        assert!(!s.activate(RippleCenter::Param(Vec2::new(0.6, 0.5))));
        assert!((s.age() - 0.25).abs() < 1e-6);
        assert!(s.clear());
        assert!(!s.clear());
        assert_eq!(s.phase(), RipplePhase::Idle);
        assert!((s.elapsed_time() - 1.25).abs() < 1e-6);
    }

    #[test]
    fn advance_ignores_bad_deltas() {
        let mut s = RippleState::new();
        s.advance(-1.0);
        s.advance(f32::NAN);
        assert_eq!(s.elapsed_time(), 0.0);
    }
}
