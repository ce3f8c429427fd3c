//! Pointer → surface hit.
//!
//! [`SurfaceLocator::locate`] is a pure query over the registry and the camera;
//! [`SurfaceLocator::apply`] performs the state side effects. Pointer handlers
//! normally call [`SurfaceLocator::handle_pointer`], which does both.

use crate::camera::CameraTransform;
use crate::field::RippleCenter;
use crate::params::{CoordinateMode, ParamFallback};
use crate::ray::Ray;
use crate::registry::SurfaceRegistry;
use crate::surface::{InteractiveSurface, SurfaceId};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Nearest intersection of the view ray with a registered surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    pub surface_id: SurfaceId,
    pub world_point: Vec3,
    pub surface_param: Option<Vec2>,
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceLocator {
    pub fallback: ParamFallback,
}

impl SurfaceLocator {
    pub fn new(fallback: ParamFallback) -> Self {
        Self { fallback }
    }

    /// Nearest hit under `ndc` (x, y in [-1, 1]), or `None`.
    pub fn locate(
        &self,
        registry: &SurfaceRegistry,
        ndc: Vec2,
        camera: &CameraTransform,
    ) -> Option<SurfaceHit> {
        if !ndc.is_finite() || ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
            return None;
        }
        let ray = camera.ray_from_ndc(ndc)?;
        locate_ray(registry, &ray)
    }

    /// Apply a locate result: a hit activates only the hit surface, a miss
    /// idles every surface.
    pub fn apply(&self, registry: &mut SurfaceRegistry, hit: Option<&SurfaceHit>) {
        let Some(hit) = hit else {
            registry.clear_all_centers();
            return;
        };
        let Some(mode) = registry
            .get(hit.surface_id)
            .map(|e| e.params.coordinate_mode)
        else {
            registry.clear_all_centers();
            return;
        };
        match center_for_hit(hit, mode, self.fallback) {
            Some(center) => registry.activate_exclusive(hit.surface_id, center),
            None => registry.clear_all_centers(),
        }
    }

    pub fn handle_pointer(
        &self,
        registry: &mut SurfaceRegistry,
        ndc: Vec2,
        camera: &CameraTransform,
    ) -> Option<SurfaceHit> {
        let hit = self.locate(registry, ndc, camera);
        self.apply(registry, hit.as_ref());
        hit
    }
}

/// Resolve which center a hit produces for the requested mode.
pub fn center_for_hit(
    hit: &SurfaceHit,
    mode: CoordinateMode,
    fallback: ParamFallback,
) -> Option<RippleCenter> {
    match (mode, hit.surface_param) {
        (CoordinateMode::World, _) => Some(RippleCenter::World(hit.world_point)),
        (CoordinateMode::SurfaceParam, Some(uv)) => Some(RippleCenter::Param(uv)),
        (CoordinateMode::SurfaceParam, None) => match fallback {
            ParamFallback::World => Some(RippleCenter::World(hit.world_point)),
            ParamFallback::Suppress => None,
        },
    }
}

/// Nearest hit of `ray` against all interactive surfaces.
pub fn locate_ray(registry: &SurfaceRegistry, ray: &Ray) -> Option<SurfaceHit> {
    // Broad phase: surfaces whose bounds the ray enters, nearest first.
    let mut candidates: SmallVec<[(f32, usize); 8]> = registry
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.surface.is_interactive())
        .filter_map(|(i, e)| {
            let bounds = e.surface.bounds()?;
            ray.intersect_aabb(&bounds).map(|t| (t, i))
        })
        .collect();
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut best: Option<SurfaceHit> = None;
    for (entry_t, i) in candidates {
        if best.is_some_and(|b| entry_t > b.distance) {
            break;
        }
        let surface = &registry.entries()[i].surface;
        if let Some(hit) = intersect_surface(surface, ray) {
            match best {
                Some(b) if hit.distance >= b.distance => {}
                _ => best = Some(hit),
            }
        }
    }
    best
}

/// Nearest hit of `ray` with one surface's triangles.
pub fn intersect_surface(surface: &InteractiveSurface, ray: &Ray) -> Option<SurfaceHit> {
    let g = &surface.geometry;
    let uvs = surface
        .has_parameterization()
        .then(|| g.uvs.as_deref())
        .flatten();
    let mut best: Option<(f32, [usize; 3], crate::ray::TriangleHit)> = None;
    for t in 0..g.triangle_count() {
        let Some(idx @ [a, b, c]) = g.triangle(t) else {
            continue;
        };
        let Some(hit) = ray.intersect_triangle(g.positions[a], g.positions[b], g.positions[c])
        else {
            continue;
        };
        match best {
            Some((bt, _, _)) if hit.t >= bt => {}
            _ => best = Some((hit.t, idx, hit)),
        }
    }
    let (t, [a, b, c], tri) = best?;
    Some(SurfaceHit {
        surface_id: surface.id,
        world_point: ray.at(t),
        surface_param: uvs.map(|uv| tri.interpolate(uv[a], uv[b], uv[c])),
        distance: t,
    })
}
