use crate::constants::{BARY_SLACK, RAY_EPSILON};
use crate::surface::Aabb;
use glam::Vec3;

/// A ray with a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Ray/triangle hit: distance along the ray plus barycentrics of v1 and v2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleHit {
    pub t: f32,
    pub u: f32,
    pub v: f32,
}

impl TriangleHit {
    /// Interpolate a per-vertex attribute with the hit's barycentrics.
    #[inline]
    pub fn interpolate<T>(&self, a: T, b: T, c: T) -> T
    where
        T: std::ops::Mul<f32, Output = T> + std::ops::Add<Output = T>,
    {
        a * (1.0 - self.u - self.v) + b * self.u + c * self.v
    }
}

impl Ray {
    /// Returns `None` when `direction` cannot be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        origin.is_finite().then_some(Self { origin, direction })
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test. Returns the entry distance (clamped to 0) when the box is
    /// in front of or around the origin.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let o = self.origin[axis];
            let d = self.direction[axis];
            let (lo, hi) = (aabb.min[axis], aabb.max[axis]);
            if d.abs() < 1e-12 {
                // parallel to this slab: inside or never
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let (mut a, mut b) = ((lo - o) * inv, (hi - o) * inv);
            if a > b {
                std::mem::swap(&mut a, &mut b);
            }
            t_min = t_min.max(a);
            t_max = t_max.min(b);
            if t_max < t_min {
                return None;
            }
        }
        (t_max >= 0.0).then_some(t_min.max(0.0))
    }

    /// Möller–Trumbore, two-sided. Hits behind the origin are rejected.
    pub fn intersect_triangle(&self, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<TriangleHit> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let h = self.direction.cross(edge2);
        let a = edge1.dot(h);
        if a.abs() < RAY_EPSILON {
            return None;
        }
        let f = 1.0 / a;
        let s = self.origin - v0;
        let u = f * s.dot(h);
        // small slack so rays through a shared edge hit at least one side
        if !(-BARY_SLACK..=1.0 + BARY_SLACK).contains(&u) {
            return None;
        }
        let q = s.cross(edge1);
        let v = f * self.direction.dot(q);
        if v < -BARY_SLACK || u + v > 1.0 + BARY_SLACK {
            return None;
        }
        let t = f * edge2.dot(q);
        (t > RAY_EPSILON).then_some(TriangleHit { t, u, v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_z() -> Ray {
        Ray::new(Vec3::new(0.25, 0.25, 5.0), Vec3::NEG_Z).expect("ray")
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    }

    #[test]
    fn triangle_hit_and_barycentrics() {
        let hit = ray_z()
            .intersect_triangle(Vec3::ZERO, Vec3::X, Vec3::Y)
            .expect("hit");
        assert!((hit.t - 5.0).abs() < 1e-5);
        assert!((hit.u - 0.25).abs() < 1e-5);
        assert!((hit.v - 0.25).abs() < 1e-5);
        let p = hit.interpolate(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!((p - Vec3::new(0.25, 0.25, 0.0)).length() < 1e-5);
    }

    #[test]
    fn triangle_behind_origin_misses() {
        let r = Ray::new(Vec3::new(0.25, 0.25, -1.0), Vec3::NEG_Z).expect("ray");
        assert!(r.intersect_triangle(Vec3::ZERO, Vec3::X, Vec3::Y).is_none());
    }

    #[test]
    fn flat_aabb_is_hit() {
        let aabb = Aabb {
            min: Vec3::new(0.0, 0.0, 0.0),
            max: Vec3::new(1.0, 1.0, 0.0),
        };
        let t = ray_z().intersect_aabb(&aabb).expect("hit");
        assert!((t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn aabb_beside_ray_misses() {
        let aabb = Aabb {
            min: Vec3::new(2.0, 2.0, -1.0),
            max: Vec3::new(3.0, 3.0, 1.0),
        };
        assert!(ray_z().intersect_aabb(&aabb).is_none());
    }
}
