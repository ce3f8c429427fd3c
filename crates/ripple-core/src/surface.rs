use glam::{Vec2, Vec3};

/// Stable handle of an interactive surface within one loaded asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Axis-aligned bounds in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the bounding sphere around [`Self::center`].
    #[inline]
    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }
}

/// Triangle mesh in world space.
///
/// `indices` is a triangle list into `positions`; `normals` and `uvs` (when
/// present) are per vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshGeometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Option<Vec<Vec2>>,
    pub indices: Vec<u32>,
}

impl MeshGeometry {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex indices of triangle `i`, if all of them are in range.
    pub fn triangle(&self, i: usize) -> Option<[usize; 3]> {
        let tri = self.indices.get(i * 3..i * 3 + 3)?;
        let idx = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        idx.iter()
            .all(|&v| v < self.positions.len())
            .then_some(idx)
    }

    /// Flat-accumulated vertex normals, used when the asset has none.
    pub fn compute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for t in 0..self.triangle_count() {
            let Some([a, b, c]) = self.triangle(t) else {
                continue;
            };
            let n = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        self.normals = acc
            .into_iter()
            .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
            .collect();
    }
}

/// A pickable, renderable piece of the loaded asset.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractiveSurface {
    pub id: SurfaceId,
    pub name: String,
    pub geometry: MeshGeometry,
    pub base_color: [f32; 4],
    bounds: Option<Aabb>,
}

impl InteractiveSurface {
    pub fn new(id: SurfaceId, name: impl Into<String>, geometry: MeshGeometry) -> Self {
        let bounds = Aabb::from_points(&geometry.positions);
        Self {
            id,
            name: name.into(),
            geometry,
            base_color: [0.8, 0.8, 0.8, 1.0],
            bounds,
        }
    }

    pub fn with_base_color(mut self, base_color: [f32; 4]) -> Self {
        self.base_color = base_color;
        self
    }

    #[inline]
    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    /// True when the surface carries one texture coordinate per vertex.
    pub fn has_parameterization(&self) -> bool {
        self.geometry
            .uvs
            .as_ref()
            .is_some_and(|uv| !uv.is_empty() && uv.len() == self.geometry.positions.len())
    }

    /// Surfaces without triangles are rendered (if at all) but never picked.
    pub fn is_interactive(&self) -> bool {
        self.bounds.is_some() && self.geometry.triangle_count() > 0
    }
}
